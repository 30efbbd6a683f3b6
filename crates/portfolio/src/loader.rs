//! GitHub repository loading.

use crate::{
    config::{GitHubConfig, PortfolioConfig},
    project::{GitHubRepo, Project},
};
use chrono::Utc;
use futures::future::join_all;
use gloo::net::http::Request;
use log::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: gloo::net::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

/// Most recently updated repositories of `user` first.
#[must_use]
pub fn repos_url(github: &GitHubConfig, user: &str) -> String {
    format!(
        "{}/users/{user}/repos?sort=updated&per_page={}",
        github.api_base, github.per_page
    )
}

pub async fn fetch_user_repos(
    github: &GitHubConfig,
    user: &str,
) -> Result<Vec<GitHubRepo>, LoadError> {
    let url = repos_url(github, user);
    let transport = |source| LoadError::Transport {
        url: url.clone(),
        source,
    };
    let response = Request::get(&url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .map_err(transport)?;
    if !response.ok() {
        return Err(LoadError::Status {
            url: url.clone(),
            status: response.status(),
        });
    }
    let repos: Vec<GitHubRepo> = response.json().await.map_err(transport)?;
    debug!("Got {} repositories of {user}", repos.len());
    Ok(repos)
}

/// Fetches every configured user concurrently and merges the result with the
/// catalog. A user that cannot be fetched is logged and skipped.
pub async fn fetch_projects(config: &PortfolioConfig) -> Vec<Project> {
    let requests = config.github.users.iter().map(|user| async move {
        match fetch_user_repos(&config.github, user).await {
            Ok(repos) => Some((user.clone(), repos)),
            Err(err) => {
                error!("Error fetching repositories of {user}: {err}");
                None
            }
        }
    });
    let fetched = join_all(requests).await.into_iter().flatten();
    config.projects.assemble(fetched, Utc::now())
}
