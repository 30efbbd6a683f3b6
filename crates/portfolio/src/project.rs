//! Project records and how they are assembled from GitHub data plus the
//! curated catalog in the site configuration.

use crate::filter::sort_projects;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use itertools::Itertools as _;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "frontend";
const UNKNOWN_LANGUAGE: &str = "Unknown";

/// One entry of the portfolio grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub repo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub featured: bool,
    pub owner: String,
    #[serde(default = "unknown_language")]
    pub language: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub is_private: bool,
}

fn unknown_language() -> String {
    UNKNOWN_LANGUAGE.to_string()
}

impl Project {
    /// Path segment of the project's detail page.
    #[must_use]
    pub fn route_key(&self) -> &str {
        &self.title
    }

    /// Accepts the title itself or its lowercase, dash-separated form.
    #[must_use]
    pub fn answers_to(&self, key: &str) -> bool {
        self.title == key || self.title.to_lowercase().split_whitespace().join("-") == key
    }

    /// Private projects have no public repository to link to.
    #[must_use]
    pub fn repo_link(&self) -> Option<&str> {
        (!self.is_private && self.repo_url != "#").then_some(self.repo_url.as_str())
    }
}

#[must_use]
pub fn find_project<'a>(projects: &'a [Project], key: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.answers_to(key))
}

/// Subset of the GitHub `repos` API payload the site uses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stargazers_count: Option<u32>,
    #[serde(default)]
    pub owner: Option<RepoOwner>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

/// Hand-written overrides for a repository.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CustomProjectData {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub category: Option<Vec<String>>,
}

/// Which repositories are shown and how they are presented.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProjectCatalog {
    #[serde(default)]
    pub allow_list: Vec<String>,
    #[serde(default)]
    pub featured: Vec<String>,
    #[serde(default)]
    pub custom: IndexMap<String, CustomProjectData>,
    /// Projects without a public repository, shown as-is.
    #[serde(default, rename = "private")]
    pub private_projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Maps an allow-listed repository to a project; `None` for anything else.
    ///
    /// `fetched_at` stands in for a missing creation date.
    #[must_use]
    pub fn project_from_repo(
        &self,
        repo: GitHubRepo,
        user: &str,
        fetched_at: DateTime<Utc>,
    ) -> Option<Project> {
        if !self.allow_list.contains(&repo.name) {
            return None;
        }
        let custom = self.custom.get(&repo.name).cloned().unwrap_or_default();
        let tags = custom
            .tags
            .unwrap_or_else(|| repo.language.iter().cloned().collect());
        Some(Project {
            id: repo.id.to_string(),
            description: custom
                .description
                .or(repo.description)
                .unwrap_or_default(),
            repo_url: repo.html_url,
            demo_url: custom.demo_url,
            tags,
            date: repo.created_at.unwrap_or(fetched_at),
            featured: self.featured.contains(&repo.name),
            owner: repo
                .owner
                .map_or_else(|| user.to_string(), |owner| owner.login),
            language: repo.language.unwrap_or_else(unknown_language),
            stars: repo.stargazers_count.unwrap_or_default(),
            category: custom
                .category
                .unwrap_or_else(|| vec![DEFAULT_CATEGORY.to_string()]),
            is_private: false,
            title: repo.name,
        })
    }

    /// Merges the repositories fetched for every user with the private
    /// projects and orders the result for display.
    pub fn assemble(
        &self,
        fetched: impl IntoIterator<Item = (String, Vec<GitHubRepo>)>,
        fetched_at: DateTime<Utc>,
    ) -> Vec<Project> {
        let mut projects: Vec<Project> = fetched
            .into_iter()
            .flat_map(|(user, repos)| {
                repos
                    .into_iter()
                    .filter_map(|repo| self.project_from_repo(repo, &user, fetched_at))
                    .collect::<Vec<_>>()
            })
            .collect();
        projects.extend(self.private_projects.iter().cloned());
        sort_projects(&mut projects);
        projects
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone as _;

    pub(crate) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    pub(crate) fn project(id: &str, tags: &[&str], category: &[&str], featured: bool) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            description: format!("About {id}"),
            repo_url: format!("https://github.com/example/{id}"),
            demo_url: None,
            tags: tags.iter().map(ToString::to_string).collect(),
            date: at(2024, 1, 1),
            featured,
            owner: "example".to_string(),
            language: "Rust".to_string(),
            stars: 0,
            category: category.iter().map(ToString::to_string).collect(),
            is_private: false,
        }
    }

    fn repo(id: u64, name: &str) -> GitHubRepo {
        GitHubRepo {
            id,
            name: name.to_string(),
            description: Some(format!("{name} from GitHub")),
            html_url: format!("https://github.com/example/{name}"),
            language: Some("Go".to_string()),
            created_at: Some(at(2023, 6, 1)),
            stargazers_count: Some(7),
            owner: Some(RepoOwner {
                login: "example".to_string(),
            }),
        }
    }

    fn catalog() -> ProjectCatalog {
        let mut custom = IndexMap::new();
        custom.insert(
            "curated".to_string(),
            CustomProjectData {
                description: Some("Hand written".to_string()),
                tags: Some(vec!["Rust".to_string(), "Cosmos".to_string()]),
                demo_url: Some("https://demo.example".to_string()),
                category: Some(vec!["backend".to_string()]),
            },
        );
        ProjectCatalog {
            allow_list: vec!["curated".to_string(), "plain".to_string()],
            featured: vec!["curated".to_string()],
            custom,
            private_projects: vec![Project {
                is_private: true,
                repo_url: "#".to_string(),
                ..project("secret", &["Solidity"], &["backend"], false)
            }],
        }
    }

    #[test]
    fn custom_data_overrides_repository_fields() {
        let project = catalog()
            .project_from_repo(repo(1, "curated"), "someone", at(2025, 1, 1))
            .unwrap();
        assert_eq!("1", project.id);
        assert_eq!("Hand written", project.description);
        assert_eq!(vec!["Rust", "Cosmos"], project.tags);
        assert_eq!(Some("https://demo.example"), project.demo_url.as_deref());
        assert_eq!(vec!["backend"], project.category);
        assert!(project.featured);
        assert_eq!(7, project.stars);
        assert_eq!("example", project.owner);
    }

    #[test]
    fn repository_fields_fill_the_gaps() {
        let project = catalog()
            .project_from_repo(repo(2, "plain"), "someone", at(2025, 1, 1))
            .unwrap();
        assert_eq!("plain from GitHub", project.description);
        assert_eq!(vec!["Go"], project.tags);
        assert_eq!(vec![DEFAULT_CATEGORY], project.category);
        assert!(!project.featured);
    }

    #[test]
    fn bare_repository_gets_defaults() {
        let bare = GitHubRepo {
            description: None,
            language: None,
            created_at: None,
            stargazers_count: None,
            owner: None,
            ..repo(3, "plain")
        };
        let project = catalog()
            .project_from_repo(bare, "someone", at(2025, 1, 1))
            .unwrap();
        assert_eq!("", project.description);
        assert!(project.tags.is_empty());
        assert_eq!(UNKNOWN_LANGUAGE, project.language);
        assert_eq!("someone", project.owner);
        assert_eq!(at(2025, 1, 1), project.date);
        assert_eq!(0, project.stars);
    }

    #[test]
    fn repositories_outside_the_allow_list_are_dropped() {
        assert!(
            catalog()
                .project_from_repo(repo(4, "unlisted"), "someone", at(2025, 1, 1))
                .is_none()
        );
    }

    #[test]
    fn assemble_merges_users_and_private_projects() {
        let projects = catalog().assemble(
            [
                (
                    "first".to_string(),
                    vec![repo(1, "plain"), repo(2, "unlisted")],
                ),
                ("second".to_string(), vec![repo(3, "curated")]),
            ],
            at(2025, 1, 1),
        );
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        // Featured first, then newest first.
        assert_eq!(vec!["curated", "secret", "plain"], titles);
        assert!(projects[1].repo_link().is_none());
        assert!(projects[2].repo_link().is_some());
    }

    #[test]
    fn projects_are_found_by_title_or_dashed_title() {
        let projects = vec![
            project("LFP", &[], &[], false),
            project("Chandra Station App", &[], &[], false),
        ];
        assert_eq!("LFP", find_project(&projects, "LFP").unwrap().title);
        assert_eq!(
            "Chandra Station App",
            find_project(&projects, "chandra-station-app").unwrap().title
        );
        assert!(find_project(&projects, "lfp-x").is_none());
    }

    #[test]
    fn project_deserializes_with_missing_sets() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": "x",
            "title": "x",
            "repo_url": "#",
            "date": "2024-02-03T00:00:00Z",
            "owner": "me",
        }))
        .unwrap();
        assert!(project.tags.is_empty());
        assert!(project.category.is_empty());
        assert_eq!(UNKNOWN_LANGUAGE, project.language);
    }
}
