//! Site configuration, compiled into the binary from `portfolio.toml`.

use crate::project::ProjectCatalog;
use serde::Deserialize;

const EMBEDDED: &str = include_str!("../portfolio.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("featured repository `{0}` is not in the allow list")]
    UnknownFeatured(String),
    #[error("custom data for `{0}` does not match an allow-listed repository")]
    UnknownCustom(String),
    #[error("no GitHub users configured")]
    NoUsers,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PortfolioConfig {
    pub site: SiteMeta,
    pub github: GitHubConfig,
    #[serde(default)]
    pub projects: ProjectCatalog,
    pub contact: ContactConfig,
}

/// Defaults for page titles, descriptions and social cards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub site_name: String,
    pub description: String,
    /// Absolute origin, no trailing slash.
    pub url: String,
    pub locale: String,
    pub keywords: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GitHubConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub users: Vec<String>,
    #[serde(default = "default_per_page")]
    pub per_page: u8,
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u8 {
    100
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactConfig {
    /// Receives the message as JSON.
    pub endpoint: String,
    pub from: String,
    pub to: Vec<String>,
}

impl PortfolioConfig {
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut config: PortfolioConfig = toml::from_str(input)?;
        config.validate()?;
        config.site.url = config.site.url.trim_end_matches('/').to_string();
        config.github.api_base = config.github.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// The configuration shipped with the site.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(EMBEDDED)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.github.users.is_empty() {
            return Err(ConfigError::NoUsers);
        }
        let catalog = &self.projects;
        if let Some(name) = catalog
            .featured
            .iter()
            .find(|name| !catalog.allow_list.contains(name))
        {
            return Err(ConfigError::UnknownFeatured(name.clone()));
        }
        if let Some(name) = catalog
            .custom
            .keys()
            .find(|name| !catalog.allow_list.contains(name))
        {
            return Err(ConfigError::UnknownCustom(name.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const MINIMAL: &str = r#"
        [site]
        title = "Me"
        site_name = "me.dev"
        description = "Things I made"
        url = "https://me.dev/"
        locale = "en_US"
        keywords = "rust"

        [github]
        users = ["me"]

        [contact]
        endpoint = "/api/contact"
        from = "Form <form@me.dev>"
        to = ["me@me.dev"]
    "#;

    #[test]
    fn embedded_config_is_valid() {
        let config = PortfolioConfig::embedded().unwrap();
        assert_eq!(vec!["chalabi2", "chandrastation"], config.github.users);
        assert_eq!("https://jchalabi.xyz", config.site.url);
        let catalog = &config.projects;
        assert!(catalog.featured.iter().all(|f| catalog.allow_list.contains(f)));
        assert_eq!(
            Some(&vec!["Rust".to_string(), "Cosmos".to_string()]),
            catalog.custom["LFP"].tags.as_ref()
        );
        assert_eq!(4, catalog.private_projects.len());
        assert!(catalog.private_projects.iter().all(|p| p.is_private));
        assert_eq!(0, catalog.private_projects[0].stars);
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let config = PortfolioConfig::parse(MINIMAL).unwrap();
        assert_eq!("https://me.dev", config.site.url);
        assert_eq!("https://api.github.com", config.github.api_base);
        assert_eq!(100, config.github.per_page);
        assert!(config.projects.allow_list.is_empty());
    }

    #[test]
    fn featured_must_be_allow_listed() {
        let input = format!("{MINIMAL}\n[projects]\nallow_list = [\"a\"]\nfeatured = [\"b\"]\n");
        assert_matches!(
            PortfolioConfig::parse(&input),
            Err(ConfigError::UnknownFeatured(name)) if name == "b"
        );
    }

    #[test]
    fn custom_data_must_be_allow_listed() {
        let input = format!(
            "{MINIMAL}\n[projects]\nallow_list = [\"a\"]\n[projects.custom.z]\ntags = [\"Go\"]\n"
        );
        assert_matches!(
            PortfolioConfig::parse(&input),
            Err(ConfigError::UnknownCustom(name)) if name == "z"
        );
    }

    #[test]
    fn users_are_required() {
        let input = MINIMAL.replace(r#"users = ["me"]"#, "users = []");
        assert_matches!(PortfolioConfig::parse(&input), Err(ConfigError::NoUsers));
    }

    #[test]
    fn broken_toml_is_a_parse_error() {
        assert_matches!(
            PortfolioConfig::parse("[site"),
            Err(ConfigError::Parse(_))
        );
    }
}
