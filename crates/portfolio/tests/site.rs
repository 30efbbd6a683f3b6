use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{TimeZone as _, Utc};
use portfolio::{
    config::PortfolioConfig,
    filter::{FilterOperator, FilterOptions, FilterSet, FilterType, filter_projects},
    pattern::{PatternStyle, data_uri, synthesize},
    project::{GitHubRepo, Project, find_project},
};

fn site_projects(config: &PortfolioConfig) -> Vec<Project> {
    let repos: Vec<GitHubRepo> = serde_json::from_value(serde_json::json!([
        {
            "id": 7,
            "name": "gravity-info-api",
            "description": "upstream description",
            "html_url": "https://github.com/chalabi2/gravity-info-api",
            "language": "Rust",
            "created_at": "2023-01-15T10:00:00Z",
            "stargazers_count": 12,
            "owner": { "login": "chalabi2" }
        },
        {
            "id": 8,
            "name": "dotfiles",
            "html_url": "https://github.com/chalabi2/dotfiles",
            "language": "Shell"
        }
    ]))
    .unwrap();
    let fetched_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    config
        .projects
        .assemble([("chalabi2".to_string(), repos)], fetched_at)
}

fn titles(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|project| project.title.clone()).collect()
}

#[test]
fn embedded_catalog_is_ordered_featured_then_newest() {
    let config = PortfolioConfig::embedded().unwrap();
    let projects = site_projects(&config);
    let all: Vec<&Project> = projects.iter().collect();
    assert_eq!(
        vec![
            "chandra-station-app",
            "althea-link-frontend",
            "althea-link-backend",
            "gravity-info-api",
            "playmos",
        ],
        titles(&all)
    );

    let gravity = find_project(&projects, "gravity-info-api").unwrap();
    assert!(gravity.featured);
    assert_eq!(vec!["Rust", "Blockchain", "Cosmos"], gravity.tags);
    assert_eq!(vec!["backend"], gravity.category);
    assert!(gravity.description.starts_with("An API server"));
}

#[test]
fn include_all_of_is_narrower_than_include_any_of() {
    let config = PortfolioConfig::embedded().unwrap();
    let projects = site_projects(&config);

    let mut all_of = FilterSet::default();
    let id = all_of.add(
        FilterType::Tags,
        vec!["Rust".to_string(), "Cosmos".to_string()],
    );
    assert!(all_of.set_operator(id, FilterOperator::IncludeAllOf));
    let shown = filter_projects(&projects, &all_of.active_filters(), "");
    assert_eq!(
        vec!["althea-link-backend", "gravity-info-api"],
        titles(&shown)
    );

    let mut any_of = FilterSet::default();
    let id = any_of.add(
        FilterType::Tags,
        vec!["Rust".to_string(), "Solidity".to_string()],
    );
    assert!(any_of.set_operator(id, FilterOperator::IncludeAnyOf));
    let shown = filter_projects(&projects, &any_of.active_filters(), "");
    assert_eq!(
        vec!["althea-link-backend", "gravity-info-api", "playmos"],
        titles(&shown)
    );
}

#[test]
fn filters_and_search_combine() {
    let config = PortfolioConfig::embedded().unwrap();
    let projects = site_projects(&config);

    let mut filters = FilterSet::default();
    filters.add(FilterType::Category, vec!["backend".to_string()]);
    filters.add(FilterType::Featured, vec!["false".to_string()]);
    let shown = filter_projects(&projects, &filters.active_filters(), "");
    assert_eq!(vec!["playmos"], titles(&shown));

    let shown = filter_projects(&projects, &[], "COSMOS");
    assert_eq!(4, shown.len());
    assert!(shown.iter().all(|project| project.title != "playmos"));

    assert_eq!(projects.len(), filter_projects(&projects, &[], "").len());
}

#[test]
fn filter_options_follow_the_catalog() {
    let config = PortfolioConfig::embedded().unwrap();
    let projects = site_projects(&config);
    let options = FilterOptions::from_projects(&projects);
    let categories: Vec<&str> = options
        .categories
        .iter()
        .map(|option| option.value.as_str())
        .collect();
    assert_eq!(vec!["frontend", "backend"], categories);
    assert_eq!("Yes", options.label(FilterType::Featured, "true"));
    let rust = options
        .tags
        .iter()
        .find(|option| option.value == "Rust")
        .unwrap();
    assert_eq!("#ea580c", rust.swatch);
}

#[test]
fn every_project_gets_its_own_artwork() {
    let config = PortfolioConfig::embedded().unwrap();
    let mut seeds: Vec<String> = config.projects.allow_list.clone();
    seeds.extend(
        config
            .projects
            .private_projects
            .iter()
            .map(|project| project.title.clone()),
    );
    seeds.sort();
    seeds.dedup();
    assert!(seeds.len() >= 20, "{seeds:?}");

    let uris: Vec<String> = seeds
        .iter()
        .map(|seed| data_uri(seed, 200, PatternStyle::Geometric))
        .collect();
    let mut unique = uris.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(uris.len(), unique.len());

    for (seed, uri) in seeds.iter().zip(&uris) {
        assert!(uri.starts_with("data:image/svg+xml;utf8,"), "{seed}");
        assert_eq!(*uri, data_uri(seed, 200, PatternStyle::Geometric));
    }
}

#[test]
fn hello_world_is_stable() {
    let first = synthesize("Hello World", 100, PatternStyle::Geometric).unwrap();
    for _ in 0..5 {
        let again = synthesize("Hello World", 100, PatternStyle::Geometric).unwrap();
        assert_eq!(first.family, again.family);
        assert_eq!(first.palette.primary.hue, again.palette.primary.hue);
        assert_eq!(first, again);
    }
}

#[test]
fn empty_seed_renders_the_fallback_swatch() {
    let geometric = data_uri("", 100, PatternStyle::Geometric);
    assert!(geometric.contains("%233498db"), "{geometric}");

    let simple = data_uri("", 100, PatternStyle::Simple);
    let payload = simple
        .strip_prefix("data:image/svg+xml;base64,")
        .unwrap();
    let svg = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
    assert!(svg.contains("#7c3aed"), "{svg}");
}
