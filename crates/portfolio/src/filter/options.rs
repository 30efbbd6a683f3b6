use super::FilterType;
use crate::{
    project::Project,
    util::color::{category_swatch, featured_swatch, tag_swatch},
};
use indexmap::IndexSet;

/// A value the user can pick for a filter type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    /// Stored in [`Filter::value`](super::Filter::value).
    pub value: String,
    pub label: String,
    /// CSS color of the marker next to the label.
    pub swatch: String,
}

impl FilterOption {
    fn new(value: &str, label: &str, swatch: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            swatch: swatch.to_string(),
        }
    }
}

/// Everything the filter bar can offer, derived from the loaded projects.
/// Passed down as a property; rebuilt whenever the project list changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    pub categories: Vec<FilterOption>,
    pub tags: Vec<FilterOption>,
    pub featured: Vec<FilterOption>,
}

impl FilterOptions {
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        let categories: IndexSet<&str> = projects
            .iter()
            .flat_map(|project| &project.category)
            .map(String::as_str)
            .collect();
        let tags: IndexSet<&str> = projects
            .iter()
            .flat_map(|project| &project.tags)
            .map(String::as_str)
            .collect();
        Self {
            categories: categories
                .into_iter()
                .map(|category| FilterOption::new(category, category, category_swatch(category)))
                .collect(),
            tags: tags
                .into_iter()
                .map(|tag| FilterOption::new(tag, tag, &tag_swatch(tag)))
                .collect(),
            featured: vec![
                FilterOption::new("true", "Yes", featured_swatch(true)),
                FilterOption::new("false", "No", featured_swatch(false)),
            ],
        }
    }

    #[must_use]
    pub fn for_type(&self, filter_type: FilterType) -> &[FilterOption] {
        match filter_type {
            FilterType::Category => &self.categories,
            FilterType::Featured => &self.featured,
            FilterType::Tags => &self.tags,
        }
    }

    /// Display label for a stored value, falling back to the value itself.
    #[must_use]
    pub fn label<'a>(&'a self, filter_type: FilterType, value: &'a str) -> &'a str {
        self.for_type(filter_type)
            .iter()
            .find(|option| option.value == value)
            .map_or(value, |option| option.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::tests::project;

    #[test]
    fn options_keep_first_seen_order_without_duplicates() {
        let projects = vec![
            project("a", &["Rust", "Cosmos"], &["backend"], true),
            project("b", &["Go", "Rust"], &["frontend", "backend"], false),
            project("c", &[], &[], false),
        ];
        let options = FilterOptions::from_projects(&projects);
        let tags: Vec<_> = options.tags.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(vec!["Rust", "Cosmos", "Go"], tags);
        let categories: Vec<_> = options
            .for_type(FilterType::Category)
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(vec!["backend", "frontend"], categories);
        assert_eq!("#ea580c", options.tags[0].swatch);
    }

    #[test]
    fn featured_options_are_fixed() {
        let options = FilterOptions::from_projects(&[]);
        assert!(options.tags.is_empty());
        assert_eq!("Yes", options.label(FilterType::Featured, "true"));
        assert_eq!("No", options.label(FilterType::Featured, "false"));
        assert_eq!("maybe", options.label(FilterType::Featured, "maybe"));
    }
}
