//! Predicate filters and free-text search over the project list.

mod options;
mod state;

pub use options::{FilterOption, FilterOptions};
pub use state::{FilterId, FilterSet, operators_for};

use crate::project::Project;
use std::{cmp::Reverse, str::FromStr};
use strum::IntoEnumIterator as _;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    strum::EnumIter,
    serde_with::SerializeDisplay,
    serde_with::DeserializeFromStr,
)]
pub enum FilterType {
    Category,
    Featured,
    Tags,
}

impl FromStr for FilterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|ty| ty.to_string() == s)
            .ok_or_else(|| format!("unknown filter type `{s}`"))
    }
}

impl FilterType {
    /// The set-valued field this type inspects, `None` for the boolean one.
    fn values(self, project: &Project) -> Option<&[String]> {
        match self {
            FilterType::Category => Some(&project.category),
            FilterType::Tags => Some(&project.tags),
            FilterType::Featured => None,
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    strum::EnumIter,
    serde_with::SerializeDisplay,
    serde_with::DeserializeFromStr,
)]
pub enum FilterOperator {
    #[display("is")]
    Is,
    #[display("is not")]
    IsNot,
    #[display("is any of")]
    IsAnyOf,
    #[display("include")]
    Include,
    #[display("do not include")]
    DoNotInclude,
    #[display("include all of")]
    IncludeAllOf,
    #[display("include any of")]
    IncludeAnyOf,
}

impl FromStr for FilterOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|op| op.to_string() == s)
            .ok_or_else(|| format!("unknown filter operator `{s}`"))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Filter {
    pub id: FilterId,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub operator: FilterOperator,
    pub value: Vec<String>,
}

impl Filter {
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self.filter_type.values(project) {
            Some(set) => {
                let contains = |value: &String| set.contains(value);
                match self.operator {
                    FilterOperator::Is | FilterOperator::Include => {
                        self.value.first().is_some_and(contains)
                    }
                    FilterOperator::IsNot | FilterOperator::DoNotInclude => {
                        !self.value.first().is_some_and(contains)
                    }
                    FilterOperator::IsAnyOf | FilterOperator::IncludeAnyOf => {
                        self.value.iter().any(contains)
                    }
                    FilterOperator::IncludeAllOf => self.value.iter().all(contains),
                }
            }
            None => {
                let wanted = self.value.first().is_some_and(|value| value == "true");
                match self.operator {
                    FilterOperator::Is => project.featured == wanted,
                    FilterOperator::IsNot => project.featured != wanted,
                    _ => true,
                }
            }
        }
    }
}

/// Every filter must pass; an empty list passes everything.
#[must_use]
pub fn matches_all(project: &Project, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| filter.matches(project))
}

/// Case-insensitive substring search over title, description and tags.
#[must_use]
pub fn matches_search(project: &Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    project.title.to_lowercase().contains(&query)
        || project.description.to_lowercase().contains(&query)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}

/// Projects passing both the filters and the search, in their original order.
#[must_use]
pub fn filter_projects<'a>(
    projects: &'a [Project],
    filters: &[Filter],
    query: &str,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| matches_all(project, filters) && matches_search(project, query))
        .collect()
}

/// Featured first, then newest first. Equal entries keep their order.
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by_key(|project| (!project.featured, Reverse(project.date)));
}
