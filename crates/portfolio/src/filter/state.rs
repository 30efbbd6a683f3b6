use super::{Filter, FilterOperator, FilterType};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize, serde::Deserialize,
)]
#[display("filter-{_0}")]
pub struct FilterId(u32);

impl FilterId {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Operators offered for a filter holding `value_count` values.
#[must_use]
pub fn operators_for(filter_type: FilterType, value_count: usize) -> [FilterOperator; 2] {
    match filter_type {
        FilterType::Featured => [FilterOperator::Is, FilterOperator::IsNot],
        FilterType::Category | FilterType::Tags if value_count > 1 => {
            [FilterOperator::IsAnyOf, FilterOperator::IsNot]
        }
        FilterType::Category | FilterType::Tags => [FilterOperator::Is, FilterOperator::IsNot],
    }
}

/// Filters the user has built up in the portfolio view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSet {
    filters: Vec<Filter>,
    next_id: u32,
}

impl FilterSet {
    pub fn add(&mut self, filter_type: FilterType, value: Vec<String>) -> FilterId {
        let id = FilterId(self.next_id);
        self.next_id += 1;
        self.filters.push(Filter {
            id,
            filter_type,
            operator: FilterOperator::Is,
            value,
        });
        id
    }

    /// Returns false when no filter has that id.
    pub fn set_operator(&mut self, id: FilterId, operator: FilterOperator) -> bool {
        match self.filters.iter_mut().find(|filter| filter.id == id) {
            Some(filter) => {
                filter.operator = operator;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: FilterId) -> Option<Filter> {
        let index = self.filters.iter().position(|filter| filter.id == id)?;
        Some(self.filters.remove(index))
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Filters with at least one value. Only these are shown and applied.
    pub fn active(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter().filter(|filter| !filter.value.is_empty())
    }

    #[must_use]
    pub fn active_filters(&self) -> Vec<Filter> {
        self.active().cloned().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn added_filters_get_fresh_ids_and_is() {
        let mut set = FilterSet::default();
        let first = set.add(FilterType::Tags, values(&["Rust"]));
        let second = set.add(FilterType::Category, values(&["backend"]));
        assert_ne!(first, second);
        assert!(set.active().all(|f| f.operator == FilterOperator::Is));

        set.remove(first);
        let third = set.add(FilterType::Tags, values(&["Go"]));
        assert_ne!(first, third, "ids are not reused after removal");
    }

    #[test]
    fn set_operator_targets_one_filter() {
        let mut set = FilterSet::default();
        let tags = set.add(FilterType::Tags, values(&["Rust", "Go"]));
        let category = set.add(FilterType::Category, values(&["backend"]));
        assert!(set.set_operator(tags, FilterOperator::IsAnyOf));
        let operators: Vec<_> = set.active().map(|f| (f.id, f.operator)).collect();
        assert_eq!(
            vec![(tags, FilterOperator::IsAnyOf), (category, FilterOperator::Is)],
            operators
        );
        set.clear();
        assert!(!set.set_operator(tags, FilterOperator::IsNot));
        assert!(set.is_empty());
    }

    #[test]
    fn empty_filters_are_inactive() {
        let mut set = FilterSet::default();
        set.add(FilterType::Featured, Vec::new());
        assert!(set.is_empty());
        assert!(set.active_filters().is_empty());
        set.add(FilterType::Featured, values(&["true"]));
        assert_eq!(1, set.active_filters().len());
    }

    #[rstest]
    #[case(FilterType::Tags, 1, [FilterOperator::Is, FilterOperator::IsNot])]
    #[case(FilterType::Tags, 2, [FilterOperator::IsAnyOf, FilterOperator::IsNot])]
    #[case(FilterType::Category, 3, [FilterOperator::IsAnyOf, FilterOperator::IsNot])]
    #[case(FilterType::Featured, 0, [FilterOperator::Is, FilterOperator::IsNot])]
    #[case(FilterType::Featured, 2, [FilterOperator::Is, FilterOperator::IsNot])]
    fn operators_follow_type_and_value_count(
        #[case] filter_type: FilterType,
        #[case] value_count: usize,
        #[case] expected: [FilterOperator; 2],
    ) {
        assert_eq!(expected, operators_for(filter_type, value_count));
    }

    #[test]
    fn id_display() {
        assert_eq!("filter-7", FilterId::new(7).to_string());
    }
}
