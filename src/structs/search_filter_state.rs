use crate::enums::category_filter::CategoryFilter;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilterState {
    pub query_text: String,
    pub category_filter: CategoryFilter,
}

impl SearchFilterState {
    pub fn new(query_text: &str, category_filter: CategoryFilter) -> Self {
        Self {
            query_text: query_text.to_string(),
            category_filter,
        }
    }
}
