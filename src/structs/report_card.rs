use crate::helpers::format_helper::format_size;
use crate::structs::report_summary::ReportSummary;
use crate::structs::search_filter_state::SearchFilterState;

/// A rendered report summary. `text` is what a reader sees on the card and
/// what the search box matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard {
    pub summary: ReportSummary,
    pub text: String,
    pub visible: bool,
}

impl ReportCard {
    pub fn render(summary: ReportSummary) -> Self {
        let text = format!(
            "{}\n{} 📅 {} 📦 {}",
            summary.display_name,
            summary.category.label(),
            summary.modified_timestamp,
            format_size(summary.size_bytes),
        );

        Self {
            summary,
            text,
            visible: true,
        }
    }

    pub fn is_match(&self, state: &SearchFilterState) -> bool {
        state.category_filter.matches(&self.summary.category)
            && (state.query_text.is_empty()
                || self.text.to_lowercase().contains(&state.query_text.to_lowercase()))
    }
}
