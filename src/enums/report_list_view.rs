use crate::config::constants::{EMPTY_REPORTS_PLACEHOLDER, LOADING_PLACEHOLDER, LOAD_FAILED_PLACEHOLDER};
use crate::structs::report_card::ReportCard;

/// What the reports region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportListView {
    #[default]
    NotLoaded,
    Loading,
    Empty,
    LoadFailed,
    Cards(Vec<ReportCard>),
}

impl ReportListView {
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::NotLoaded | Self::Cards(_) => None,
            Self::Loading => Some(LOADING_PLACEHOLDER),
            Self::Empty => Some(EMPTY_REPORTS_PLACEHOLDER),
            Self::LoadFailed => Some(LOAD_FAILED_PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transitional_states_have_placeholders() {
        assert_eq!(ReportListView::Loading.placeholder(), Some("加载中..."));
        assert_eq!(ReportListView::Empty.placeholder(), Some("暂无报告"));
        assert_eq!(ReportListView::LoadFailed.placeholder(), Some("加载失败"));
        assert_eq!(ReportListView::NotLoaded.placeholder(), None);
        assert_eq!(ReportListView::Cards(Vec::new()).placeholder(), None);
    }
}
