use std::sync::{Arc, Mutex};
use crate::enums::category_filter::CategoryFilter;
use crate::enums::report_list_view::ReportListView;
use crate::errors::AnalyzerResult;
use crate::services::report_viewer::ReportViewer;
use crate::structs::report_card::ReportCard;
use crate::structs::search_filter_state::SearchFilterState;
use crate::structs::view::modal_view::ModalBody;
use crate::traits::backend_client::BackendClient;

#[derive(Debug, Default)]
struct CollectionState {
    view: ReportListView,
    filter: SearchFilterState,
}

impl CollectionState {
    fn refilter(&mut self) {
        if let ReportListView::Cards(cards) = &mut self.view {
            for card in cards.iter_mut() {
                card.visible = card.is_match(&self.filter);
            }
        }
    }
}

/// The reports list. Owns the loaded summaries; search and category
/// filtering only toggle card visibility.
pub struct ReportCollection {
    backend: Arc<dyn BackendClient>,
    viewer: Arc<ReportViewer>,
    state: Mutex<CollectionState>,
}

impl ReportCollection {
    pub fn new(backend: Arc<dyn BackendClient>, viewer: Arc<ReportViewer>) -> Self {
        Self {
            backend,
            viewer,
            state: Mutex::new(CollectionState::default()),
        }
    }

    /// Fetches the full list and replaces whatever was shown. Returns the
    /// number of reports loaded; a transport failure is also rendered as the
    /// "load failed" placeholder.
    pub async fn load(&self) -> AnalyzerResult<usize> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).view = ReportListView::Loading;

        let outcome = self.backend.list_reports().await;

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match outcome {
            Ok(summaries) if summaries.is_empty() => {
                state.view = ReportListView::Empty;
                Ok(0)
            }
            Ok(summaries) => {
                let count = summaries.len();
                state.view = ReportListView::Cards(summaries.into_iter().map(ReportCard::render).collect());
                state.refilter();
                log::debug!("Loaded {} reports", count);
                Ok(count)
            }
            Err(e) => {
                log::warn!("Failed to load reports: {}", e.detail());
                state.view = ReportListView::LoadFailed;
                Err(e)
            }
        }
    }

    /// Replaces both filter values at once. No network call.
    pub fn apply_filter(&self, filter: SearchFilterState) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.filter = filter;
        state.refilter();
    }

    /// Changes the query text, keeping the current category.
    pub fn set_query(&self, query_text: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.filter.query_text = query_text.to_string();
        state.refilter();
    }

    /// Changes the category, keeping the current query text.
    pub fn set_category(&self, category_filter: CategoryFilter) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.filter.category_filter = category_filter;
        state.refilter();
    }

    pub fn filter(&self) -> SearchFilterState {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).filter.clone()
    }

    pub fn view(&self) -> ReportListView {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).view.clone()
    }

    pub fn visible_cards(&self) -> Vec<ReportCard> {
        match &self.state.lock().unwrap_or_else(|e| e.into_inner()).view {
            ReportListView::Cards(cards) => cards.iter().filter(|card| card.visible).cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Click on the `index`-th visible card: opens it in the viewer.
    pub async fn click_card(&self, index: usize) -> Option<ModalBody> {
        let identifier = self.visible_cards().get(index)?.summary.identifier.clone();
        Some(self.viewer.open(&identifier).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use proptest::prelude::*;
    use crate::enums::report_category::ReportCategory;
    use crate::errors::AnalyzerError;
    use crate::structs::report_summary::ReportSummary;
    use crate::structs::wire::report_detail::ReportDetail;
    use crate::traits::backend_client::MockBackendClient;

    fn summary(name: &str, category: &str, size: u64) -> ReportSummary {
        ReportSummary {
            identifier: format!("2024/{}", name),
            display_name: name.to_string(),
            category: ReportCategory::from_wire(category),
            modified_timestamp: "2024-05-01 10:00:00".to_string(),
            size_bytes: size,
        }
    }

    fn sample() -> Vec<ReportSummary> {
        vec![
            summary("quality_report_api.md", "quality", 2048),
            summary("impact_login.md", "impact", 512),
            summary("analysis_Main.md", "analysis", 5 * 1024 * 1024),
            summary("notes.md", "custom", 10),
        ]
    }

    fn collection_with(reports: Vec<ReportSummary>) -> ReportCollection {
        let mut backend = MockBackendClient::new();
        backend.expect_list_reports().returning(move || Ok(reports.clone()));
        let backend: Arc<dyn BackendClient> = Arc::new(backend);
        ReportCollection::new(Arc::clone(&backend), Arc::new(ReportViewer::new(backend)))
    }

    fn visible_names(collection: &ReportCollection) -> Vec<String> {
        collection.visible_cards().into_iter().map(|c| c.summary.display_name).collect()
    }

    #[tokio::test]
    async fn load_preserves_backend_order() {
        let collection = collection_with(sample());
        assert_eq!(collection.load().await.unwrap(), 4);
        assert_eq!(
            visible_names(&collection),
            vec!["quality_report_api.md", "impact_login.md", "analysis_Main.md", "notes.md"]
        );
    }

    #[tokio::test]
    async fn empty_list_renders_placeholder() {
        let collection = collection_with(Vec::new());
        assert_eq!(collection.load().await.unwrap(), 0);
        assert_eq!(collection.view(), ReportListView::Empty);
        assert_eq!(collection.view().placeholder(), Some("暂无报告"));
    }

    #[tokio::test]
    async fn transport_failure_renders_load_failed() {
        let mut backend = MockBackendClient::new();
        backend
            .expect_list_reports()
            .returning(|| Err(AnalyzerError::network_error("list reports", None, "refused")));
        let backend: Arc<dyn BackendClient> = Arc::new(backend);
        let collection = ReportCollection::new(Arc::clone(&backend), Arc::new(ReportViewer::new(backend)));

        assert!(collection.load().await.is_err());
        assert_eq!(collection.view().placeholder(), Some("加载失败"));
    }

    #[tokio::test]
    async fn reload_replaces_previous_list() {
        let mut backend = MockBackendClient::new();
        let mut seq = mockall::Sequence::new();
        backend.expect_list_reports().times(1).in_sequence(&mut seq).returning(|| Ok(sample()));
        backend
            .expect_list_reports()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![summary("fresh.md", "analysis", 1)]));
        let backend: Arc<dyn BackendClient> = Arc::new(backend);
        let collection = ReportCollection::new(Arc::clone(&backend), Arc::new(ReportViewer::new(backend)));

        collection.load().await.unwrap();
        collection.load().await.unwrap();
        assert_eq!(visible_names(&collection), vec!["fresh.md"]);
    }

    #[tokio::test]
    async fn query_and_category_combine() {
        let collection = collection_with(sample());
        collection.load().await.unwrap();

        collection.set_category(CategoryFilter::Quality);
        assert_eq!(visible_names(&collection), vec!["quality_report_api.md"]);

        // changing the query keeps the category
        collection.set_query("IMPACT");
        assert!(visible_names(&collection).is_empty());
        assert_eq!(collection.filter().category_filter, CategoryFilter::Quality);

        // changing the category keeps the query
        collection.set_category(CategoryFilter::All);
        assert_eq!(visible_names(&collection), vec!["impact_login.md"]);
        assert_eq!(collection.filter().query_text, "IMPACT");
    }

    #[tokio::test]
    async fn query_matches_rendered_text() {
        let collection = collection_with(sample());
        collection.load().await.unwrap();

        // category label and formatted size are part of the card text
        collection.set_query("质量报告");
        assert_eq!(visible_names(&collection), vec!["quality_report_api.md"]);
        collection.set_query("5.0 mb");
        assert_eq!(visible_names(&collection), vec!["analysis_Main.md"]);
        collection.set_query("");
        assert_eq!(visible_names(&collection).len(), 4);
    }

    #[tokio::test]
    async fn unknown_category_only_shows_under_all() {
        let collection = collection_with(sample());
        collection.load().await.unwrap();

        for filter in [CategoryFilter::Quality, CategoryFilter::Impact, CategoryFilter::Analysis] {
            collection.set_category(filter);
            assert!(!visible_names(&collection).contains(&"notes.md".to_string()));
        }
        collection.set_category(CategoryFilter::All);
        assert!(visible_names(&collection).contains(&"notes.md".to_string()));
    }

    #[tokio::test]
    async fn filter_survives_reload() {
        let collection = collection_with(sample());
        collection.apply_filter(SearchFilterState::new("login", CategoryFilter::All));
        collection.load().await.unwrap();
        assert_eq!(visible_names(&collection), vec!["impact_login.md"]);
    }

    #[tokio::test]
    async fn clicking_a_visible_card_opens_its_report() {
        let mut backend = MockBackendClient::new();
        backend.expect_list_reports().returning(|| Ok(sample()));
        backend
            .expect_fetch_report()
            .with(eq("2024/impact_login.md"))
            .times(1)
            .returning(|_| Ok(ReportDetail { html: Some("<p>impact</p>".into()), ..Default::default() }));
        let backend: Arc<dyn BackendClient> = Arc::new(backend);
        let viewer = Arc::new(ReportViewer::new(Arc::clone(&backend)));
        let collection = ReportCollection::new(backend, Arc::clone(&viewer));

        collection.load().await.unwrap();
        collection.set_category(CategoryFilter::Impact);

        let body = collection.click_card(0).await;
        assert_eq!(body, Some(ModalBody::Content("<p>impact</p>".into())));
        assert_eq!(viewer.view().title, "2024/impact_login.md");
        assert!(collection.click_card(1).await.is_none());
    }

    fn category_strategy() -> impl Strategy<Value = CategoryFilter> {
        prop_oneof![
            Just(CategoryFilter::All),
            Just(CategoryFilter::Quality),
            Just(CategoryFilter::Impact),
            Just(CategoryFilter::Analysis),
        ]
    }

    proptest! {
        #[test]
        fn visibility_is_the_conjunction_of_both_predicates(
            query in "[a-zA-Z_.]{0,6}",
            category in category_strategy(),
        ) {
            let mut state = CollectionState {
                view: ReportListView::Cards(sample().into_iter().map(ReportCard::render).collect()),
                filter: SearchFilterState::new(&query, category),
            };
            state.refilter();

            if let ReportListView::Cards(cards) = &state.view {
                for card in cards {
                    let category_ok = category == CategoryFilter::All || category.matches(&card.summary.category);
                    let query_ok = query.is_empty() || card.text.to_lowercase().contains(&query.to_lowercase());
                    prop_assert_eq!(card.visible, category_ok && query_ok);
                }
            }
        }
    }
}
