use crate::structs::view::button_view::ButtonView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView {
    pub button: ButtonView,
    pub result_visible: bool,
    pub result_html: Option<String>,
    pub result_markdown: Option<String>,
}
