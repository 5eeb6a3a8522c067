use crate::structs::view::button_view::ButtonView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoScanView {
    pub button: ButtonView,
    pub files_visible: bool,
    /// One line per listed file, plus the remainder summary when truncated.
    pub lines: Vec<String>,
}
