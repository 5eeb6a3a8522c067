use crate::config::constants::{LOADING_PLACEHOLDER, LOAD_FAILED_PLACEHOLDER};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalBody {
    #[default]
    Empty,
    Loading,
    Content(String),
    Failed(Option<String>),
}

impl ModalBody {
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Loading => LOADING_PLACEHOLDER.to_string(),
            Self::Content(html) => html.clone(),
            Self::Failed(None) => LOAD_FAILED_PLACEHOLDER.to_string(),
            Self::Failed(Some(reason)) => format!("{}: {}", LOAD_FAILED_PLACEHOLDER, reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalView {
    pub visible: bool,
    pub title: String,
    pub body: ModalBody,
}
