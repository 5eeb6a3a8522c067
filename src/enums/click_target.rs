/// Where a click on the report modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    CloseButton,
    Backdrop,
    Content,
}
