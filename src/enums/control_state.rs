/// Lifecycle of a submit control. One value per controller, replaced on
/// every transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Idle,
    Busy,
    Succeeded,
    Failed(String),
}

impl ControlState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}
