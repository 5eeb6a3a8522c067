use std::sync::Mutex;
use crate::enums::control_state::ControlState;

/// Holds a control in `Busy` for as long as it lives. Dropping the guard
/// always leaves the control settled: with the recorded outcome, or `Idle`
/// if none was recorded (early return, panic, or the future being dropped).
pub struct BusyGuard<'a> {
    control: &'a Mutex<ControlState>,
    outcome: Option<ControlState>,
}

impl<'a> BusyGuard<'a> {
    pub fn engage(control: &'a Mutex<ControlState>) -> Self {
        *control.lock().unwrap_or_else(|e| e.into_inner()) = ControlState::Busy;
        Self { control, outcome: None }
    }

    pub fn settle(&mut self, outcome: ControlState) {
        self.outcome = Some(outcome);
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let settled = match self.outcome.take() {
            Some(ControlState::Busy) | None => ControlState::Idle,
            Some(outcome) => outcome,
        };
        *self.control.lock().unwrap_or_else(|e| e.into_inner()) = settled;
    }
}
