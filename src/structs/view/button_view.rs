use crate::enums::control_state::ControlState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLabels {
    pub idle: &'static str,
    pub busy: &'static str,
}

/// Presentation of a submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub disabled: bool,
    pub label: &'static str,
    pub spinner_visible: bool,
}

impl ButtonView {
    pub fn render(state: &ControlState, labels: ButtonLabels) -> Self {
        let busy = state.is_busy();
        Self {
            disabled: busy,
            label: if busy { labels.busy } else { labels.idle },
            spinner_visible: busy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: ButtonLabels = ButtonLabels { idle: "开始分析", busy: "分析中..." };

    #[test]
    fn busy_disables_and_relabels() {
        let view = ButtonView::render(&ControlState::Busy, LABELS);
        assert!(view.disabled);
        assert!(view.spinner_visible);
        assert_eq!(view.label, "分析中...");
    }

    #[test]
    fn settled_states_render_idle() {
        for state in [ControlState::Idle, ControlState::Succeeded, ControlState::Failed("x".into())] {
            let view = ButtonView::render(&state, LABELS);
            assert!(!view.disabled);
            assert!(!view.spinner_visible);
            assert_eq!(view.label, "开始分析");
        }
    }
}
