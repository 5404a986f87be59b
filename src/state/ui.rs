//! Submission status state machine and its status-card projection.
//!
//! DESIGN
//! ======
//! [`UiState`] is a plain value: each event yields the next state and
//! [`render_status`] is the only place that turns a state into what the
//! status card and submit button show.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

pub const UPLOADING_MESSAGE: &str = "Uploading images…";
pub const COMPLETE_MESSAGE: &str = "Processing complete.";

/// Phase of the current submission cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Uploading,
    Complete,
    /// Carries the failure description shown after `Error: `.
    Failed(String),
}

/// Input to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A validated submit action.
    Submit,
    Succeeded,
    Failed(String),
}

impl UiState {
    /// Next state after `event`. Submits during an upload and completions
    /// outside one leave the state as it is.
    #[must_use]
    pub fn apply(self, event: UiEvent) -> Self {
        match (self, event) {
            (_, UiEvent::Submit) => Self::Uploading,
            (Self::Uploading, UiEvent::Succeeded) => Self::Complete,
            (Self::Uploading, UiEvent::Failed(message)) => Self::Failed(message),
            (state, _) => state,
        }
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading)
    }
}

/// What the status card, submit button and result card display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusView {
    pub message: String,
    pub visible: bool,
    pub submit_disabled: bool,
    pub results_visible: bool,
}

/// Project a state onto the page.
#[must_use]
pub fn render_status(state: &UiState) -> StatusView {
    match state {
        UiState::Idle => StatusView::default(),
        UiState::Uploading => StatusView {
            message: UPLOADING_MESSAGE.to_owned(),
            visible: true,
            submit_disabled: true,
            results_visible: false,
        },
        UiState::Complete => StatusView {
            message: COMPLETE_MESSAGE.to_owned(),
            visible: true,
            submit_disabled: false,
            results_visible: true,
        },
        UiState::Failed(message) => StatusView {
            message: format!("Error: {message}"),
            visible: true,
            submit_disabled: false,
            results_visible: false,
        },
    }
}
