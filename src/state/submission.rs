//! Submission-cycle state: the live [`UiState`] plus its gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pipeline page keeps one `RwSignal<SubmissionState>`. A cycle is
//! [`SubmissionState::begin`] before any file is read or request sent, then
//! [`SubmissionState::finish`] once the exchange resolves. Nothing else writes
//! the state, so at most one cycle is ever in flight.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::config::ClientConfig;
use crate::error::{SubmitError, ValidationError};
use crate::net::types::PipelineOutcome;
use crate::state::gallery::Gallery;
use crate::state::result::render_outcome;
use crate::state::ui::{StatusView, UiEvent, UiState, render_status};
use crate::util::form::ensure_selection;
use crate::util::resource::ResourceStore;

/// Verdict on a submit action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitGate {
    /// A cycle is already running; the action is dropped.
    Ignored,
    /// Validation failed; state is unchanged and the user must be alerted.
    Rejected(ValidationError),
    /// A new cycle started; the caller should send the request.
    Started,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub ui: UiState,
    pub gallery: Gallery,
}

impl SubmissionState {
    /// Gate a submit action for `selected` images. On success the gallery of
    /// the previous cycle is reset and the state moves to `Uploading`.
    pub fn begin<S: ResourceStore>(&mut self, selected: usize, store: &mut S) -> SubmitGate {
        if self.ui.is_uploading() {
            return SubmitGate::Ignored;
        }
        if let Err(err) = ensure_selection(selected) {
            return SubmitGate::Rejected(err);
        }
        self.gallery.reset(store);
        self.transition(UiEvent::Submit);
        SubmitGate::Started
    }

    /// Apply the result of the exchange started by [`SubmissionState::begin`].
    pub fn finish<S: ResourceStore>(
        &mut self,
        result: Result<PipelineOutcome, SubmitError>,
        config: &ClientConfig,
        store: &mut S,
    ) {
        let rendered = result.and_then(|outcome| {
            render_outcome(&outcome, config, store, &mut self.gallery).map_err(SubmitError::from)
        });
        match rendered {
            Ok(count) => {
                leptos::logging::log!("submission complete: {count} preview(s)");
                self.transition(UiEvent::Succeeded);
            }
            Err(err) => {
                leptos::logging::error!("submission failed: {err}");
                self.transition(UiEvent::Failed(err.to_string()));
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusView {
        render_status(&self.ui)
    }

    fn transition(&mut self, event: UiEvent) {
        self.ui = std::mem::take(&mut self.ui).apply(event);
    }
}
