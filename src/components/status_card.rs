//! Status card narrating the in-flight submission.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;
use crate::state::ui::UiState;

/// Single-line status card, hidden until the first submission.
#[component]
pub fn StatusCard() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let status = Memo::new(move |_| submission.with(SubmissionState::status));
    let failed = move || submission.with(|s| matches!(s.ui, UiState::Failed(_)));

    view! {
        <section class="card status-card" hidden=move || !status.get().visible>
            <p class="status-message" class:status-message--error=failed>
                {move || status.get().message}
            </p>
        </section>
    }
}
