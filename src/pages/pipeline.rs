//! Pipeline page: tutorial URL + image upload form, status and results.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. A submit is gated synchronously against the
//! current [`SubmissionState`]; the file reads and the `POST /apply`
//! exchange then run on a spawned local task that finishes the cycle.

use leptos::prelude::*;

use crate::components::health_badge::HealthBadge;
use crate::components::result_gallery::ResultGallery;
use crate::components::status_card::StatusCard;
use crate::state::submission::SubmissionState;
#[cfg(feature = "csr")]
use crate::{
    config::ClientConfig,
    error::SubmitError,
    net::api::{GlooTransport, SubmissionClient},
    net::types::PipelineOutcome,
    state::submission::SubmitGate,
    util::{browser, form},
    util::resource::PreviewStore,
};

/// Read the selected files, assemble the request and run the exchange.
#[cfg(feature = "csr")]
async fn run_submission(
    config: ClientConfig,
    tutorial_url: String,
    files: Vec<web_sys::File>,
) -> Result<PipelineOutcome, SubmitError> {
    let images = browser::read_images(&files).await?;
    let request = form::collect(&tutorial_url, images)?;
    SubmissionClient::new(GlooTransport, config).submit(&request).await
}

#[component]
pub fn PipelinePage() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let tutorial_url = RwSignal::new(String::new());
    let image_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    let config = expect_context::<ClientConfig>();
    #[cfg(feature = "csr")]
    let store = StoredValue::new(PreviewStore::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            let files = image_input
                .get_untracked()
                .map(|input| browser::selected_files(&input))
                .unwrap_or_default();

            let mut gate = SubmitGate::Ignored;
            submission.update(|state| store.update_value(|s| gate = state.begin(files.len(), s)));
            match gate {
                SubmitGate::Ignored => return,
                SubmitGate::Rejected(err) => {
                    browser::alert(&err.to_string());
                    return;
                }
                SubmitGate::Started => {}
            }

            let config = config.clone();
            let url = tutorial_url.get_untracked();
            leptos::task::spawn_local(async move {
                let result = run_submission(config.clone(), url, files).await;
                submission.update(|state| store.update_value(|s| state.finish(result, &config, s)));
            });
        }
    };

    let busy = move || submission.with(|s| s.status().submit_disabled);

    view! {
        <main class="pipeline-page">
            <header class="pipeline-header">
                <h1>"Fluxa"</h1>
                <HealthBadge/>
            </header>
            <form class="card pipeline-form" on:submit=on_submit>
                <label for="tutorialUrl">"Tutorial URL"</label>
                <input
                    id="tutorialUrl"
                    type="url"
                    placeholder="https://www.youtube.com/watch?v=…"
                    prop:value=move || tutorial_url.get()
                    on:input=move |ev| tutorial_url.set(event_target_value(&ev))
                />
                <label for="imageInput">"Images"</label>
                <input id="imageInput" type="file" accept="image/*" multiple node_ref=image_input/>
                <button type="submit" disabled=busy>"Apply tutorial"</button>
            </form>
            <StatusCard/>
            <ResultGallery/>
        </main>
    }
}
