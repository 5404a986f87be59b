//! Result card listing the previews of the current cycle.
//!
//! DESIGN
//! ======
//! Each preview links to its own URI so an inline artifact can be saved under
//! the filename the pipeline reported.

use leptos::prelude::*;

use crate::state::gallery::PreviewEntry;
use crate::state::submission::SubmissionState;

/// Gallery of rendered previews, shown once a cycle completes.
#[component]
pub fn ResultGallery() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let visible = move || submission.with(|s| s.status().results_visible);
    let previews = move || {
        submission.with(|s| {
            s.gallery
                .entries()
                .iter()
                .cloned()
                .map(|entry| view! { <PreviewItem entry/> })
                .collect_view()
        })
    };

    view! {
        <section class="card result-card" hidden=move || !visible()>
            <h2>"Result"</h2>
            <div class="gallery">{previews}</div>
            <Show when=move || submission.with(|s| s.gallery.is_empty())>
                <p class="gallery-empty">"The pipeline returned no preview."</p>
            </Show>
        </section>
    }
}

#[component]
fn PreviewItem(entry: PreviewEntry) -> impl IntoView {
    let PreviewEntry { uri, filename } = entry;
    view! {
        <div class="gallery-item">
            <img class="preview" src=uri.clone() alt=filename.clone()/>
            <div class="links">
                <a href=uri download=filename.clone()>{format!("Download {filename}")}</a>
            </div>
        </div>
    }
}
