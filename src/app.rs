//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::pages::pipeline::PipelinePage;
use crate::state::submission::SubmissionState;

/// Root application component.
///
/// Provides the endpoint configuration and the single submission state to
/// every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    leptos::logging::log!("pipeline endpoint: {}", config.base_endpoint());
    provide_context(config);
    provide_context(RwSignal::new(SubmissionState::default()));

    view! {
        <Title text="Fluxa"/>
        <PipelinePage/>
    }
}
