//! Pipeline readiness badge fed by `GET /health`.

#[cfg(test)]
#[path = "health_badge_test.rs"]
mod health_badge_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::ClientConfig;
use crate::net::types::HealthResponse;

/// Badge text for a probe result.
pub(crate) fn health_label(health: Option<&HealthResponse>) -> &'static str {
    match health {
        Some(h) if h.generator_ready => "Pipeline ready",
        Some(_) => "Pipeline setup required",
        None => "Pipeline unreachable",
    }
}

/// Probes the pipeline once on mount and shows its readiness.
#[component]
pub fn HealthBadge() -> impl IntoView {
    let health = RwSignal::new(None::<HealthResponse>);
    let probed = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let config = expect_context::<ClientConfig>();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_health(&config).await;
            health.set(result);
            probed.set(true);
        });
    }

    let label = move || {
        if probed.get() {
            health.with(|h| health_label(h.as_ref()))
        } else {
            "Checking pipeline…"
        }
    };
    let ready = move || health.with(|h| h.as_ref().is_some_and(|h| h.generator_ready));

    view! {
        <span class="health-badge" class:health-badge--ready=ready>{label}</span>
    }
}
