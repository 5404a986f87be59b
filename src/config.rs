//! Pipeline endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page may set `window.FLUXA_API_BASE` before the bundle loads.
//! Everything else about the endpoint layout is fixed by the pipeline API.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base address used when the host page supplies no override.
pub const DEFAULT_API_BASE: &str = "http://0.0.0.0:8000";

/// Global the host page may define to point the client at another pipeline.
#[cfg(feature = "csr")]
const API_BASE_GLOBAL: &str = "FLUXA_API_BASE";

/// Resolved client configuration, provided to the component tree via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_override(None)
    }
}

impl ClientConfig {
    /// Build a config from an optional override. Blank overrides fall back to
    /// [`DEFAULT_API_BASE`]; trailing slashes are dropped so paths join cleanly.
    #[must_use]
    pub fn from_override(base: Option<&str>) -> Self {
        let base = base
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/');
        Self { base_endpoint: base.to_owned() }
    }

    /// Read the override from the hosting window.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let value = web_sys::window().and_then(|window| {
                js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(API_BASE_GLOBAL))
                    .ok()
                    .and_then(|v| v.as_string())
            });
            Self::from_override(value.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    #[must_use]
    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }

    /// `POST` target for submissions.
    #[must_use]
    pub fn apply_url(&self) -> String {
        self.resolve("/apply")
    }

    /// `GET` target for the readiness probe.
    #[must_use]
    pub fn health_url(&self) -> String {
        self.resolve("/health")
    }

    /// Join a server-relative path onto the base endpoint by plain
    /// concatenation; the pipeline hands out paths with a leading `/`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        format!("{}{path}", self.base_endpoint)
    }
}
