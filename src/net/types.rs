//! Wire schema for the pipeline API and its normalized outcome.
//!
//! DESIGN
//! ======
//! The server reports `application` and `inline_render` as independent
//! optional fields. [`PipelineOutcome`] folds them into one variant up front
//! so the inline-first priority lives in a single conversion and rendering is
//! an exhaustive match.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Raw `POST /apply` success body. Unknown fields (e.g. `generation`) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResponse {
    #[serde(default)]
    pub pipeline_id: Option<String>,
    #[serde(default)]
    pub application: Option<ApplicationResult>,
    #[serde(default)]
    pub inline_render: Option<InlineRender>,
}

/// Result of applying the generated actions on the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationResult {
    /// Server-relative download path, e.g. `/download/<job_id>`.
    #[serde(default)]
    pub download_url: Option<String>,
    /// Server-side path of the rendered file.
    #[serde(default)]
    pub output_path: Option<String>,
}

/// Rendered artifact embedded in the response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRender {
    pub base64_data: String,
    pub content_type: String,
    pub filename: String,
}

/// Reference to an artifact the server keeps for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRef {
    pub download_url: String,
    pub output_path: Option<String>,
}

/// What a successful submission produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Artifact bytes are embedded; takes priority over everything else.
    Inline(InlineRender),
    /// Artifact must be fetched from the server.
    Download(DownloadRef),
    /// Nothing to preview.
    Empty,
}

impl From<PipelineResponse> for PipelineOutcome {
    fn from(response: PipelineResponse) -> Self {
        if let Some(inline) = response.inline_render {
            return Self::Inline(inline);
        }
        match response.application {
            Some(ApplicationResult { download_url: Some(download_url), output_path })
                if !download_url.is_empty() =>
            {
                Self::Download(DownloadRef { download_url, output_path })
            }
            _ => Self::Empty,
        }
    }
}

/// Parse a success body into an outcome.
///
/// # Errors
///
/// Returns [`SubmitError::MalformedResponse`] if `body` is not a pipeline response.
pub fn parse_pipeline_response(body: &str) -> Result<PipelineOutcome, SubmitError> {
    let response: PipelineResponse =
        serde_json::from_str(body).map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
    if let Some(id) = response.pipeline_id.as_deref() {
        leptos::logging::log!("pipeline {id} finished");
    }
    Ok(response.into())
}

/// `GET /health` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub generator_ready: bool,
}
