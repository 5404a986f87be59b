//! HTTP exchange with the pipeline service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: the transport is supplied by the caller, and the health probe
//! stub returns `None` since it is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The status code is checked before the body is touched; non-success
//! responses are reported by code alone.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{HealthResponse, PipelineOutcome, parse_pipeline_response};
use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::util::form::SubmissionRequest;

/// One multipart field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPart<'a> {
    Text { name: &'static str, value: &'a str },
    File { name: &'static str, filename: &'a str, bytes: &'a [u8] },
}

/// Ordered multipart body for `POST /apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartForm<'a> {
    pub parts: Vec<FormPart<'a>>,
}

impl<'a> MultipartForm<'a> {
    /// Lay out `tutorial_url`, `inline_render`, then one `images` part per file.
    #[must_use]
    pub fn from_request(request: &'a SubmissionRequest) -> Self {
        let mut parts = Vec::with_capacity(request.images().len() + 2);
        parts.push(FormPart::Text { name: "tutorial_url", value: request.tutorial_url() });
        parts.push(FormPart::Text {
            name: "inline_render",
            value: if request.inline_render() { "true" } else { "false" },
        });
        for image in request.images() {
            parts.push(FormPart::File { name: "images", filename: &image.filename, bytes: &image.bytes });
        }
        Self { parts }
    }
}

/// A received HTTP response whose body has not been read yet.
#[async_trait(?Send)]
pub trait PipelineReply {
    fn status(&self) -> u16;

    /// Consume the body as text.
    async fn text(self) -> Result<String, SubmitError>;
}

/// Sends multipart requests to the pipeline.
#[async_trait(?Send)]
pub trait PipelineTransport {
    type Reply: PipelineReply;

    /// Issue one `POST` with a multipart body.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] if no response was received.
    async fn post_multipart(&self, url: &str, form: &MultipartForm<'_>) -> Result<Self::Reply, SubmitError>;
}

/// Submits requests to `<base>/apply` and interprets the reply.
#[derive(Clone, Debug)]
pub struct SubmissionClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: PipelineTransport> SubmissionClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Run one submission.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Pipeline`] on a non-2xx status,
    /// [`SubmitError::MalformedResponse`] if the body does not parse, and
    /// transport errors unchanged.
    pub async fn submit(&self, request: &SubmissionRequest) -> Result<PipelineOutcome, SubmitError> {
        let form = MultipartForm::from_request(request);
        let url = self.config.apply_url();
        leptos::logging::log!("submitting {} image(s) to {url}", request.images().len());

        let reply = self.transport.post_multipart(&url, &form).await?;
        let status = reply.status();
        if !is_success(status) {
            leptos::logging::warn!("pipeline request failed: status={status}");
            return Err(SubmitError::Pipeline { status });
        }
        let body = reply.text().await?;
        parse_pipeline_response(&body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// `gloo-net` transport used in the browser.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl PipelineReply for gloo_net::http::Response {
    fn status(&self) -> u16 {
        gloo_net::http::Response::status(self)
    }

    async fn text(self) -> Result<String, SubmitError> {
        gloo_net::http::Response::text(&self)
            .await
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))
    }
}

#[cfg(feature = "csr")]
fn to_form_data(form: &MultipartForm<'_>) -> Result<web_sys::FormData, SubmitError> {
    let transport_err = |e: wasm_bindgen::JsValue| SubmitError::Transport(format!("{e:?}"));
    let data = web_sys::FormData::new().map_err(transport_err)?;
    for part in &form.parts {
        match *part {
            FormPart::Text { name, value } => data.append_with_str(name, value).map_err(transport_err)?,
            FormPart::File { name, filename, bytes } => {
                let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
                let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(transport_err)?;
                data.append_with_blob_and_filename(name, &blob, filename).map_err(transport_err)?;
            }
        }
    }
    Ok(data)
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl PipelineTransport for GlooTransport {
    type Reply = gloo_net::http::Response;

    async fn post_multipart(&self, url: &str, form: &MultipartForm<'_>) -> Result<Self::Reply, SubmitError> {
        let body = to_form_data(form)?;
        gloo_net::http::Request::post(url)
            .body(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))
    }
}

/// Probe `GET <base>/health`. Returns `None` when unreachable or off the browser.
pub async fn fetch_health(config: &ClientConfig) -> Option<HealthResponse> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&config.health_url()).send().await.ok()?;
        if !resp.ok() {
            log::warn!("health probe failed: status={}", resp.status());
            return None;
        }
        resp.json::<HealthResponse>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        None
    }
}
