//! Turns a pipeline outcome into gallery previews.

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use crate::config::ClientConfig;
use crate::error::DecodeError;
use crate::net::types::PipelineOutcome;
use crate::state::gallery::{Gallery, PreviewEntry};
use crate::util::decode::decode_base64;
use crate::util::resource::ResourceStore;

/// Preview name used when the server gives no usable output path.
pub const FALLBACK_FILENAME: &str = "rendered.psd";

/// Final `/`-separated segment of `output_path`, or [`FALLBACK_FILENAME`]
/// when the path is missing or ends in a separator.
#[must_use]
pub fn preview_filename(output_path: Option<&str>) -> String {
    output_path
        .and_then(|path| path.rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or(FALLBACK_FILENAME)
        .to_owned()
}

/// Render `outcome` into `gallery`. Returns the number of previews added.
///
/// # Errors
///
/// Returns a [`DecodeError`] if an inline payload cannot be decoded or published;
/// the gallery is left untouched in that case.
pub fn render_outcome<S: ResourceStore>(
    outcome: &PipelineOutcome,
    config: &ClientConfig,
    store: &mut S,
    gallery: &mut Gallery,
) -> Result<usize, DecodeError> {
    match outcome {
        PipelineOutcome::Inline(inline) => {
            let payload = decode_base64(&inline.base64_data, &inline.content_type)?;
            let uri = store.publish(&payload)?;
            leptos::logging::log!("inline preview {} ({} bytes)", inline.filename, payload.len());
            gallery.add_owned(PreviewEntry { uri, filename: inline.filename.clone() });
            Ok(1)
        }
        PipelineOutcome::Download(reference) => {
            gallery.add(PreviewEntry {
                uri: config.resolve(&reference.download_url),
                filename: preview_filename(reference.output_path.as_deref()),
            });
            Ok(1)
        }
        PipelineOutcome::Empty => {
            leptos::logging::warn!("pipeline response carried no artifact");
            Ok(0)
        }
    }
}
