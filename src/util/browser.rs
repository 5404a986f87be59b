//! Browser glue for the pipeline form: file input access and alerts.
//!
//! Requires a browser environment; the module is only compiled with `csr`.

use wasm_bindgen_futures::JsFuture;

use crate::error::SubmitError;
use crate::util::form::ImagePart;

/// Snapshot the files currently selected in a file input, in picker order.
pub fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Read one selected file into memory.
///
/// # Errors
///
/// Returns [`SubmitError::ImageRead`] if the browser fails to read the file.
pub async fn read_image(file: &web_sys::File) -> Result<ImagePart, SubmitError> {
    let filename = file.name();
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| SubmitError::ImageRead { filename: filename.clone(), reason: format!("{e:?}") })?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::debug!("read image {filename} ({} bytes)", bytes.len());
    Ok(ImagePart { filename, bytes })
}

/// Read every selected file, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`SubmitError::ImageRead`] encountered.
pub async fn read_images(files: &[web_sys::File]) -> Result<Vec<ImagePart>, SubmitError> {
    let mut images = Vec::with_capacity(files.len());
    for file in files {
        images.push(read_image(file).await?);
    }
    Ok(images)
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
