//! Submission request assembly from the pipeline form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::ValidationError;

/// One selected image, read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePart {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Everything one `POST /apply` carries. Built by [`collect`], read-only after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRequest {
    tutorial_url: String,
    images: Vec<ImagePart>,
    inline_render: bool,
}

impl SubmissionRequest {
    #[must_use]
    pub fn tutorial_url(&self) -> &str {
        &self.tutorial_url
    }

    /// Selected images in picker order.
    #[must_use]
    pub fn images(&self) -> &[ImagePart] {
        &self.images
    }

    #[must_use]
    pub fn inline_render(&self) -> bool {
        self.inline_render
    }
}

/// Check that at least one image is selected.
///
/// # Errors
///
/// Returns [`ValidationError::NoImages`] when `count` is zero.
pub fn ensure_selection(count: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::NoImages);
    }
    Ok(())
}

/// Build a request from the form inputs. The tutorial URL is trimmed and
/// inline rendering is always requested.
///
/// # Errors
///
/// Returns [`ValidationError::NoImages`] when `images` is empty.
pub fn collect(tutorial_url: &str, images: Vec<ImagePart>) -> Result<SubmissionRequest, ValidationError> {
    ensure_selection(images.len())?;
    Ok(SubmissionRequest {
        tutorial_url: tutorial_url.trim().to_owned(),
        images,
        inline_render: true,
    })
}
