//! Error taxonomy for the submission cycle.
//!
//! ERROR HANDLING
//! ==============
//! `Display` output is the user-facing text. Validation failures are kept
//! apart from [`SubmitError`] because they never start a cycle; everything
//! else ends the active cycle in the failed state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Input rejected before any network activity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The image picker holds no files.
    #[error("Select at least one image.")]
    NoImages,
}

/// Failure turning a base64 payload into a previewable resource.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not valid padded standard base64.
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),
    /// The host environment refused to create a resource handle.
    #[error("Could not create preview resource: {0}")]
    Resource(String),
}

/// Terminal failure of one submission cycle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The pipeline answered with a non-success HTTP status.
    #[error("Pipeline failed. Status: {status}")]
    Pipeline { status: u16 },
    /// A success response whose body is not a pipeline response.
    #[error("Malformed pipeline response: {0}")]
    MalformedResponse(String),
    /// The request never produced an HTTP response.
    #[error("Request failed: {0}")]
    Transport(String),
    /// A selected file could not be read into memory.
    #[error("Could not read image {filename}: {reason}")]
    ImageRead { filename: String, reason: String },
    /// The selection emptied after the cycle had already started.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The inline artifact could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
