//! Session-scoped handles for decoded preview payloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser a decoded payload becomes a `Blob` exposed through an object
//! URL that an `<img>` can load. Off the browser the same contract is served
//! from memory, which is also what tests resolve handles against.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::collections::HashMap;

use crate::error::DecodeError;
use crate::util::decode::DecodedPayload;

/// Publishes decoded payloads under URIs and releases them again.
pub trait ResourceStore {
    /// Make `payload` addressable and return its handle.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Resource`] if the environment refuses the resource.
    fn publish(&mut self, payload: &DecodedPayload) -> Result<String, DecodeError>;

    /// Invalidate a handle previously returned by [`ResourceStore::publish`].
    fn release(&mut self, uri: &str);
}

/// Store backing the running client: object URLs in the browser, memory elsewhere.
#[cfg(feature = "csr")]
pub type PreviewStore = BlobUrlStore;
#[cfg(not(feature = "csr"))]
pub type PreviewStore = MemoryStore;

/// Object-URL store over `Blob`s in the hosting document.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BlobUrlStore;

#[cfg(feature = "csr")]
impl ResourceStore for BlobUrlStore {
    fn publish(&mut self, payload: &DecodedPayload) -> Result<String, DecodeError> {
        let parts = js_sys::Array::new();
        for part in payload.parts() {
            parts.push(&js_sys::Uint8Array::from(part.as_slice()));
        }
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(payload.content_type());
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| DecodeError::Resource(format!("{e:?}")))?;
        web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| DecodeError::Resource(format!("{e:?}")))
    }

    fn release(&mut self, uri: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(uri) {
            log::warn!("failed to revoke preview url {uri}: {e:?}");
        }
    }
}

/// In-memory store issuing `memory://preview/<n>` handles.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    next_id: u64,
    live: HashMap<String, DecodedPayload>,
}

impl MemoryStore {
    /// Bytes behind a live handle.
    #[must_use]
    pub fn resolve(&self, uri: &str) -> Option<Vec<u8>> {
        self.live.get(uri).map(DecodedPayload::to_bytes)
    }

    /// Declared MIME type behind a live handle.
    #[must_use]
    pub fn content_type(&self, uri: &str) -> Option<&str> {
        self.live.get(uri).map(DecodedPayload::content_type)
    }

    /// Number of handles not yet released.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl ResourceStore for MemoryStore {
    fn publish(&mut self, payload: &DecodedPayload) -> Result<String, DecodeError> {
        self.next_id += 1;
        let uri = format!("memory://preview/{}", self.next_id);
        self.live.insert(uri.clone(), payload.clone());
        Ok(uri)
    }

    fn release(&mut self, uri: &str) {
        self.live.remove(uri);
    }
}
