//! Per-cycle preview gallery.
//!
//! DESIGN
//! ======
//! Entries published through a [`ResourceStore`] are remembered so the next
//! cycle's reset can release them; remote download URLs are never tracked.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::util::resource::ResourceStore;

/// One rendered artifact preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewEntry {
    pub uri: String,
    pub filename: String,
}

/// Ordered previews for the current submission cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    entries: Vec<PreviewEntry>,
    owned_handles: Vec<String>,
}

impl Gallery {
    /// Drop every entry and release the handles this gallery published.
    pub fn reset<S: ResourceStore>(&mut self, store: &mut S) {
        for uri in self.owned_handles.drain(..) {
            store.release(&uri);
        }
        self.entries.clear();
    }

    pub fn add(&mut self, entry: PreviewEntry) {
        self.entries.push(entry);
    }

    /// Append an entry whose URI came from a [`ResourceStore`].
    pub fn add_owned(&mut self, entry: PreviewEntry) {
        self.owned_handles.push(entry.uri.clone());
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[PreviewEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
