use base64::Engine;
use base64::prelude::BASE64_STANDARD;

use super::*;
use crate::net::types::{DownloadRef, InlineRender};
use crate::util::resource::MemoryStore;

fn config() -> ClientConfig {
    ClientConfig::from_override(Some("http://api.test"))
}

fn download(url: &str, output_path: Option<&str>) -> PipelineOutcome {
    PipelineOutcome::Download(DownloadRef {
        download_url: url.to_owned(),
        output_path: output_path.map(str::to_owned),
    })
}

// =============================================================
// Filename derivation
// =============================================================

#[test]
fn preview_filename_takes_last_segment() {
    assert_eq!(preview_filename(Some("a/b/rendered_final.psd")), "rendered_final.psd");
    assert_eq!(preview_filename(Some("/out/final.psd")), "final.psd");
    assert_eq!(preview_filename(Some("bare.psd")), "bare.psd");
}

#[test]
fn preview_filename_falls_back_without_segment() {
    assert_eq!(preview_filename(None), "rendered.psd");
    assert_eq!(preview_filename(Some("")), "rendered.psd");
    assert_eq!(preview_filename(Some("runs/out/")), "rendered.psd");
}

// =============================================================
// Branches
// =============================================================

#[test]
fn inline_outcome_publishes_decoded_bytes() {
    let bytes: Vec<u8> = (0..=255).collect();
    let outcome = PipelineOutcome::Inline(InlineRender {
        base64_data: BASE64_STANDARD.encode(&bytes),
        content_type: "image/png".to_owned(),
        filename: "cat.png".to_owned(),
    });
    let mut store = MemoryStore::default();
    let mut gallery = Gallery::default();

    assert_eq!(render_outcome(&outcome, &config(), &mut store, &mut gallery), Ok(1));
    let entry = &gallery.entries()[0];
    assert_eq!(entry.filename, "cat.png");
    assert_eq!(store.resolve(&entry.uri), Some(bytes));
    assert_eq!(store.content_type(&entry.uri), Some("image/png"));
}

#[test]
fn download_outcome_joins_base_endpoint() {
    let mut store = MemoryStore::default();
    let mut gallery = Gallery::default();
    let outcome = download("/files/123.psd", Some("/out/final.psd"));

    assert_eq!(render_outcome(&outcome, &config(), &mut store, &mut gallery), Ok(1));
    assert_eq!(
        gallery.entries(),
        [PreviewEntry { uri: "http://api.test/files/123.psd".to_owned(), filename: "final.psd".to_owned() }]
    );
    assert_eq!(store.live_count(), 0);
}

#[test]
fn download_outcome_without_output_path_uses_fallback_name() {
    let mut store = MemoryStore::default();
    let mut gallery = Gallery::default();
    render_outcome(&download("/download/9", None), &config(), &mut store, &mut gallery).unwrap();
    assert_eq!(gallery.entries()[0].filename, "rendered.psd");
}

#[test]
fn empty_outcome_renders_nothing() {
    let mut store = MemoryStore::default();
    let mut gallery = Gallery::default();
    assert_eq!(render_outcome(&PipelineOutcome::Empty, &config(), &mut store, &mut gallery), Ok(0));
    assert!(gallery.is_empty());
}

#[test]
fn bad_inline_payload_leaves_gallery_untouched() {
    let outcome = PipelineOutcome::Inline(InlineRender {
        base64_data: "not base64!".to_owned(),
        content_type: "image/png".to_owned(),
        filename: "cat.png".to_owned(),
    });
    let mut store = MemoryStore::default();
    let mut gallery = Gallery::default();
    let err = render_outcome(&outcome, &config(), &mut store, &mut gallery).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidBase64(_)));
    assert!(gallery.is_empty());
    assert_eq!(store.live_count(), 0);
}
