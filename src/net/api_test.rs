use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::util::form::{ImagePart, collect};

// =========================================================================
// MockTransport
// =========================================================================

struct MockReply {
    status: u16,
    body: String,
    body_reads: std::rc::Rc<Cell<usize>>,
}

#[async_trait(?Send)]
impl PipelineReply for MockReply {
    fn status(&self) -> u16 {
        self.status
    }

    async fn text(self) -> Result<String, SubmitError> {
        self.body_reads.set(self.body_reads.get() + 1);
        Ok(self.body)
    }
}

struct MockTransport {
    status: u16,
    body: String,
    fail: Option<String>,
    urls: RefCell<Vec<String>>,
    forms: RefCell<Vec<Vec<String>>>,
    body_reads: std::rc::Rc<Cell<usize>>,
}

impl MockTransport {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
            fail: None,
            urls: RefCell::new(Vec::new()),
            forms: RefCell::new(Vec::new()),
            body_reads: std::rc::Rc::new(Cell::new(0)),
        }
    }

    fn unreachable(reason: &str) -> Self {
        Self { fail: Some(reason.to_owned()), ..Self::new(0, "") }
    }
}

fn describe(part: &FormPart<'_>) -> String {
    match part {
        FormPart::Text { name, value } => format!("{name}={value}"),
        FormPart::File { name, filename, bytes } => format!("{name}:{filename}:{}", bytes.len()),
    }
}

#[async_trait(?Send)]
impl PipelineTransport for MockTransport {
    type Reply = MockReply;

    async fn post_multipart(&self, url: &str, form: &MultipartForm<'_>) -> Result<MockReply, SubmitError> {
        self.urls.borrow_mut().push(url.to_owned());
        self.forms.borrow_mut().push(form.parts.iter().map(describe).collect());
        if let Some(reason) = &self.fail {
            return Err(SubmitError::Transport(reason.clone()));
        }
        Ok(MockReply { status: self.status, body: self.body.clone(), body_reads: self.body_reads.clone() })
    }
}

fn request() -> SubmissionRequest {
    collect(
        " https://youtu.be/tut ",
        vec![
            ImagePart { filename: "cat.png".to_owned(), bytes: vec![1, 2, 3] },
            ImagePart { filename: "dog.jpg".to_owned(), bytes: vec![4, 5] },
        ],
    )
    .unwrap()
}

fn client(transport: MockTransport) -> SubmissionClient<MockTransport> {
    SubmissionClient::new(transport, ClientConfig::from_override(Some("http://api.test")))
}

// =========================================================================
// Request layout
// =========================================================================

#[test]
fn multipart_form_lists_fields_in_order() {
    let request = request();
    let form = MultipartForm::from_request(&request);
    let described: Vec<String> = form.parts.iter().map(describe).collect();
    assert_eq!(
        described,
        ["tutorial_url=https://youtu.be/tut", "inline_render=true", "images:cat.png:3", "images:dog.jpg:2"]
    );
}

#[test]
fn submit_posts_to_apply_endpoint() {
    let client = client(MockTransport::new(200, "{}"));
    block_on(client.submit(&request())).unwrap();
    assert_eq!(*client.transport.urls.borrow(), ["http://api.test/apply"]);
    assert_eq!(client.transport.forms.borrow()[0].len(), 4);
}

// =========================================================================
// Response handling
// =========================================================================

#[test]
fn success_body_is_parsed() {
    let body = r#"{"application":{"download_url":"/files/123.psd","output_path":"/out/final.psd"}}"#;
    let client = client(MockTransport::new(200, body));
    let outcome = block_on(client.submit(&request())).unwrap();
    assert!(matches!(outcome, PipelineOutcome::Download(_)));
}

#[test]
fn non_success_status_fails_without_reading_body() {
    let client = client(MockTransport::new(500, "not json"));
    let err = block_on(client.submit(&request())).unwrap_err();
    assert_eq!(err, SubmitError::Pipeline { status: 500 });
    assert_eq!(client.transport.body_reads.get(), 0);
}

#[test]
fn redirect_status_is_not_success() {
    let client = client(MockTransport::new(302, "{}"));
    assert_eq!(block_on(client.submit(&request())).unwrap_err(), SubmitError::Pipeline { status: 302 });
}

#[test]
fn malformed_success_body_is_distinct_error() {
    let client = client(MockTransport::new(200, "<html></html>"));
    let err = block_on(client.submit(&request())).unwrap_err();
    assert!(matches!(err, SubmitError::MalformedResponse(_)));
}

#[test]
fn transport_failure_propagates() {
    let client = client(MockTransport::unreachable("network down"));
    let err = block_on(client.submit(&request())).unwrap_err();
    assert_eq!(err.to_string(), "Request failed: network down");
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(404));
}

#[cfg(not(feature = "csr"))]
#[test]
fn fetch_health_is_none_off_browser() {
    assert!(block_on(fetch_health(&ClientConfig::default())).is_none());
}
