//! Issuing the DELETE request for a venue and acting on the response.
//!
//! The request is a single round trip. A redirected response moves the
//! browsing context to wherever the redirects ended; any other response is
//! accepted silently, whatever its status. Transport failures are written
//! to the diagnostics channel and go no further.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;

/// Base path every venue resource lives under.
pub const VENUES_PATH: &str = "/venues/";

/// Path of a single venue. The id is appended as-is, so an empty id
/// yields `/venues/`.
pub fn venue_path(venue_id: &str) -> String {
    format!("{VENUES_PATH}{venue_id}")
}

/// What the transport saw once the request (and any redirects) finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    pub status: u16,
    /// True when one or more redirects were followed.
    pub redirected: bool,
    /// Final URL after following redirects.
    pub url: String,
}

/// HTTP client able to send a bodiless DELETE and follow redirects.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn delete(&self, path: &str) -> Result<DeleteResponse, TransportError>;
}

/// The browsing context whose location a redirect replaces.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Where failed requests are reported.
pub trait Diagnostics: Send + Sync {
    fn error(&self, err: &TransportError);
}

/// Reports failures as `tracing` error events.
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn error(&self, err: &TransportError) {
        tracing::error!(url = err.url(), error = %err, "venue delete request failed");
    }
}

/// How a single invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server redirected and the navigator was sent to `url`.
    Navigated(String),
    /// The request completed without a redirect. Nothing else happened,
    /// including for error statuses.
    Completed { status: u16 },
    /// The request could not be completed; the error was reported once.
    Failed,
}

/// The delete operation with its collaborators injected.
#[derive(Clone)]
pub struct DeleteVenue {
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl DeleteVenue {
    pub fn new(transport: Arc<dyn Transport>, navigator: Arc<dyn Navigator>) -> Self {
        DeleteVenue {
            transport,
            navigator,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Send `DELETE /venues/{venue_id}` and follow a server-driven redirect.
    pub async fn invoke(&self, venue_id: &str) -> DeleteOutcome {
        let path = venue_path(venue_id);
        tracing::debug!(%path, "sending venue delete");

        match self.transport.delete(&path).await {
            Ok(response) if response.redirected => {
                tracing::debug!(url = %response.url, "delete redirected");
                self.navigator.navigate(&response.url);
                DeleteOutcome::Navigated(response.url)
            }
            // Non-redirect responses are deliberately left alone, even 4xx/5xx.
            Ok(response) => DeleteOutcome::Completed {
                status: response.status,
            },
            Err(err) => {
                self.diagnostics.error(&err);
                DeleteOutcome::Failed
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;

    struct Harness {
        transport: Arc<FakeTransport>,
        navigator: Arc<RecordingNavigator>,
        diagnostics: Arc<RecordingDiagnostics>,
        action: DeleteVenue,
    }

    fn harness(transport: FakeTransport) -> Harness {
        let transport = Arc::new(transport);
        let navigator = Arc::new(RecordingNavigator::default());
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let action = DeleteVenue::new(transport.clone(), navigator.clone())
            .with_diagnostics(diagnostics.clone());

        Harness {
            transport,
            navigator,
            diagnostics,
            action,
        }
    }

    #[test]
    fn test_venue_path() {
        assert_eq!(venue_path("42"), "/venues/42");
        assert_eq!(venue_path(""), "/venues/");
        // No validation or escaping.
        assert_eq!(venue_path("a b/../c"), "/venues/a b/../c");
    }

    #[tokio::test]
    async fn test_redirect_navigates_to_final_url() {
        let h = harness(FakeTransport::redirecting_to("/venues"));

        let outcome = h.action.invoke("7").await;

        assert_eq!(outcome, DeleteOutcome::Navigated("/venues".into()));
        assert_eq!(h.transport.requests(), vec!["/venues/7"]);
        assert_eq!(h.navigator.visited(), vec!["/venues"]);
        assert!(h.diagnostics.errors().is_empty());
    }

    #[tokio::test]
    async fn test_plain_success_is_silent() {
        let h = harness(FakeTransport::with_status(204));

        let outcome = h.action.invoke("7").await;

        assert_eq!(outcome, DeleteOutcome::Completed { status: 204 });
        assert!(h.navigator.visited().is_empty());
        assert!(h.diagnostics.errors().is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_not_distinguished() {
        // Open question: a non-redirect response gets no handling at all.
        let h = harness(FakeTransport::with_status(500));

        let outcome = h.action.invoke("7").await;

        assert_eq!(outcome, DeleteOutcome::Completed { status: 500 });
        assert!(h.navigator.visited().is_empty());
        assert!(h.diagnostics.errors().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_logged_once() {
        let h = harness(FakeTransport::failing());

        let outcome = h.action.invoke("7").await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert_eq!(h.transport.requests().len(), 1, "no retry");
        assert_eq!(
            h.diagnostics.errors(),
            vec!["DELETE /venues/7 failed: connection refused"]
        );
        assert!(h.navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_empty_id_is_sent_verbatim() {
        let h = harness(FakeTransport::with_status(405));

        h.action.invoke("").await;

        assert_eq!(h.transport.requests(), vec!["/venues/"]);
    }

    #[tokio::test]
    async fn test_default_diagnostics_do_not_panic() {
        let transport = Arc::new(FakeTransport::failing());
        let navigator = Arc::new(RecordingNavigator::default());
        let action = DeleteVenue::new(transport, navigator.clone());

        assert_eq!(action.invoke("1").await, DeleteOutcome::Failed);
        assert!(navigator.visited().is_empty());
    }
}
