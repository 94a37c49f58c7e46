use crate::nav::NavItem;
use crate::source::{BoxError, NavigationTransport, TransportResponse};
use crate::{trace_log, warn_log};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned responses keyed by endpoint.
///
/// Unknown endpoints answer `404` with an empty body. Routes can be replaced
/// at any time, which is how tests simulate a backend whose data changes
/// between fetches.
///
/// ```
/// use dashboard_navigator::mock::MockBackend;
/// use dashboard_navigator::source::NavigationTransport;
///
/// let backend = MockBackend::new().with_status("/api/vertical-nav/data", 500);
/// let response = pollster::block_on(backend.get("/api/vertical-nav/data")).unwrap();
/// assert_eq!(response.status, 500);
/// ```
#[derive(Debug, Default)]
pub struct MockBackend {
    routes: RwLock<HashMap<String, TransportResponse>>,
    requests: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` as JSON with status 200
    pub fn with_json<V: Serialize + ?Sized>(self, endpoint: impl Into<String>, value: &V) -> Self {
        self.set_json(endpoint, value);
        self
    }

    /// Serve a navigation tree with status 200
    pub fn with_items(self, endpoint: impl Into<String>, items: &[NavItem]) -> Self {
        self.with_json(endpoint, items)
    }

    /// Answer with a bare status and empty body
    pub fn with_status(self, endpoint: impl Into<String>, status: u16) -> Self {
        self.set_response(endpoint, TransportResponse::new(status, ""));
        self
    }

    /// Replace the response for an endpoint
    pub fn set_response(&self, endpoint: impl Into<String>, response: TransportResponse) {
        self.routes.write().insert(endpoint.into(), response);
    }

    /// Replace the response for an endpoint with `value` as JSON.
    ///
    /// A value that cannot be serialized is stored as a `500`.
    pub fn set_json<V: Serialize + ?Sized>(&self, endpoint: impl Into<String>, value: &V) {
        let endpoint = endpoint.into();
        let response = match serde_json::to_string(value) {
            Ok(body) => TransportResponse::ok(body),
            Err(err) => {
                warn_log!("Cannot serialize mock response for {}: {}", endpoint, err);
                TransportResponse::new(500, "")
            }
        };
        self.set_response(endpoint, response);
    }

    /// Number of requests served so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NavigationTransport for MockBackend {
    async fn get(&self, endpoint: &str) -> Result<TransportResponse, BoxError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let response = self
            .routes
            .read()
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| TransportResponse::new(404, ""));
        trace_log!("GET {} -> {}", endpoint, response.status);
        Ok(response)
    }
}
