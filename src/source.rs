//! Navigation data source
//!
//! [`NavigationDataSource`] loads navigation trees through a
//! [`NavigationTransport`] and keeps the latest [`NavigationState`] per
//! [`NavKind`]. The transport is the only suspension point; everything the
//! breadcrumb builder does with the result is synchronous.
//!
//! # Failure handling
//!
//! [`fetch`](NavigationDataSource::fetch) never fails. A transport error,
//! a non-2xx status or an undecodable body all resolve to a state with empty
//! items, `loading == false` and the error recorded. There is no retry.
//!
//! # Request ordering
//!
//! Every request takes a fresh id from a shared counter and records it as
//! the latest for its kind. When a response arrives it is committed only if
//! its id is still the latest; a slower, older response that finishes after
//! a newer request was issued is dropped.
//!
//! Every awaited call resolves to a settled state (`loading == false`): a
//! caller whose response was discarded, or who joined a request already in
//! flight, waits for that request to finish. A request whose future is
//! dropped before it completes releases the slot so nothing stays loading.

use crate::config::NavigationEndpoints;
use crate::error::NavigationError;
use crate::nav::{self, NavItem, NavKind};
use crate::{debug_log, error_log, info_log};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Error type transports report failures with
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Raw response of a transport GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can GET an endpoint.
///
/// This is the boundary to the outside world: an HTTP client in an
/// application, [`MockBackend`](crate::mock::MockBackend) in tests.
#[async_trait]
pub trait NavigationTransport: Send + Sync {
    async fn get(&self, endpoint: &str) -> Result<TransportResponse, BoxError>;
}

#[async_trait]
impl<T: NavigationTransport + ?Sized> NavigationTransport for Arc<T> {
    async fn get(&self, endpoint: &str) -> Result<TransportResponse, BoxError> {
        (**self).get(endpoint).await
    }
}

/// Snapshot of one navigation tree's load state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Loaded items; empty before the first load and after a failure
    pub items: Vec<NavItem>,
    /// A request for this tree is in flight
    pub loading: bool,
    /// Why the last completed request failed
    pub error: Option<NavigationError>,
}

impl NavigationState {
    /// Loaded and non-empty
    pub fn is_ready(&self) -> bool {
        !self.loading && !self.items.is_empty()
    }

    /// Whether the last completed request failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug)]
struct Slot {
    state: watch::Sender<NavigationState>,
    latest: u64,
}

impl Slot {
    fn new() -> Self {
        let (state, _) = watch::channel(NavigationState::default());
        Self { state, latest: 0 }
    }
}

/// Settles its request if it is dropped before committing.
struct PendingRequest<'a> {
    source: &'a NavigationDataSource,
    kind: NavKind,
    id: u64,
    committed: bool,
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.source.abandon(self.kind, self.id);
        }
    }
}

/// Loads and holds navigation trees, one per [`NavKind`].
///
/// # Examples
///
/// ```
/// use dashboard_navigator::mock::MockBackend;
/// use dashboard_navigator::nav::{NavItem, NavKind};
/// use dashboard_navigator::source::NavigationDataSource;
///
/// let backend = MockBackend::new()
///     .with_items("/api/vertical-nav/data", &[NavItem::new("Tasks", "/tasks")]);
/// let source = NavigationDataSource::new(backend);
///
/// let state = pollster::block_on(source.fetch(NavKind::Vertical));
/// assert!(state.is_ready());
/// assert_eq!(state.items[0].title, "Tasks");
/// ```
pub struct NavigationDataSource {
    transport: Arc<dyn NavigationTransport>,
    endpoints: NavigationEndpoints,
    slots: Mutex<HashMap<NavKind, Slot>>,
    request_id: AtomicU64,
}

impl NavigationDataSource {
    /// Create a source using the default endpoints
    pub fn new<T: NavigationTransport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            endpoints: NavigationEndpoints::default(),
            slots: Mutex::new(HashMap::new()),
            request_id: AtomicU64::new(0),
        }
    }

    /// Replace the endpoint table
    pub fn with_endpoints(mut self, endpoints: NavigationEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn endpoints(&self) -> &NavigationEndpoints {
        &self.endpoints
    }

    /// Current state of a tree (default state if it was never requested)
    pub fn state(&self, kind: NavKind) -> NavigationState {
        self.slots
            .lock()
            .get(&kind)
            .map(|slot| slot.state.borrow().clone())
            .unwrap_or_default()
    }

    /// Run `f` on a snapshot of the current state.
    ///
    /// No lock is held while `f` runs, so it may call back into the source.
    pub fn with_state<R>(&self, kind: NavKind, f: impl FnOnce(&NavigationState) -> R) -> R {
        let state = self.state(kind);
        f(&state)
    }

    /// Whether a request for this tree has been issued and not abandoned
    pub fn has_requested(&self, kind: NavKind) -> bool {
        self.slots.lock().get(&kind).is_some_and(|slot| slot.latest > 0)
    }

    /// Wait until no request for this tree is in flight and return its state.
    ///
    /// Returns immediately when nothing is loading.
    pub async fn settled(&self, kind: NavKind) -> NavigationState {
        let mut rx = self
            .slots
            .lock()
            .entry(kind)
            .or_insert_with(Slot::new)
            .state
            .subscribe();

        let settled = match rx.wait_for(|state| !state.loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(kind),
        };
        settled
    }

    /// Fetch a tree, replacing whatever was loaded before.
    ///
    /// Returns the settled state. If a newer request for the same kind was
    /// issued meanwhile, this response is discarded and the call waits for
    /// the newer one instead.
    pub async fn fetch(&self, kind: NavKind) -> NavigationState {
        let id = self.begin(kind);
        self.complete(kind, id).await;
        self.settled(kind).await
    }

    /// Fetch a tree only if it has never been requested.
    ///
    /// Calls made while the first request is in flight wait for it and get
    /// the same result; nothing is polled or retried. If the request is
    /// dropped before it completes, the next call fetches again.
    pub async fn load_once(&self, kind: NavKind) -> NavigationState {
        if let Some(id) = self.begin_if_new(kind) {
            self.complete(kind, id).await;
        }
        self.settled(kind).await
    }

    fn next_request_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn begin(&self, kind: NavKind) -> u64 {
        let id = self.next_request_id();
        let mut slots = self.slots.lock();
        Self::mark_loading(slots.entry(kind).or_insert_with(Slot::new), id);
        id
    }

    fn begin_if_new(&self, kind: NavKind) -> Option<u64> {
        let mut slots = self.slots.lock();
        let slot = slots.entry(kind).or_insert_with(Slot::new);
        if slot.latest > 0 {
            return None;
        }
        let id = self.next_request_id();
        Self::mark_loading(slot, id);
        Some(id)
    }

    fn mark_loading(slot: &mut Slot, id: u64) {
        slot.latest = id;
        slot.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    async fn complete(&self, kind: NavKind, id: u64) {
        let mut pending = PendingRequest {
            source: self,
            kind,
            id,
            committed: false,
        };
        let endpoint = self.endpoints.for_kind(kind).to_string();
        debug_log!("Fetching {} navigation from {} (request {})", kind, endpoint, id);
        let result = self.request(&endpoint).await;
        self.commit(kind, id, result);
        pending.committed = true;
    }

    async fn request(&self, endpoint: &str) -> Result<Vec<NavItem>, NavigationError> {
        let response =
            self.transport
                .get(endpoint)
                .await
                .map_err(|err| NavigationError::Transport {
                    endpoint: endpoint.to_string(),
                    message: err.to_string(),
                })?;

        if !response.is_success() {
            return Err(NavigationError::Status {
                endpoint: endpoint.to_string(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|err| NavigationError::Decode {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        })
    }

    fn commit(&self, kind: NavKind, id: u64, result: Result<Vec<NavItem>, NavigationError>) {
        let mut slots = self.slots.lock();
        let slot = slots.entry(kind).or_insert_with(Slot::new);

        if slot.latest != id {
            debug_log!(
                "Discarding stale {} navigation response (request {}, latest {})",
                kind,
                id,
                slot.latest
            );
            return;
        }

        slot.state.send_modify(|state| {
            match result {
                Ok(items) => {
                    info_log!(
                        "Loaded {} {} navigation items ({} levels)",
                        nav::count(&items),
                        kind,
                        nav::depth(&items)
                    );
                    state.items = items;
                    state.error = None;
                }
                Err(err) => {
                    error_log!("Error fetching navigation data: {}", err);
                    state.items.clear();
                    state.error = Some(err);
                }
            }
            state.loading = false;
        });
    }

    /// A request was dropped mid-flight. If it is still the latest, stop
    /// reporting `loading` and forget it so `load_once` can fetch again.
    fn abandon(&self, kind: NavKind, id: u64) {
        let mut slots = self.slots.lock();
        let Some(slot) = slots.get_mut(&kind) else {
            return;
        };
        if slot.latest == id {
            debug_log!("{} navigation request {} dropped before completing", kind, id);
            slot.latest = 0;
            slot.state.send_modify(|state| state.loading = false);
        }
    }
}

impl std::fmt::Debug for NavigationDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationDataSource")
            .field("endpoints", &self.endpoints)
            .field("slots", &*self.slots.lock())
            .finish()
    }
}
