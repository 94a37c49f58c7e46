//! Shared fixtures for integration tests.

#![allow(dead_code)]

use dashboard_navigator::prelude::*;
use dashboard_navigator::source::{BoxError, TransportResponse};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::oneshot;

/// Route crate logging to the test harness output
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `Apps > Tasks` tree from the dashboard sidebar
pub fn apps_tree() -> Vec<NavItem> {
    vec![NavItem::new("Apps", "/apps").children(vec![NavItem::new("Tasks", "/apps/tasks")])]
}

/// A sidebar with a group header, nested sections and a duplicate path
pub fn sidebar_tree() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/home").icon("home"),
        NavItem::group("Pages").children(vec![NavItem::new("Hidden", "/hidden")]),
        NavItem::new("Apps", "/apps").icon("apps").children(vec![
            NavItem::new("Chat", "/apps/chat"),
            NavItem::new("Tasks", "/apps/tasks").children(vec![
                NavItem::new("Board", "/apps/tasks/board"),
                NavItem::new("Archive", "/apps/tasks/archive"),
            ]),
        ]),
        NavItem::new("Project Info", "/project-info"),
        NavItem::new("Tasks Elsewhere", "/apps/tasks"),
    ]
}

/// (path, title) pairs of a trail
pub fn pairs(trail: &[BreadcrumbSegment]) -> Vec<(&str, &str)> {
    trail
        .iter()
        .map(|s| (s.path.as_str(), s.title.as_str()))
        .collect()
}

/// Serialize a tree to the JSON body an endpoint would serve
pub fn body(items: &[NavItem]) -> String {
    serde_json::to_string(items).unwrap()
}

/// Transport whose responses are released by the test, one per request,
/// in request order.
#[derive(Default)]
pub struct GatedTransport {
    pending: Mutex<VecDeque<oneshot::Receiver<TransportResponse>>>,
}

impl GatedTransport {
    /// Queue a gate for the next request; send on the returned sender to
    /// release it.
    pub fn gate(&self) -> oneshot::Sender<TransportResponse> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().push_back(rx);
        tx
    }
}

#[async_trait]
impl NavigationTransport for GatedTransport {
    async fn get(&self, _endpoint: &str) -> Result<TransportResponse, BoxError> {
        let gate = self.pending.lock().pop_front();
        match gate {
            Some(rx) => Ok(rx.await?),
            None => Err("no response queued".into()),
        }
    }
}
