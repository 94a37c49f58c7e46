//! # dashboard-navigator
//!
//! Navigation trees, breadcrumb trails and a mock REST backend for an
//! administrative dashboard.
//!
//! - [`nav`] — the navigation tree data model ([`NavItem`], [`NavKind`]).
//! - [`matching`] — exact/prefix matching of a route against the tree.
//! - [`breadcrumb`] — trail construction with a path-segment fallback.
//! - [`source`] — async loading of trees with stale-response protection.
//! - [`mock`] — in-memory backend for navigation, tasks and projects
//!   (feature `mock`).
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use dashboard_navigator::prelude::*;
//!
//! let backend = MockBackend::new().with_items(
//!     "/api/vertical-nav/data",
//!     &[NavItem::new("Apps", "/apps").children(vec![NavItem::new("Tasks", "/apps/tasks")])],
//! );
//! let source = Arc::new(NavigationDataSource::new(backend));
//! pollster::block_on(source.load_once(NavKind::Vertical));
//!
//! let builder = BreadcrumbBuilder::new(BreadcrumbConfig::default()).with_source(source);
//! let titles: Vec<_> = builder
//!     .resolve("/apps/tasks?status=open")
//!     .into_iter()
//!     .map(|s| s.title)
//!     .collect();
//! assert_eq!(titles, ["Dashboard", "Apps", "Tasks"]);
//! assert!(builder.resolve("/").is_empty());
//! ```
//!
//! ## Features
//!
//! | Feature   | Default | Description                                   |
//! |-----------|---------|-----------------------------------------------|
//! | `log`     | yes     | Log through the `log` crate                    |
//! | `tracing` | no      | Log through the `tracing` crate                |
//! | `mock`    | yes     | [`mock`] module                               |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

pub mod breadcrumb;
pub mod config;
pub mod error;
pub mod matching;
pub mod nav;
pub mod source;

#[cfg(feature = "mock")]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;

pub use breadcrumb::{BreadcrumbBuilder, BreadcrumbSegment, TreeState};
pub use config::{BreadcrumbConfig, NavigationEndpoints};
pub use error::{NavigationError, TaskError};
pub use matching::{match_path, MatchResult};
pub use nav::{NavItem, NavKind};
pub use source::{NavigationDataSource, NavigationState, NavigationTransport, TransportResponse};

/// Commonly used types
pub mod prelude {
    pub use crate::breadcrumb::{BreadcrumbBuilder, BreadcrumbSegment, TreeState};
    pub use crate::config::{BreadcrumbConfig, NavigationEndpoints};
    pub use crate::error::NavigationError;
    pub use crate::matching::match_path;
    #[cfg(feature = "mock")]
    pub use crate::mock::MockBackend;
    pub use crate::nav::{NavItem, NavKind};
    pub use crate::source::{NavigationDataSource, NavigationState, NavigationTransport};
}
