//! Configuration for breadcrumb resolution and navigation endpoints.
//!
//! Both structs have sensible defaults, builder-style setters, and
//! deserialize with per-field defaults so a host can embed them in its own
//! settings file.
//!
//! ```
//! use dashboard_navigator::config::{BreadcrumbConfig, NavigationEndpoints};
//! use dashboard_navigator::nav::NavKind;
//!
//! let config = BreadcrumbConfig::new().home_title("Overview").kind(NavKind::Horizontal);
//! assert_eq!(config.home_path, "/");
//! assert_eq!(config.home_title, "Overview");
//!
//! let endpoints = NavigationEndpoints::default();
//! assert_eq!(endpoints.for_kind(NavKind::Vertical), "/api/vertical-nav/data");
//! ```

use crate::nav::NavKind;
use serde::{Deserialize, Serialize};

/// How breadcrumb trails start and when they are hidden
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    /// Path of the fixed first segment
    pub home_path: String,
    /// Title of the fixed first segment
    pub home_title: String,
    /// Icon token of the fixed first segment
    pub home_icon: Option<String>,
    /// Route on which no breadcrumbs are shown at all
    pub home_route: String,
    /// Navigation tree used for matching
    pub kind: NavKind,
}

impl BreadcrumbConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path of the home segment
    pub fn home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = path.into();
        self
    }

    /// Set the title of the home segment
    pub fn home_title(mut self, title: impl Into<String>) -> Self {
        self.home_title = title.into();
        self
    }

    /// Set (or clear) the icon of the home segment
    pub fn home_icon(mut self, icon: Option<String>) -> Self {
        self.home_icon = icon;
        self
    }

    /// Set the route that suppresses breadcrumbs
    pub fn home_route(mut self, route: impl Into<String>) -> Self {
        self.home_route = route.into();
        self
    }

    /// Set which navigation tree to match against
    pub fn kind(mut self, kind: NavKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            home_path: "/".to_string(),
            home_title: "Dashboard".to_string(),
            home_icon: Some("home".to_string()),
            home_route: "/".to_string(),
            kind: NavKind::Vertical,
        }
    }
}

/// Endpoint serving each navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationEndpoints {
    pub vertical: String,
    pub horizontal: String,
}

impl NavigationEndpoints {
    /// Set the sidebar endpoint
    pub fn vertical(mut self, endpoint: impl Into<String>) -> Self {
        self.vertical = endpoint.into();
        self
    }

    /// Set the top bar endpoint
    pub fn horizontal(mut self, endpoint: impl Into<String>) -> Self {
        self.horizontal = endpoint.into();
        self
    }

    /// Endpoint for a navigation kind
    pub fn for_kind(&self, kind: NavKind) -> &str {
        match kind {
            NavKind::Vertical => &self.vertical,
            NavKind::Horizontal => &self.horizontal,
        }
    }
}

impl Default for NavigationEndpoints {
    fn default() -> Self {
        Self {
            vertical: "/api/vertical-nav/data".to_string(),
            horizontal: "/api/horizontal-nav/data".to_string(),
        }
    }
}
