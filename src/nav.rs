//! Navigation tree data model
//!
//! A navigation tree is the menu definition shared by the sidebar, the top
//! bar and breadcrumb resolution. It is plain data: a forest of [`NavItem`]
//! nodes, each exclusively owning its children.
//!
//! The JSON shape matches what the navigation endpoints serve:
//!
//! ```json
//! [
//!   { "title": "Apps", "path": "/apps", "icon": "apps", "children": [
//!     { "title": "Tasks", "path": "/apps/tasks" }
//!   ]}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which navigation menu a tree belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKind {
    /// Sidebar menu
    #[default]
    Vertical,
    /// Top bar menu
    Horizontal,
}

impl NavKind {
    /// Lowercase name, as used in endpoint paths
    pub fn as_str(self) -> &'static str {
        match self {
            NavKind::Vertical => "vertical",
            NavKind::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for NavKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the navigation tree.
///
/// Nodes without a `path` are group headers. They never appear in a
/// breadcrumb trail and the matcher does not descend into them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// Route path; absent for group headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Ordered child items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavItem>>,
    /// Opaque icon token for the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NavItem {
    /// Create a leaf item with a title and path
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: Some(path.into()),
            children: None,
            icon: None,
        }
    }

    /// Create a group header (no path)
    pub fn group(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: None,
            children: None,
            icon: None,
        }
    }

    /// Set the child items
    pub fn children(mut self, children: Vec<NavItem>) -> Self {
        self.children = Some(children);
        self
    }

    /// Set the icon token
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The route path, treating an empty string the same as no path.
    pub fn route_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }

    /// Child items, empty for leaves
    pub fn child_items(&self) -> &[NavItem] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether this node carries a `children` list (even an empty one)
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }
}

/// One step of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreadcrumbSegment {
    /// Route the segment links to
    pub path: String,
    /// Display title
    pub title: String,
    /// Icon token; only the home segment carries one by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl BreadcrumbSegment {
    /// Create a segment without an icon
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            icon: None,
        }
    }

    /// Attach an icon token
    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }
}

/// Find the first item whose path equals `path`, searching depth-first.
///
/// Unlike [`match_path`](crate::matching::match_path) this descends into
/// every child list, group headers included, without any prefix check.
pub fn find_by_path<'a>(items: &'a [NavItem], path: &str) -> Option<&'a NavItem> {
    for item in items {
        if item.route_path() == Some(path) {
            return Some(item);
        }
        if let Some(found) = find_by_path(item.child_items(), path) {
            return Some(found);
        }
    }
    None
}

/// Total number of nodes in the forest
pub fn count(items: &[NavItem]) -> usize {
    items.iter().map(|item| 1 + count(item.child_items())).sum()
}

/// Number of levels in the forest (0 for an empty forest)
pub fn depth(items: &[NavItem]) -> usize {
    items
        .iter()
        .map(|item| 1 + depth(item.child_items()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<NavItem> {
        vec![
            NavItem::new("Dashboard", "/dashboard").icon("home"),
            NavItem::group("Apps").children(vec![
                NavItem::new("Tasks", "/tasks"),
                NavItem::new("Project Info", "/project-info"),
            ]),
        ]
    }

    #[test]
    fn test_find_by_path_descends_into_groups() {
        let items = tree();
        let found = find_by_path(&items, "/project-info").unwrap();
        assert_eq!(found.title, "Project Info");
        assert!(find_by_path(&items, "/missing").is_none());
    }

    #[test]
    fn test_empty_path_is_no_path() {
        let item = NavItem {
            title: "Blank".to_string(),
            path: Some(String::new()),
            children: None,
            icon: None,
        };
        assert_eq!(item.route_path(), None);
        assert!(find_by_path(&[item], "").is_none());
    }

    #[test]
    fn test_count_and_depth() {
        let items = tree();
        assert_eq!(count(&items), 4);
        assert_eq!(depth(&items), 2);
        assert_eq!(depth(&[]), 0);
    }

    #[test]
    fn test_deserialize_json_shape() {
        let json = r#"[
            {"title": "Apps", "path": "/apps", "icon": "apps", "badge": 3,
             "children": [{"title": "Tasks", "path": "/apps/tasks"}]},
            {"title": "Settings"}
        ]"#;
        let items: Vec<NavItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].icon.as_deref(), Some("apps"));
        assert_eq!(items[0].child_items()[0].path.as_deref(), Some("/apps/tasks"));
        assert!(items[1].path.is_none());
        assert!(!items[1].has_children());
    }

    #[test]
    fn test_segment_serde_omits_missing_icon() {
        let plain = BreadcrumbSegment::new("/tasks", "Tasks");
        assert_eq!(
            serde_json::to_string(&plain).unwrap(),
            r#"{"path":"/tasks","title":"Tasks"}"#
        );

        let home = BreadcrumbSegment::new("/", "Dashboard").with_icon(Some("home".into()));
        let back: BreadcrumbSegment =
            serde_json::from_str(&serde_json::to_string(&home).unwrap()).unwrap();
        assert_eq!(back, home);
    }

    #[test]
    fn test_nav_kind_serde() {
        assert_eq!(serde_json::to_string(&NavKind::Horizontal).unwrap(), "\"horizontal\"");
        assert_eq!(NavKind::default(), NavKind::Vertical);
        assert_eq!(NavKind::Vertical.to_string(), "vertical");
    }
}
