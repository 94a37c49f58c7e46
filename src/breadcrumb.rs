//! Breadcrumb trail construction
//!
//! A trail always starts with a fixed home segment (`"/"`, `"Dashboard"` by
//! default). The rest comes from the navigation tree when the current path
//! matches it, otherwise from the path itself:
//!
//! ```text
//! /apps/tasks       tree hit  → Dashboard / Apps / Tasks        (tree titles)
//! /apps/unknown     tree miss → Dashboard / Apps / Unknown      (from segments)
//! /tasks?status=x   query dropped before either step
//! /                 home route → no trail at all
//! ```
//!
//! [`BreadcrumbBuilder::build`] is a pure function of its inputs. When the
//! builder is given a [`NavigationDataSource`],
//! [`BreadcrumbBuilder::resolve`] reads the configured tree from it instead
//! of each caller fetching its own.

use crate::config::BreadcrumbConfig;
use crate::matching::{match_path, readable_title, split_path, strip_query};
pub use crate::nav::BreadcrumbSegment;
use crate::nav::NavItem;
use crate::source::{NavigationDataSource, NavigationState};
use crate::debug_log;
use std::sync::Arc;

/// What the builder knows about the navigation tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState<'a> {
    /// Not loaded yet (or still loading)
    Unloaded,
    /// Loaded; may be empty
    Loaded(&'a [NavItem]),
}

impl<'a> TreeState<'a> {
    /// Items to match against, if any
    fn items(self) -> Option<&'a [NavItem]> {
        match self {
            TreeState::Loaded(items) if !items.is_empty() => Some(items),
            _ => None,
        }
    }
}

impl<'a> From<&'a NavigationState> for TreeState<'a> {
    fn from(state: &'a NavigationState) -> Self {
        if state.loading {
            TreeState::Unloaded
        } else {
            TreeState::Loaded(&state.items)
        }
    }
}

/// Builds breadcrumb trails for the current route
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbBuilder {
    config: BreadcrumbConfig,
    source: Option<Arc<NavigationDataSource>>,
}

impl BreadcrumbBuilder {
    pub fn new(config: BreadcrumbConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// Resolve against trees held by `source`
    pub fn with_source(mut self, source: Arc<NavigationDataSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    /// The fixed first segment of every trail
    pub fn home_segment(&self) -> BreadcrumbSegment {
        BreadcrumbSegment::new(&self.config.home_path, &self.config.home_title)
            .with_icon(self.config.home_icon.clone())
    }

    /// Whether `current_path` is the route on which breadcrumbs are hidden
    pub fn is_home_route(&self, current_path: &str) -> bool {
        strip_query(current_path) == self.config.home_route
    }

    /// Build the trail for `current_path`.
    ///
    /// Returns an empty trail when `route_is_home` is set. Otherwise the
    /// home segment comes first, followed by the matched tree trail or, when
    /// the tree is unloaded, empty or has no match, one segment per path
    /// segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_navigator::breadcrumb::{BreadcrumbBuilder, TreeState};
    ///
    /// let builder = BreadcrumbBuilder::default();
    /// let trail = builder.build("/tasks/update-dependencies", TreeState::Unloaded, false);
    ///
    /// let titles: Vec<_> = trail.iter().map(|s| s.title.as_str()).collect();
    /// assert_eq!(titles, ["Dashboard", "Tasks", "Update Dependencies"]);
    /// assert_eq!(trail[2].path, "/tasks/update-dependencies");
    /// ```
    pub fn build(
        &self,
        current_path: &str,
        tree: TreeState<'_>,
        route_is_home: bool,
    ) -> Vec<BreadcrumbSegment> {
        if route_is_home {
            return Vec::new();
        }

        let mut trail = vec![self.home_segment()];
        let path = strip_query(current_path);

        if let Some(items) = tree.items() {
            if let Some(matched) = match_path(items, path) {
                trail.extend(matched);
                return trail;
            }
        }

        debug_log!("No navigation match for '{}', using path segments", path);
        trail.extend(segment_trail(path));
        trail
    }

    /// Build the trail for `current_path` using the injected data source.
    ///
    /// Without a source this behaves as if the tree were unloaded. The home
    /// route check uses the configured `home_route`.
    pub fn resolve(&self, current_path: &str) -> Vec<BreadcrumbSegment> {
        let route_is_home = self.is_home_route(current_path);
        match &self.source {
            Some(source) => source.with_state(self.config.kind, |state| {
                self.build(current_path, TreeState::from(state), route_is_home)
            }),
            None => self.build(current_path, TreeState::Unloaded, route_is_home),
        }
    }
}

/// One segment per non-empty path component, with accumulated paths
fn segment_trail(path: &str) -> Vec<BreadcrumbSegment> {
    let mut accumulated = String::new();
    split_path(path)
        .into_iter()
        .map(|segment| {
            accumulated.push('/');
            accumulated.push_str(segment);
            BreadcrumbSegment::new(accumulated.clone(), readable_title(segment))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apps_tree() -> Vec<NavItem> {
        vec![NavItem::new("Apps", "/apps").children(vec![NavItem::new("Tasks", "/apps/tasks")])]
    }

    fn paths(trail: &[BreadcrumbSegment]) -> Vec<&str> {
        trail.iter().map(|s| s.path.as_str()).collect()
    }

    #[test]
    fn test_home_route_is_empty() {
        let builder = BreadcrumbBuilder::default();
        let tree = apps_tree();
        assert!(builder.build("/", TreeState::Loaded(&tree), true).is_empty());
        assert!(builder.build("/", TreeState::Unloaded, true).is_empty());
    }

    #[test]
    fn test_root_path_not_home_is_just_home_segment() {
        let builder = BreadcrumbBuilder::default();
        let trail = builder.build("/", TreeState::Unloaded, false);
        assert_eq!(trail, vec![builder.home_segment()]);
    }

    #[test]
    fn test_empty_tree_falls_back() {
        let builder = BreadcrumbBuilder::default();
        let trail = builder.build("/apps/tasks", TreeState::Loaded(&[]), false);
        assert_eq!(paths(&trail), vec!["/", "/apps", "/apps/tasks"]);
        assert_eq!(trail[2].title, "Tasks");
    }

    #[test]
    fn test_loading_state_is_unloaded() {
        let tree = apps_tree();
        let state = NavigationState {
            items: tree,
            loading: true,
            error: None,
        };
        assert_eq!(TreeState::from(&state), TreeState::Unloaded);
    }

    #[test]
    fn test_segment_trail_skips_empty_segments() {
        let trail = segment_trail("//tasks///list/");
        assert_eq!(paths(&trail), vec!["/tasks", "/tasks/list"]);
    }

    #[test]
    fn test_is_home_route_ignores_query() {
        let builder = BreadcrumbBuilder::default();
        assert!(builder.is_home_route("/?tab=1"));
        assert!(!builder.is_home_route("/tasks"));
    }

    #[test]
    fn test_resolve_without_source_uses_segments() {
        let builder = BreadcrumbBuilder::default();
        let trail = builder.resolve("/project-info");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].title, "Project Info");
        assert!(builder.resolve("/").is_empty());
    }
}
