//! Path-to-trail matching over a navigation tree
//!
//! [`match_path`] walks the tree depth-first looking for an item whose path
//! equals the target exactly. Items whose path is a string prefix of the
//! target are tentatively pushed onto the ancestor chain while their children
//! are searched, and popped again if nothing below them matches.
//!
//! # Rules
//!
//! - Comparison is byte-for-byte: case-sensitive, no trailing-slash
//!   normalization (`"/a"` and `"/a/"` are different paths).
//! - Siblings are tried in order; the first exact match wins.
//! - Items without a path (group headers) are never matched and never
//!   descended into. Their children are unreachable for this matcher.
//! - A prefix match alone produces nothing: only a chain that ends in an
//!   exact match is returned.
//!
//! The remaining helpers ([`strip_query`], [`split_path`],
//! [`readable_title`]) serve the segment-splitting fallback in
//! [`breadcrumb`](crate::breadcrumb).

use crate::nav::{BreadcrumbSegment, NavItem};
use crate::trace_log;

/// Outcome of matching a path: the root-to-leaf trail, or `None` on a miss.
///
/// A miss is never represented as an empty trail.
pub type MatchResult = Option<Vec<BreadcrumbSegment>>;

/// Match `target` against the navigation tree
///
/// # Examples
///
/// ```
/// use dashboard_navigator::matching::match_path;
/// use dashboard_navigator::nav::NavItem;
///
/// let tree = vec![NavItem::new("Apps", "/apps")
///     .children(vec![NavItem::new("Tasks", "/apps/tasks")])];
///
/// let trail = match_path(&tree, "/apps/tasks").unwrap();
/// let titles: Vec<_> = trail.iter().map(|s| s.title.as_str()).collect();
/// assert_eq!(titles, ["Apps", "Tasks"]);
///
/// assert!(match_path(&tree, "/apps/unknown").is_none());
/// ```
pub fn match_path(items: &[NavItem], target: &str) -> MatchResult {
    let mut chain = Vec::new();
    if descend(items, target, &mut chain) {
        Some(chain)
    } else {
        trace_log!("No navigation item matches '{}'", target);
        None
    }
}

/// Search one level. On success `chain` holds the full trail; on failure it
/// is left exactly as it was on entry.
fn descend(items: &[NavItem], target: &str, chain: &mut Vec<BreadcrumbSegment>) -> bool {
    for item in items {
        let Some(path) = item.route_path() else {
            continue;
        };

        if path == target {
            chain.push(BreadcrumbSegment::new(path, &item.title));
            return true;
        }

        if item.has_children() && target.starts_with(path) {
            trace_log!("Descending into '{}' for '{}'", path, target);
            chain.push(BreadcrumbSegment::new(path, &item.title));
            if descend(item.child_items(), target, chain) {
                return true;
            }
            chain.pop();
        }
    }
    false
}

/// Drop any query string (everything from the first `?`)
///
/// ```
/// use dashboard_navigator::matching::strip_query;
///
/// assert_eq!(strip_query("/tasks?status=open"), "/tasks");
/// assert_eq!(strip_query("/tasks"), "/tasks");
/// ```
pub fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(before, _)| before)
}

/// Split a path into its non-empty segments
///
/// ```
/// use dashboard_navigator::matching::split_path;
///
/// assert_eq!(split_path("/apps//tasks/"), vec!["apps", "tasks"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Turn a path segment into a display title.
///
/// Words are separated by `-`; each word gets its first character
/// upper-cased and the words are joined with spaces. The empty segment is
/// the root and reads `"Home"`.
///
/// ```
/// use dashboard_navigator::matching::readable_title;
///
/// assert_eq!(readable_title("update-dependencies"), "Update Dependencies");
/// assert_eq!(readable_title(""), "Home");
/// ```
pub fn readable_title(segment: &str) -> String {
    if segment.is_empty() {
        return "Home".to_string();
    }

    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
