//! In-memory stand-in for the dashboard's REST backend.
//!
//! - [`MockBackend`] serves canned responses per endpoint and plugs into a
//!   [`NavigationDataSource`](crate::source::NavigationDataSource) as its
//!   transport.
//! - [`TaskStore`] keeps the task list and implements list / add / update /
//!   delete with the same filtering and id assignment as the real API.
//! - [`ProjectList`] answers the project search.
//!
//! Everything here is gated behind the `mock` feature.

mod backend;
mod projects;
mod tasks;

pub use backend::MockBackend;
pub use projects::{Project, ProjectList};
pub use tasks::{NewTask, Priority, Task, TaskList, TaskQuery, TaskStatus, TaskStore, TaskUpdate};
