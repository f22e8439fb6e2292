//! Task management module
//!
//! This module provides the task model and everything around it:
//! - Task variants (todo, deadline, event) and their rendering
//! - Date-time parsing for deadline and event times
//! - The ordered task list
//! - The line-oriented data file format and file-backed storage

pub mod datetime;
pub mod list;
pub mod model;
pub mod parser;
pub mod storage;

pub use datetime::{parse_date_time, DateTimeError};
pub use list::TaskList;
pub use model::{Moment, Task, TaskKind};
pub use parser::TaskFile;
pub use storage::{FileStore, TaskStore};
