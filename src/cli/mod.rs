//! CLI command implementations

pub mod definition;
pub mod list;
pub mod repl;
pub mod run;

pub use definition::{Cli, Commands};
