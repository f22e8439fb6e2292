//! Taskpal library - task model, command interpreter and chat shells

pub mod cli;
pub mod command;
pub mod session;
pub mod task;
pub mod tui;
