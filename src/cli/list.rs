//! `taskpal list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::command::messages;
use crate::session::{open_store, Config};
use crate::task::{Task, TaskKind, TaskList, TaskStore};

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Only show tasks that are not done yet
    #[arg(long)]
    pending: bool,
}

#[derive(Debug, Serialize)]
struct TaskJson<'a> {
    number: usize,
    kind: &'static str,
    description: &'a str,
    done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,
}

impl<'a> TaskJson<'a> {
    fn new(number: usize, task: &'a Task) -> Self {
        let (by, from, to) = match task.kind() {
            TaskKind::Todo => (None, None, None),
            TaskKind::Deadline { by } => (Some(by.raw()), None, None),
            TaskKind::Event { from, to } => (None, Some(from.raw()), Some(to.raw())),
        };
        Self {
            number,
            kind: task.kind().label(),
            description: task.description(),
            done: task.is_done(),
            by,
            from,
            to,
        }
    }
}

fn selected(tasks: &TaskList, pending: bool) -> Vec<(usize, &Task)> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| !pending || !task.is_done())
        .collect()
}

fn render_json(tasks: &[(usize, &Task)]) -> Result<String> {
    let rows: Vec<TaskJson> = tasks
        .iter()
        .map(|(index, task)| TaskJson::new(index + 1, task))
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub async fn run(file: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let config = Config::load()?;
    let store = open_store(file, &config)?;
    let tasks = TaskList::from(store.load()?);
    let rows = selected(&tasks, args.pending);

    if args.json {
        println!("{}", render_json(&rows)?);
        return Ok(());
    }

    if args.pending {
        if rows.is_empty() {
            println!("Nothing left to do.");
        } else {
            println!("{}", messages::find_results("", &rows));
        }
        return Ok(());
    }

    println!("{}", messages::task_listing(&tasks));
    Ok(())
}
