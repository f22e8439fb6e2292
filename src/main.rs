//! Taskpal - chat-style personal task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io::IsTerminal;
use std::sync::Mutex;
use taskpal::cli::{self, repl::ReplArgs, Cli, Commands};
use taskpal::session::get_app_dir;
use taskpal::tui;

const DEBUG_ENV: &str = "TASKPAL_DEBUG";
const LOG_FILE: &str = "taskpal.log";

/// With `TASKPAL_DEBUG` set, log to stderr, or to `taskpal.log` in the app
/// directory while the full-screen UI owns the terminal.
fn init_logging(to_file: bool) -> Result<()> {
    if std::env::var(DEBUG_ENV).is_err() {
        return Ok(());
    }

    let builder = tracing_subscriber::fmt().with_env_filter("taskpal=debug");
    if to_file {
        let path = get_app_dir()?.join(LOG_FILE);
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let tui_mode = cli.command.is_none() && std::io::stdout().is_terminal();
    init_logging(tui_mode)?;

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "taskpal", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Repl(args)) => cli::repl::run(cli.file, args).await,
        Some(Commands::Run(args)) => cli::run::run(cli.file, args).await,
        Some(Commands::List(args)) => cli::list::run(cli.file, args).await,
        None if tui_mode => tui::run(cli.file).await,
        // Piped output gets the line-based chat
        None => cli::repl::run(cli.file, ReplArgs::default()).await,
    }
}
