//! `taskpal repl` command implementation

use anyhow::Result;
use clap::Args;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

use crate::command::messages;
use crate::session::{open_session, Config, Session};
use crate::task::TaskStore;

const PROMPT: &str = "> ";

#[derive(Args, Default)]
pub struct ReplArgs {
    /// Skip the greeting
    #[arg(short, long)]
    quiet: bool,
}

pub async fn run(file: Option<PathBuf>, args: ReplArgs) -> Result<()> {
    let config = Config::load()?;
    let mut session = open_session(file, &config)?;
    let interactive = std::io::stdin().is_terminal();

    if config.ui.show_greeting && !args.quiet {
        println!("{}", messages::greeting(config.ui.user_name.as_deref()));
    }

    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let exited = chat(&mut session, input, &mut stdout, interactive).await?;

    if exited {
        if interactive {
            tokio::time::sleep(config.ui.exit_delay()).await;
        }
    } else {
        info!("Input closed, saving tasks");
        session.save()?;
    }

    Ok(())
}

/// Feed lines from `input` to the session until `bye` or end of input.
///
/// Returns whether the session ended with `bye`.
pub async fn chat<S, R, W>(
    session: &mut Session<S>,
    input: R,
    output: &mut W,
    show_prompt: bool,
) -> Result<bool>
where
    S: TaskStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        if show_prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };

        let reply = session.handle(&line);
        writeln!(output, "{}", reply.text)?;

        if reply.exit {
            return Ok(true);
        }
    }
}
