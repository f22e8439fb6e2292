//! `taskpal run` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::session::{open_session, Config};

#[derive(Args)]
pub struct RunArgs {
    /// Command line to interpret, e.g. `todo read book`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

impl RunArgs {
    pub fn line(&self) -> String {
        self.words.join(" ")
    }
}

pub async fn run(file: Option<PathBuf>, args: RunArgs) -> Result<()> {
    let config = Config::load()?;
    // One-shot runs never see a `bye`, so changes are written straight away.
    let mut session = open_session(file, &config)?.with_autosave(true);

    let reply = session.handle(&args.line());
    if reply.is_error {
        bail!(reply.text);
    }

    println!("{}", reply.text);
    Ok(())
}
