//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::list::ListArgs;
use super::repl::ReplArgs;
use super::run::RunArgs;

#[derive(Parser)]
#[command(name = "taskpal")]
#[command(about = "Chat-style personal task tracker for the terminal")]
#[command(version)]
pub struct Cli {
    /// Task data file (overrides `storage.data_file` in config.toml)
    #[arg(long, global = true, env = "TASKPAL_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat line by line on stdin/stdout instead of the full-screen UI
    Repl(ReplArgs),

    /// Run one chat command against the stored tasks
    Run(RunArgs),

    /// Print the stored tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["taskpal"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_run_collects_words() {
        let cli =
            Cli::try_parse_from(["taskpal", "--file", "/tmp/t.txt", "run", "delete", "-1"])
                .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/t.txt")));
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.line(), "delete -1"),
            _ => panic!("expected run"),
        }
    }
}
