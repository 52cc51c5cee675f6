//! Command line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::chat::ChatArgs;
use super::run::RunArgs;

#[derive(Parser)]
#[command(name = "echon", version, about = "A chatbot that keeps your todo list")]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, global = true, env = "ECHON_TASKS_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat with Echon interactively (the default)
    Chat(ChatArgs),

    /// Run a single line of input, e.g. `echon run todo read book`
    Run(RunArgs),

    /// Print shell completions
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
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_chat() {
        let cli = Cli::try_parse_from(["echon"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_run_collects_words() {
        let cli =
            Cli::try_parse_from(["echon", "--file", "t.json", "run", "todo", "read", "book"])
                .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("t.json")));
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.line(), "todo read book"),
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn test_run_accepts_hyphenated_words() {
        let cli = Cli::try_parse_from(["echon", "run", "echo", "-", "hi"]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.line(), "echo - hi"),
            _ => panic!("expected run subcommand"),
        }
    }
}
