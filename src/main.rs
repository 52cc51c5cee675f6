//! Echon - a chatbot that keeps your todo list

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use echon::cli::{self, Cli, Commands};
use echon::config::Config;

fn main() -> Result<()> {
    if std::env::var("ECHON_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("echon=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Completions don't need config or task data
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "echon", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;

    match cli.command {
        Some(Commands::Run(args)) => cli::run::run(cli.file, config, args),
        Some(Commands::Chat(args)) => cli::chat::run(cli.file, config, args),
        None => cli::chat::run(cli.file, config, Default::default()),
        Some(Commands::Completion { .. }) => unreachable!(),
    }
}
