//! `echon chat` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::session::ChatSession;
use crate::ui::ConsoleUi;

#[derive(Args, Default)]
pub struct ChatArgs {
    /// Don't frame responses with divider lines
    #[arg(long)]
    no_divider: bool,
}

pub fn run(file: Option<PathBuf>, config: Config, args: ChatArgs) -> Result<()> {
    let storage = super::open_storage(file, &config)?;
    debug!("Using task file {}", storage.path().display());

    let ui = ConsoleUi::stdout().with_divider(config.chat.divider && !args.no_divider);
    let mut session = ChatSession::open(storage, ui, config.chat)?;

    let stdin = std::io::stdin();
    session.run(stdin.lock())?;
    Ok(())
}
