pub mod catalog;
pub mod cli;
pub mod commands;
pub mod diagnostics;
pub mod dice;
pub mod matcher;
pub mod normalize;
pub mod report;
pub mod responder;
pub mod scan;
pub mod scorer;

use anyhow::Result;
use cli::{Cli, Commands};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Reply(args) => commands::reply(&args),
        Commands::Chat(args) => commands::chat(&args),
        Commands::Doctor(args) => commands::doctor(&args),
    }
}
