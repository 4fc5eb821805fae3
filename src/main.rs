use clap::Parser;
use stem_chatbot::cli::Cli;
use stem_chatbot::run;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
