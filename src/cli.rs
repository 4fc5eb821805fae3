use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::scorer::ScorerKind;

#[derive(Parser)]
#[command(name = "stem-chatbot")]
#[command(about = "Intent-matching chatbot for the STEM Inspires site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a single utterance and exit.
    Reply(ReplyArgs),
    /// Interactive chat session on stdin/stdout.
    Chat(ChatArgs),
    /// Validate a catalog and report data-quality findings.
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file (JSON or YAML) or directory of intent definition files.
    /// Uses the builtin STEM Inspires catalog when omitted.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Override the catalog's match threshold.
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Override the catalog's similarity scorer.
    #[arg(long, value_enum)]
    pub scorer: Option<ScorerKind>,
}

#[derive(Args, Debug)]
pub struct ReplyArgs {
    /// The utterance to answer.
    pub input: String,
    #[command(flatten)]
    pub catalog: CatalogArgs,
    /// Seed the response picker for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the ranked candidate intents before the reply.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
    /// Seed the response picker for reproducible sessions.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the matched intent and score with each reply.
    #[arg(long)]
    pub show_score: bool,
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,
    /// Write the JSON report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Print every warning instead of the first few.
    #[arg(long)]
    pub verbose: bool,
}
