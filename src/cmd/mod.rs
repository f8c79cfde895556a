use clap::Args;
use signsense::config::ClassifierConfig;
use std::path::PathBuf;

pub mod batch;
pub mod classify;
pub mod rules;
pub mod serve;

/// Classifier options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// JSON file with classifier tunables; explicit flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub classifier: ClassifierConfig,
}
