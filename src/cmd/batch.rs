use super::CommonArgs;
use crate::reports;
use clap::Args;
use signsense::batch;
use signsense::error::SsResult;
use signsense::Classifier;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// JSON Lines file, one request body per line
    #[arg(short, long)]
    pub input: PathBuf,

    /// CSV report path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BatchArgs, classifier: &Classifier) -> SsResult<()> {
    let reader = BufReader::new(File::open(&args.input)?);
    let records = batch::run(classifier, reader)?;

    match &args.output {
        Some(path) => {
            batch::write_csv(&records, File::create(path)?)?;
            info!("📄 Wrote {} rows to {}", records.len(), path.display());
        }
        None => batch::write_csv(&records, io::stdout().lock())?,
    }

    reports::print_summary(&batch::summarize(&records), records.len());
    Ok(())
}
