use super::CommonArgs;
use clap::Args;
use signsense::api::{handle_request, parse_body};
use signsense::error::SsResult;
use signsense::Classifier;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Request body (`{"landmarks": [...]}`); stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

pub fn run(args: ClassifyArgs, classifier: &Classifier) -> SsResult<()> {
    let raw = match &args.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let response = handle_request(classifier, &parse_body(&raw));
    let out = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", out);
    Ok(())
}
