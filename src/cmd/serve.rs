use super::CommonArgs;
use clap::Args;
use signsense::config::ServerConfig;
use signsense::error::SsResult;
use signsense::{server, Classifier};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub server: ServerConfig,
}

pub fn run(args: ServeArgs, classifier: Classifier) -> SsResult<()> {
    info!(
        "🚀 Starting SignSense (margin={}, pinch={})",
        classifier.config().extension_margin,
        classifier.config().pinch_threshold
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(&args.server, classifier))
}
