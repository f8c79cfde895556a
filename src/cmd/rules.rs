use super::CommonArgs;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct RulesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
