use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use signsense::config::ClassifierConfig;
use signsense::error::SsResult;
use signsense::Classifier;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rule-based hand sign classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve(cmd::serve::ServeArgs),
    /// Classify one request body from a file or stdin
    Classify(cmd::classify::ClassifyArgs),
    /// Classify JSON Lines of request bodies into a CSV report
    Batch(cmd::batch::BatchArgs),
    /// Print the rule table
    Rules(cmd::rules::RulesArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// File config (if any) as the base, explicit CLI flags on top.
fn resolve_config(
    common: &cmd::CommonArgs,
    sub_matches: &ArgMatches,
) -> SsResult<ClassifierConfig> {
    let config = match &common.config {
        Some(path) => {
            info!("⚖️  Loading classifier config from: {}", path.display());
            let mut file_config = ClassifierConfig::load_from_file(path)?;
            file_config.merge_from_cli(&common.classifier, sub_matches);
            file_config
        }
        None => common.classifier.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    // 1. Parse raw matches (to distinguish user input from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    // 2. Subcommand matches hold the classifier flags
    let (name, common) = match &cli.command {
        Commands::Serve(args) => ("serve", &args.common),
        Commands::Classify(args) => ("classify", &args.common),
        Commands::Batch(args) => ("batch", &args.common),
        Commands::Rules(args) => ("rules", &args.common),
    };
    let Some(sub_matches) = matches.subcommand_matches(name) else {
        error!("missing matches for subcommand '{}'", name);
        process::exit(2);
    };

    // 3. Build the classifier once; every command borrows it
    let config = resolve_config(common, sub_matches).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });
    let classifier = Classifier::new(config);

    // 4. Execute
    let result = match cli.command {
        Commands::Serve(args) => cmd::serve::run(args, classifier),
        Commands::Classify(args) => cmd::classify::run(args, &classifier),
        Commands::Batch(args) => cmd::batch::run(args, &classifier),
        Commands::Rules(_) => {
            reports::print_rule_table(classifier.config());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
