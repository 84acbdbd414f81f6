use clap::Parser;

use vision_processor::cli::Args;
use vision_processor::pipeline::{self, RunOutcome};

#[tokio::main]
async fn main() {
    // Logs go to stderr so the artifact path on stdout stays scriptable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match args.into_run_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("vision_processor: {e}");
            std::process::exit(1);
        }
    };

    match pipeline::run(&config).await {
        Ok(RunOutcome::Written { path, .. }) => {
            println!("Saved results to {}", path.display());
        }
        Ok(RunOutcome::NoFrames { searched }) => {
            println!("No frames found in {}; no report written.", searched.display());
        }
        Err(e) => {
            eprintln!("vision_processor: {e}");
            std::process::exit(1);
        }
    }
}
