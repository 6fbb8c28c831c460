use clap::Parser;
use tracing_subscriber::EnvFilter;

use plasmid_annotator::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("plasmid_annotator=debug,info")
    } else {
        EnvFilter::new("plasmid_annotator=info,warn")
    };

    // Logs go to stderr, stdout carries the summary
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::annotate::run(cli.annotate, cli.format, cli.verbose)
}
