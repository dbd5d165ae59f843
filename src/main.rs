use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("livdet2013=debug,info")
    } else {
        EnvFilter::new("livdet2013=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let catalog = cli.catalog();

    match cli.command {
        cli::Commands::Dumplist(args) => {
            cli::dumplist::run(args, &catalog, cli.format, cli.verbose)?;
        }
        cli::Commands::Checkfiles(args) => {
            cli::checkfiles::run(args, &catalog, cli.format, cli.verbose)?;
        }
        cli::Commands::Info => {
            cli::info::run(&catalog, cli.format)?;
        }
    }

    Ok(())
}
