// src/bin/cli.rs
use clap::Parser;
use trail_scrape::cli::{self, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    cli::init_logging(args.verbose);
    cli::run(args).await?;
    Ok(())
}
