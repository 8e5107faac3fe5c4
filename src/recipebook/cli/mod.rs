mod args;
mod commands;
mod print;

use clap::Parser;
use recipebook::error::Result;
use recipebook::logging;

use args::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // One cooperative thread: remote calls suspend, nothing runs in parallel.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(commands::dispatch(cli))
}
