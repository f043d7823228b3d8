use anyhow::Result;
use clap::Parser;

use tessera_cli::cli::{Cli, Commands};
use tessera_cli::{commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level, cli.verbose);

    let output = match cli.command {
        Commands::Render(args) => commands::render::execute(args)?,
        Commands::Config(args) => commands::config::execute(args)?,
    };
    println!("{output}");
    Ok(())
}
