use anyhow::{Context, Result};
use clap::Parser;

use larder::cli::handlers::{self, CommandContext};
use larder::cli::{Cli, Commands};
use larder::config::LarderConfig;
use larder::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init => handlers::handle_init(),
        Commands::Food { command } => {
            let mut ctx = load_context()?;
            handlers::handle_food(&mut ctx, command)
        }
        Commands::Recipe { command } => {
            let mut ctx = load_context()?;
            handlers::handle_recipe(&mut ctx, command)
        }
    }
}

fn load_context() -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (config, root) = LarderConfig::load(&cwd).context("Failed to load larder config")?;
    Ok(CommandContext::new(config, root))
}
