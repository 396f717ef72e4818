//! Brute Force Login Protection CLI
//!
//! Manages the IP denials and 403 message kept in a site's `.htaccess`.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, ConfigAction};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command else {
        println!("{} Brute Force Login Protection", "bflp".green().bold());
        println!();
        println!("Run {} for available commands.", "bflp --help".cyan());
        return Ok(());
    };

    let mut ctx = Context::load(&cli.config, cli.dir.as_deref())?;
    execute_command(&mut ctx, command)
}

fn execute_command(ctx: &mut Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Status { json } => commands::run_status(ctx, json),
        Commands::List { json } => commands::run_list(ctx, json),
        Commands::Show => commands::run_show(ctx),
        Commands::Block { ip } => commands::run_block(ctx, &ip),
        Commands::Unblock { ip } => commands::run_unblock(ctx, &ip),
        Commands::Message { message, clear } => {
            commands::run_message(ctx, message.as_deref(), clear)
        }
        Commands::Disable => commands::run_disable(ctx),
        Commands::Enable => commands::run_enable(ctx),
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => commands::run_config_show(ctx, json),
            ConfigAction::Set {
                allowed_attempts,
                reset_time,
                htaccess_dir,
            } => commands::run_config_set(ctx, allowed_attempts, reset_time, htaccess_dir),
        },
    }
}
