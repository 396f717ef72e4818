//! Settings display and update commands

use std::path::PathBuf;

use colored::Colorize;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Display the current settings
pub fn run_config_show(ctx: &Context, json: bool) -> Result<()> {
    let settings = &ctx.settings;

    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
        return Ok(());
    }

    println!("{}", "Settings".bold());
    println!();
    println!("  {:<18} {}", "Allowed attempts:".dimmed(), settings.allowed_attempts);
    println!("  {:<18} {} minutes", "Reset time:".dimmed(), settings.reset_time);
    println!("  {:<18} {}", ".htaccess dir:".dimmed(), settings.htaccess_dir.display());
    if settings.message_403.is_empty() {
        println!("  {:<18} {}", "403 message:".dimmed(), "(server default)".dimmed());
    } else {
        println!("  {:<18} \"{}\"", "403 message:".dimmed(), settings.message_403);
    }
    println!();
    println!("  {:<18} {}", "Stored in:".dimmed(), ctx.settings_path);

    Ok(())
}

/// Change settings and save them
pub fn run_config_set(
    ctx: &mut Context,
    allowed_attempts: Option<u32>,
    reset_time: Option<u32>,
    htaccess_dir: Option<PathBuf>,
) -> Result<()> {
    if allowed_attempts.is_none() && reset_time.is_none() && htaccess_dir.is_none() {
        return Err(CliError::user(
            "Nothing to change. Pass --allowed-attempts, --reset-time or --htaccess-dir.",
        ));
    }

    if let Some(value) = allowed_attempts {
        ctx.settings.allowed_attempts = value;
    }
    if let Some(value) = reset_time {
        ctx.settings.reset_time = value;
    }
    if let Some(dir) = htaccess_dir {
        ctx.settings.htaccess_dir = dir;
    }

    ctx.save_settings()?;
    println!("{} settings in {}", "Saved".green().bold(), ctx.settings_path);
    Ok(())
}
