//! Status command implementation

use bflp_blocks::list_markers_in_file;
use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the status command
pub fn run_status(ctx: &Context, json: bool) -> Result<()> {
    let htaccess = &ctx.htaccess;
    let requirements = htaccess.check_requirements();

    // Queries on an unreadable file would only repeat the probe failure.
    let (denied, message, regions) = if requirements.readable {
        (
            Some(htaccess.denied_ips()?),
            htaccess.message_403()?,
            list_markers_in_file(htaccess.path())?,
        )
    } else {
        (None, None, Vec::new())
    };

    if json {
        let output = serde_json::json!({
            "path": htaccess.path().as_str(),
            "requirements": requirements,
            "denied_count": denied.as_ref().map(Vec::len),
            "message_403": message,
            "regions": regions,
            "settings": ctx.settings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let flag = |ok: bool| if ok { "yes".green() } else { "no".red() };

    println!("{}", "Brute Force Login Protection".bold());
    println!();
    println!("  {:<14} {}", "File:".dimmed(), htaccess.path().canonical());
    println!("  {:<14} {}", "Found:".dimmed(), flag(requirements.found));
    println!("  {:<14} {}", "Readable:".dimmed(), flag(requirements.readable));
    println!("  {:<14} {}", "Writeable:".dimmed(), flag(requirements.writeable));
    println!();

    match denied {
        Some(denied) => println!("  {:<14} {}", "Denied IPs:".dimmed(), denied.len()),
        None => println!("  {:<14} {}", "Denied IPs:".dimmed(), "unknown".yellow()),
    }
    match message {
        Some(message) => println!("  {:<14} \"{}\"", "403 message:".dimmed(), message),
        None => println!("  {:<14} {}", "403 message:".dimmed(), "(server default)".dimmed()),
    }
    if !regions.is_empty() {
        println!("  {:<14} {}", "Regions:".dimmed(), regions.join(", "));
    }
    println!();

    println!("{}", "Settings".bold());
    println!();
    println!("  {:<18} {}", "Allowed attempts:".dimmed(), ctx.settings.allowed_attempts);
    println!("  {:<18} {} minutes", "Reset time:".dimmed(), ctx.settings.reset_time);
    println!("  {:<18} {}", "Settings file:".dimmed(), ctx.settings_path);

    if !requirements.is_satisfied() {
        println!();
        println!(
            "{} .htaccess must exist and be readable and writeable. Set its directory with {}.",
            "warning:".yellow().bold(),
            "bflp config set --htaccess-dir <DIR>".cyan()
        );
    }

    Ok(())
}
