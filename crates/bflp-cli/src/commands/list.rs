//! Commands that print the managed region

use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &Context, json: bool) -> Result<()> {
    let denied = ctx.htaccess.denied_ips()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&denied)?);
        return Ok(());
    }

    println!("{}", "Blocked IPs".bold());
    println!();

    if denied.is_empty() {
        println!("  {} (use {} to add one)", "None".dimmed(), "bflp block <IP>".cyan());
        return Ok(());
    }

    println!("  {:<4} {}", "#".dimmed(), "Address".dimmed());
    for (i, ip) in denied.iter().enumerate() {
        println!("  {:<4} {}", i + 1, ip.bold());
    }

    Ok(())
}

/// Run the show command
pub fn run_show(ctx: &Context) -> Result<()> {
    for line in ctx.htaccess.raw_lines()? {
        println!("{line}");
    }
    Ok(())
}
