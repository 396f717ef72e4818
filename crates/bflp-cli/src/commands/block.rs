//! Block and unblock commands

use bflp_htaccess::WriteOutcome;
use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the block command
pub fn run_block(ctx: &Context, ip: &str) -> Result<()> {
    match ctx.htaccess.deny_ip(ip)? {
        WriteOutcome::Written => println!("{} {}", "Blocked".green().bold(), ip),
        WriteOutcome::Unchanged => println!("{} is already blocked", ip.cyan()),
    }
    Ok(())
}

/// Run the unblock command
pub fn run_unblock(ctx: &Context, ip: &str) -> Result<()> {
    match ctx.htaccess.undeny_ip(ip)? {
        WriteOutcome::Written => println!("{} {}", "Unblocked".green().bold(), ip),
        WriteOutcome::Unchanged => println!("{} was not blocked", ip.cyan()),
    }
    Ok(())
}
