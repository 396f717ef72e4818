//! Enable and disable commands

use bflp_htaccess::WriteOutcome;
use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the disable command
pub fn run_disable(ctx: &Context) -> Result<()> {
    match ctx.htaccess.comment_lines()? {
        WriteOutcome::Written => println!("{} managed rules (commented out)", "Disabled".yellow().bold()),
        WriteOutcome::Unchanged => println!("Nothing to disable"),
    }
    Ok(())
}

/// Run the enable command
pub fn run_enable(ctx: &Context) -> Result<()> {
    match ctx.htaccess.uncomment_lines()? {
        WriteOutcome::Written => println!("{} managed rules", "Enabled".green().bold()),
        WriteOutcome::Unchanged => println!("Nothing to enable"),
    }
    Ok(())
}
