//! 403 message command

use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the message command.
///
/// With no arguments prints the message found in `.htaccess`. Setting or
/// clearing updates both `.htaccess` and the settings file.
pub fn run_message(ctx: &mut Context, message: Option<&str>, clear: bool) -> Result<()> {
    let new_message = match (message, clear) {
        (_, true) => "",
        (Some(message), false) => message,
        (None, false) => {
            match ctx.htaccess.message_403()? {
                Some(current) => println!("{current}"),
                None => println!("{}", "(server default)".dimmed()),
            }
            return Ok(());
        }
    };

    ctx.htaccess.edit_403_message(new_message)?;
    ctx.settings.message_403 = new_message.to_string();
    ctx.save_settings()?;

    if new_message.is_empty() {
        println!("{} 403 message", "Cleared".green().bold());
    } else {
        println!("{} 403 message to \"{}\"", "Set".green().bold(), new_message);
    }
    Ok(())
}
