//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Brute Force Login Protection - manage IP denials in .htaccess
#[derive(Parser, Debug)]
#[command(name = "bflp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (.toml, .json, .yaml)
    #[arg(short, long, global = true, env = "BFLP_CONFIG", default_value = "bflp.toml")]
    pub config: PathBuf,

    /// Directory holding .htaccess, overriding the settings file
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show whether .htaccess is usable and what it currently denies
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List denied IP addresses
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the managed region exactly as stored
    Show,

    /// Deny an IP address
    ///
    /// Examples:
    ///   bflp block 203.0.113.7
    ///   bflp block 2001:db8::1
    Block {
        /// IPv4 or IPv6 address
        ip: String,
    },

    /// Remove the denial for an IP address
    Unblock {
        /// IPv4 or IPv6 address
        ip: String,
    },

    /// Show, set or clear the message served with 403 responses
    ///
    /// Examples:
    ///   bflp message                          # print current message
    ///   bflp message "Too many failed logins" # set it
    ///   bflp message --clear                  # back to Apache's default
    Message {
        /// New message
        message: Option<String>,

        /// Remove the message
        #[arg(long, conflicts_with = "message")]
        clear: bool,
    },

    /// Comment out every managed line (plugin deactivation)
    Disable,

    /// Restore commented managed lines (plugin activation)
    ///
    /// Only commented lines are kept. Running this on a site that is already
    /// enabled removes every active deny rule and the 403 message.
    Enable,

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the current settings
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Change one or more settings
    Set {
        /// Failed logins allowed before an address is denied
        #[arg(long)]
        allowed_attempts: Option<u32>,

        /// Minutes before the failed-login count resets
        #[arg(long)]
        reset_time: Option<u32>,

        /// Directory holding .htaccess
        #[arg(long)]
        htaccess_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_parses() {
        let cli = Cli::try_parse_from(["bflp", "block", "203.0.113.7"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Block {
                ip: "203.0.113.7".into()
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bflp", "list", "--dir", "/var/www", "-c", "site.yaml"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/var/www")));
        assert_eq!(cli.config, PathBuf::from("site.yaml"));
    }

    #[test]
    fn test_message_clear_conflicts_with_text() {
        assert!(Cli::try_parse_from(["bflp", "message", "hi", "--clear"]).is_err());
    }

    #[test]
    fn test_enable_help_warns_about_active_rules() {
        use clap::CommandFactory;

        let cmd = Cli::command();
        let enable = cmd.find_subcommand("enable").unwrap();
        let help = enable.get_long_about().unwrap().to_string();
        assert!(help.contains("removes every active deny rule"));
    }

    #[test]
    fn test_config_set() {
        let cli = Cli::try_parse_from(["bflp", "config", "set", "--allowed-attempts", "5"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Set {
                    allowed_attempts: Some(5),
                    reset_time: None,
                    htaccess_dir: None,
                }
            })
        );
    }
}
