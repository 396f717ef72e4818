//! Command implementations for bflp-cli

pub mod block;
pub mod config;
pub mod list;
pub mod message;
pub mod status;
pub mod toggle;

pub use block::{run_block, run_unblock};
pub use config::{run_config_set, run_config_show};
pub use list::{run_list, run_show};
pub use message::run_message;
pub use status::run_status;
pub use toggle::{run_disable, run_enable};
