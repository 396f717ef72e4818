//! Error types for bflp-htaccess

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Blocks(#[from] bflp_blocks::Error),

    #[error(transparent)]
    Fs(#[from] bflp_fs::Error),

    #[error("'{input}' is not a valid IPv4 or IPv6 address")]
    InvalidIp { input: String },

    #[error("403 message must be a single line")]
    InvalidMessage,

    #[error("{field} must be at least {min}, got {value}")]
    InvalidSetting {
        field: &'static str,
        min: u32,
        value: u32,
    },
}
