//! Format-agnostic settings loading and saving

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Loads and saves settings files, picking the format from the extension.
///
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default)]
pub struct ConfigStore {
    robustness: io::RobustnessConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn detect(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_robustness(robustness: io::RobustnessConfig) -> Self {
        Self { robustness }
    }

    /// Load settings from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = Format::detect(path)?;
        let content = io::read_text(path)?;
        parse(path, format, &content)
    }

    /// Load settings, falling back to `T::default()` when the file is absent.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &NormalizedPath) -> Result<T> {
        let format = Format::detect(path)?;
        match io::read_text_if_exists(path)? {
            Some(content) => parse(path, format, &content),
            None => {
                tracing::debug!(path = %path, "settings file absent, using defaults");
                Ok(T::default())
            }
        }
    }

    /// Save settings to a file with an atomic write.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = Format::detect(path)?;
        let serialize_error = |message: String| Error::ConfigSerialize {
            path: path.to_native(),
            format: format.name().into(),
            message,
        };

        let content = match format {
            Format::Toml => toml::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?,
            Format::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            Format::Yaml => serde_yaml::to_string(value).map_err(|e| serialize_error(e.to_string()))?,
        };

        io::write_atomic(path, content.as_bytes(), self.robustness)
    }
}

fn parse<T: DeserializeOwned>(path: &NormalizedPath, format: Format, content: &str) -> Result<T> {
    let parse_error = |message: String| Error::ConfigParse {
        path: path.to_native(),
        format: format.name().into(),
        message,
    };

    match format {
        Format::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}
