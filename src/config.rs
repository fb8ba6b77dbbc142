use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::error::ConfigError;
use crate::state::{ascii_whitespace, no_whitespace, unicode_whitespace, Whitespace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhitespacePolicy {
    #[default]
    Unicode,
    Ascii,
    Disabled,
}

impl WhitespacePolicy {
    pub fn skipper(self) -> Whitespace {
        match self {
            WhitespacePolicy::Unicode => unicode_whitespace,
            WhitespacePolicy::Ascii => ascii_whitespace,
            WhitespacePolicy::Disabled => no_whitespace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    #[default]
    Off,
    /// Emit one `tracing` TRACE event per combinator invocation.
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub whitespace: WhitespacePolicy,

    #[serde(default)]
    pub trace: TraceMode,
}

impl RunConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_json("{}").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.whitespace, WhitespacePolicy::Unicode);
        assert_eq!(config.trace, TraceMode::Off);
    }

    #[test]
    fn test_from_json() {
        let config = RunConfig::from_json(r#"{"whitespace": "disabled", "trace": "log"}"#).unwrap();
        assert_eq!(config.whitespace, WhitespacePolicy::Disabled);
        assert_eq!(config.trace, TraceMode::Log);
        assert!(RunConfig::from_json(r#"{"whitespace": "tabs"}"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"whitespace": "ascii"}}"#).unwrap();
        let config = RunConfig::from_file(file.path()).unwrap();
        assert_eq!(config.whitespace, WhitespacePolicy::Ascii);

        let missing = RunConfig::from_file("/nonexistent/ravel.json");
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
