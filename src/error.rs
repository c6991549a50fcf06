use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a page from running to completion.
#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read config file '{}': {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value '{value}' for environment variable {var}")]
    InvalidEnv { var: String, value: String },

    #[error("Unknown page '{0}' (try `playground list`)")]
    UnknownPage(String),

    #[error("No prototype registered under '{0}'")]
    UnknownPrototype(String),

    #[error("Unknown factory '{0}': expected 'list' or 'table'")]
    UnknownFactory(String),

    #[error("Unknown database '{0}'")]
    UnknownDatabase(String),

    #[error("No entry for '{key}' in database '{database}'")]
    MissingProperty { database: String, key: String },

    #[error("Linking support #{from} to #{to} would close a cycle")]
    ChainCycle { from: usize, to: usize },

    #[error("Support #{0} does not belong to this chain")]
    UnknownSupport(usize),
}

impl PlaygroundError {
    pub fn invalid_env(var: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEnv {
            var: var.into(),
            value: value.into(),
        }
    }

    pub fn missing_property(database: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingProperty {
            database: database.into(),
            key: key.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
