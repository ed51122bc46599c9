use config::ConfigError;
use mdh_pipeline::RulesError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the binary before exiting
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: markdown2html <input> <output>")]
    Usage,

    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Error reading file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Rules(#[from] RulesError),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
