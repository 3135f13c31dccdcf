/*
 * Error Module
 *
 * The simulation itself never fails; only loading and validating a
 * configuration can.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating a `SimulationConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
