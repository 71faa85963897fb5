//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors for Triplepick.
#[derive(Error, Debug)]
pub enum AppError {
    // Input side: absence is the expected first-run state and degrades
    // to an empty candidate list.
    #[error("graph source not found: {path}")]
    SourceNotFound { path: PathBuf },

    // A present but unparseable input graph ends the session.
    #[error("malformed graph {path}: {source}")]
    MalformedGraph {
        path: PathBuf,
        #[source]
        source: oxttl::TurtleParseError,
    },

    #[error("failed to read selection state {path}: {source}")]
    StateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write selection state {path}: {source}")]
    StateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write subgraph {path}: {source}")]
    SubgraphWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Config errors
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
