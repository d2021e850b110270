//! Error types for the packaging pipelines
//!
//! Skipped assets (missing files, remote references, excluded scripts) are
//! not errors; they are reported through `InlineReport`. Everything here
//! aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a packaging run
#[derive(Debug, Error)]
pub enum PackError {
    /// Input document could not be read
    #[error("failed to read input document {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A local asset existed at scan time but could not be read
    #[error("failed to read asset {path}")]
    ReadAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the transformed document failed
    #[error("failed to serialize transformed document")]
    Serialize(#[source] std::io::Error),

    /// Output file could not be written
    #[error("failed to write output {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
