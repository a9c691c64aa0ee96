//! Centralised error types used across the crate.
//!
//! The conversion core itself never fails; these cover configuration and
//! the file plumbing around it.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Precise configuration faults.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid canvas: {reason}")]
    InvalidCanvas { reason: &'static str },
}

/// Top-level error type bubbled up by the command line front end.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File '{}' not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
