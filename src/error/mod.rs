// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              SmtError (~24 bytes)
//!                     |
//!        +---------+--+------+--------+
//!        |         |         |        |
//!        v         v         v        v
//!      Bail    Manifest    Config   Io/Other
//!              Box         Box      Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Manifest  ReadFailed, WriteFailed
//!   Config    InvalidValue, NotFound
//!
//! All variants boxed => SmtError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SmtError`].
pub type SmtResult<T> = std::result::Result<T, SmtError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SmtError {
    /// Fatal error that should terminate the application.
    #[error("{0}")]
    Bailed(Box<str>),

    /// Manifest read or write failed.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`SmtError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> SmtError {
    SmtError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SmtError {
                fn from(err: $error) -> Self {
                    SmtError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ManifestError => Manifest,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Manifest Errors ---

/// Manifest file access errors.
///
/// A manifest without a `mod_package` block is NOT an error: the editor
/// passes such files through unchanged.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read a manifest file.
    #[error("failed to read manifest '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a manifest file back.
    #[error("failed to write manifest '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}
