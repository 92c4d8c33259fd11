//! Error types and handling for assetkit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`image`]: Image decode/encode errors
//! - [`patch`]: Patch rule errors

pub mod config;
pub mod fs;
pub mod image;
pub mod patch;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(assetkit::config::not_found),
        help("Pass an existing file with --config or unset ASSETKIT_CONFIG")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(assetkit::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(assetkit::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(assetkit::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(assetkit::fs::not_found))]
    FileNotFound { path: String },

    #[error("Not a directory: {path}")]
    #[diagnostic(
        code(assetkit::fs::not_a_directory),
        help("The optimize command expects a directory containing images")
    )]
    NotADirectory { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(assetkit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(assetkit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to back up {path}: {reason}")]
    #[diagnostic(code(assetkit::fs::backup_failed))]
    BackupFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(assetkit::fs::io_error))]
    IoError { message: String },

    // Image errors
    #[error("Failed to decode image: {path}: {reason}")]
    #[diagnostic(
        code(assetkit::image::decode_failed),
        help("Only PNG and JPEG inputs are supported")
    )]
    ImageDecodeFailed { path: String, reason: String },

    #[error("Failed to encode JPEG: {path}: {reason}")]
    #[diagnostic(code(assetkit::image::encode_failed))]
    ImageEncodeFailed { path: String, reason: String },

    #[error("{count} image(s) could not be optimized")]
    #[diagnostic(
        code(assetkit::image::run_incomplete),
        help("Drop --strict to exit successfully when some images fail")
    )]
    ImagesFailed { count: usize },

    // Patch errors
    #[error("Invalid patch rule #{index}: {message}")]
    #[diagnostic(code(assetkit::patch::invalid_rule))]
    InvalidPatchRule { index: usize, message: String },

    #[error("No patch rules given")]
    #[diagnostic(
        code(assetkit::patch::no_rules),
        help("Use --rules <FILE>, --from/--to pairs, or a 'patch.rules' section in assetkit.yaml")
    )]
    NoPatchRules,

    #[error("File is not valid UTF-8 text: {path}")]
    #[diagnostic(code(assetkit::patch::not_utf8))]
    NotUtf8 { path: String },
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AssetError {
    fn from(err: serde_yaml::Error) -> Self {
        AssetError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(err: serde_json::Error) -> Self {
        AssetError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<::image::ImageError> for AssetError {
    fn from(err: ::image::ImageError) -> Self {
        AssetError::ImageDecodeFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AssetError>;
