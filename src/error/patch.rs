//! Patch rule errors

use super::AssetError;

/// Creates an invalid patch rule error (`index` is 1-based)
pub fn invalid_rule(index: usize, message: impl Into<String>) -> AssetError {
    AssetError::InvalidPatchRule {
        index,
        message: message.into(),
    }
}

/// Creates a not-UTF-8 error
pub fn not_utf8(path: impl Into<String>) -> AssetError {
    AssetError::NotUtf8 { path: path.into() }
}
