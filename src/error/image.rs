//! Image decode and encode errors

use super::AssetError;

/// Creates an image decode failed error
pub fn decode_failed(path: impl Into<String>, reason: impl Into<String>) -> AssetError {
    AssetError::ImageDecodeFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a JPEG encode failed error
pub fn encode_failed(path: impl Into<String>, reason: impl Into<String>) -> AssetError {
    AssetError::ImageEncodeFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates the error returned by a strict run in which some images failed
pub fn images_failed(count: usize) -> AssetError {
    AssetError::ImagesFailed { count }
}
