//! BLAKE3 content hashing for backup verification

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use blake3::{Hash, Hasher};

use crate::error::{self, Result};

/// Prefix used when a digest is shown to the user
pub const HASH_PREFIX: &str = "blake3:";

/// Hash the content of a file, streaming it from disk
pub fn hash_file(path: &Path) -> Result<Hash> {
    let read_failed =
        |e: std::io::Error| error::fs::read_failed(path.display().to_string(), e.to_string());

    let file = File::open(path).map_err(read_failed)?;
    let mut hasher = Hasher::new();
    hasher
        .update_reader(BufReader::new(file))
        .map_err(read_failed)?;

    Ok(hasher.finalize())
}

/// `blake3:<hex>` form of a digest
pub fn display_hash(hash: &Hash) -> String {
    format!("{}{}", HASH_PREFIX, hash.to_hex())
}

/// Check whether two files have identical content.
///
/// Files of different length are told apart without reading them.
pub fn same_content(a: &Path, b: &Path) -> Result<bool> {
    let len = |p: &Path| {
        std::fs::metadata(p)
            .map(|m| m.len())
            .map_err(|e| error::fs::read_failed(p.display().to_string(), e.to_string()))
    };
    if len(a)? != len(b)? {
        return Ok(false);
    }

    let (ha, hb) = (hash_file(a)?, hash_file(b)?);
    log::debug!(
        "{} {} / {} {}",
        a.display(),
        display_hash(&ha),
        b.display(),
        display_hash(&hb)
    );
    Ok(ha == hb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hash_file_matches_in_memory_hash() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("photo.png");
        std::fs::write(&file_path, "test content").unwrap();

        let hash = hash_file(&file_path).unwrap();
        assert_eq!(hash, blake3::hash(b"test content"));
        assert!(display_hash(&hash).starts_with(HASH_PREFIX));
    }

    #[test]
    fn test_hash_file_not_found() {
        let result = hash_file(Path::new("/nonexistent/file.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_same_content() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.png");
        let b = temp.path().join("b.png");
        let c = temp.path().join("c.png");
        let d = temp.path().join("d.png");
        std::fs::write(&a, "pixels").unwrap();
        std::fs::write(&b, "pixels").unwrap();
        std::fs::write(&c, "other pixels").unwrap();
        std::fs::write(&d, "pixelz").unwrap();

        assert!(same_content(&a, &b).unwrap());
        assert!(!same_content(&a, &c).unwrap());
        assert!(!same_content(&a, &d).unwrap());
    }
}
