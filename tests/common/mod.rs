//! Common test utilities for assetkit integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

/// A scratch directory the binary runs in
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// `assetkit` running inside the workspace, isolated from the caller's config
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("assetkit").expect("assetkit binary");
        cmd.current_dir(&self.path).env_remove("ASSETKIT_CONFIG");
        cmd
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    #[allow(dead_code)]
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write an opaque gradient PNG
    #[allow(dead_code)]
    pub fn write_png(&self, path: &str, width: u32, height: u32) -> PathBuf {
        let file_path = self.prepare(path);
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
        })
        .save_with_format(&file_path, ImageFormat::Png)
        .expect("Failed to write PNG");
        file_path
    }

    /// Write a PNG filled with one RGBA color
    #[allow(dead_code)]
    pub fn write_rgba_png(&self, path: &str, size: u32, color: [u8; 4]) -> PathBuf {
        let file_path = self.prepare(path);
        RgbaImage::from_pixel(size, size, Rgba(color))
            .save_with_format(&file_path, ImageFormat::Png)
            .expect("Failed to write PNG");
        file_path
    }

    /// Write a JPEG, using an upper-case extension if asked
    #[allow(dead_code)]
    pub fn write_jpeg(&self, path: &str, width: u32, height: u32) -> PathBuf {
        let file_path = self.prepare(path);
        RgbImage::from_pixel(width, height, Rgb([40, 120, 200]))
            .save_with_format(&file_path, ImageFormat::Jpeg)
            .expect("Failed to write JPEG");
        file_path
    }

    fn prepare(&self, path: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        file_path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Width and height of an image on disk
#[allow(dead_code)]
pub fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).expect("Failed to read image dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_workspace_png() {
        let workspace = TestWorkspace::new();
        let path = workspace.write_png("images/a.png", 12, 8);
        assert_eq!(dimensions(&path), (12, 8));
    }
}
