use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use image::GrayImage;

/// Writes filtered images as PNG files into an output directory.
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    /// Create an exporter rooted at `output_dir`. The directory is not
    /// created until the first export.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write `img` to `<output_dir>/<name>.png`, creating the directory if
    /// needed and overwriting any existing file of the same name. Returns
    /// the path of the written file.
    pub fn export(&self, img: &GrayImage, name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            anyhow::anyhow!("Failed to create {}: {}", self.output_dir.display(), e)
        })?;

        let path = self.output_dir.join(format!("{}.png", name));
        img.save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", path.display(), e))?;

        Ok(path)
    }
}
