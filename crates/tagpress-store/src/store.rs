//! Artifact saving.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use image::codecs::jpeg::JpegEncoder;
use tagpress_compose::Artifact;
use tagpress_model::Code;

use crate::error::{Result, StorageError};
use crate::naming::FileNaming;

/// Default JPEG quality (1-100).
const DEFAULT_QUALITY: u8 = 90;

/// Writes artifacts into one managed output directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    directory: PathBuf,
    naming: FileNaming,
    quality: u8,
}

impl ArtifactStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            naming: FileNaming::default(),
            quality: DEFAULT_QUALITY,
        }
    }

    #[must_use]
    pub fn with_naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }

    /// JPEG quality, clamped to 1-100. Ignored for lossless formats.
    #[must_use]
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Final location of the artifact for `code`.
    pub fn path_for(&self, code: &Code) -> PathBuf {
        self.directory.join(self.naming.file_name(code))
    }

    /// Create the output directory if absent. Idempotent.
    pub fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|e| StorageError::Io {
            operation: "create directory",
            path: self.directory.clone(),
            source: e,
        })
    }

    /// Persist `artifact` under the name derived from `code`.
    ///
    /// An existing file with the same name is replaced.
    pub fn save(&self, artifact: &Artifact, code: &Code) -> Result<PathBuf> {
        let format = self.naming.format()?;
        self.ensure_directory()?;

        let path = self.path_for(code);
        let temp_path = temp_path_for(&path);

        if let Err(error) = self.write_image(artifact, format, &temp_path) {
            // Best effort: the temp file is garbage either way.
            let _ = fs::remove_file(&temp_path);
            return Err(error);
        }

        fs::rename(&temp_path, &path).map_err(|e| StorageError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        tracing::info!(path = %path.display(), "saved artifact");
        Ok(path)
    }

    fn write_image(&self, artifact: &Artifact, format: ImageFormat, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| StorageError::Io {
            operation: "create file",
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);

        let encoded = match format {
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
                artifact.image().write_with_encoder(encoder)
            }
            other => artifact.image().write_to(&mut writer, other),
        };
        encoded.map_err(|e| StorageError::Encode {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file = writer.into_inner().map_err(|e| StorageError::Io {
            operation: "flush file",
            path: path.to_path_buf(),
            source: e.into_error(),
        })?;
        file.sync_all().map_err(|e| StorageError::Io {
            operation: "sync file",
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_sibling() {
        let temp = temp_path_for(Path::new("data/qr_code_1234.jpg"));
        assert_eq!(temp, PathBuf::from("data/qr_code_1234.jpg.tmp"));
    }

    #[test]
    fn test_quality_is_clamped() {
        let store = ArtifactStore::new("data").with_quality(0);
        assert_eq!(store.quality, 1);
        let store = store.with_quality(250);
        assert_eq!(store.quality, 100);
    }
}
