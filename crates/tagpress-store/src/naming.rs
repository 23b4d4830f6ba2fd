//! Code-derived file names.

use image::ImageFormat;
use tagpress_model::Code;

use crate::error::{Result, StorageError};

/// `<prefix><code>.<extension>`, e.g. `qr_code_4071.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNaming {
    prefix: String,
    extension: String,
}

impl Default for FileNaming {
    fn default() -> Self {
        Self {
            prefix: "qr_code_".to_string(),
            extension: "jpg".to_string(),
        }
    }
}

impl FileNaming {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            prefix: prefix.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn file_name(&self, code: &Code) -> String {
        format!("{}{}.{}", self.prefix, code, self.extension)
    }

    /// Image format implied by the extension.
    pub fn format(&self) -> Result<ImageFormat> {
        ImageFormat::from_extension(&self.extension).ok_or_else(|| {
            StorageError::UnsupportedFormat {
                extension: self.extension.clone(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_naming() {
        let code = Code::parse("0913").unwrap();
        let naming = FileNaming::default();
        assert_eq!(naming.file_name(&code), "qr_code_0913.jpg");
        assert_eq!(naming.format().unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_leading_dot_is_ignored() {
        let code = Code::parse("0913").unwrap();
        let naming = FileNaming::new("tag-", ".png");
        assert_eq!(naming.file_name(&code), "tag-0913.png");
        assert_eq!(naming.format().unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_unknown_extension() {
        let naming = FileNaming::new("x", "doc");
        assert!(matches!(
            naming.format(),
            Err(StorageError::UnsupportedFormat { .. })
        ));
    }
}
