//! Documents picked by the user, held as opaque bytes with a declared media type

use crate::error::{Result, ResumeMatchError};
use crate::input::file_detector::{is_allowed_media_type, media_type_for_extension};
use log::{info, warn};
use std::fmt;
use std::path::Path;
use tokio::fs;

#[derive(Clone, PartialEq)]
pub struct DocumentFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, declaring its media type from the extension.
    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeMatchError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                ResumeMatchError::InvalidInput(format!("Not a file: {}", path.display()))
            })?;

        let media_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(media_type_for_extension)
            .unwrap_or("application/octet-stream");

        let document = Self::new(name, media_type, fs::read(path).await?);
        if document.is_empty() {
            warn!("{} is empty; the service will likely find no skills in it", document.name);
        } else {
            info!("Loaded {} ({}, {} bytes)", document.name, media_type, document.len());
        }

        Ok(document)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn has_allowed_type(&self) -> bool {
        is_allowed_media_type(&self.media_type)
    }

    pub(crate) fn ensure_allowed_type(&self) -> Result<()> {
        if self.has_allowed_type() {
            Ok(())
        } else {
            Err(ResumeMatchError::InvalidFileType {
                file_name: self.name.clone(),
                media_type: self.media_type.clone(),
            })
        }
    }
}

// Contents are elided; documents can be megabytes.
impl fmt::Debug for DocumentFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.len())
            .finish()
    }
}
