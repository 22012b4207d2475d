//! File type detection

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const WORD_LEGACY_MEDIA_TYPE: &str = "application/msword";
pub const WORD_OOXML_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Media types the analysis service accepts.
pub const ALLOWED_MEDIA_TYPES: [&str; 3] =
    [PDF_MEDIA_TYPE, WORD_LEGACY_MEDIA_TYPE, WORD_OOXML_MEDIA_TYPE];

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    WordLegacy,
    WordOoxml,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "doc" => FileType::WordLegacy,
            "docx" => FileType::WordOoxml,
            _ => FileType::Unknown,
        }
    }

    /// Declared media type for this file type. Unknown files are sent as opaque bytes.
    pub fn media_type(&self) -> &'static str {
        match self {
            FileType::Pdf => PDF_MEDIA_TYPE,
            FileType::WordLegacy => WORD_LEGACY_MEDIA_TYPE,
            FileType::WordOoxml => WORD_OOXML_MEDIA_TYPE,
            FileType::Unknown => "application/octet-stream",
        }
    }
}

/// Exact match against the allow-list; parameters such as `; charset=` are not stripped.
pub fn is_allowed_media_type(media_type: &str) -> bool {
    ALLOWED_MEDIA_TYPES.contains(&media_type)
}

/// Best-effort media type for a file name, for files without a declared type.
pub fn media_type_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "txt" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "html" | "htm" => "text/html",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        other => FileType::from_extension(other).media_type(),
    }
}
