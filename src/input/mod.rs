//! Input module
//! Handles file type detection, document loading, and the two upload slots

pub mod document;
pub mod file_detector;
pub mod selector;

pub use document::DocumentFile;
pub use selector::{DocumentSelector, FileSlot, SlotKind};
