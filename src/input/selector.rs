//! Two-slot document selection with type validation and drag indicators

use crate::error::Result;
use crate::input::document::DocumentFile;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    Resume,
    JobDescription,
}

impl SlotKind {
    /// Multipart field name used when the slot is uploaded.
    pub fn form_field(&self) -> &'static str {
        match self {
            SlotKind::Resume => "resume",
            SlotKind::JobDescription => "job_description",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Resume => write!(f, "resume"),
            SlotKind::JobDescription => write!(f, "job description"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileSlot {
    kind: SlotKind,
    file: Option<DocumentFile>,
    drag_active: bool,
}

impl FileSlot {
    fn new(kind: SlotKind) -> Self {
        Self {
            kind,
            file: None,
            drag_active: false,
        }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn file(&self) -> Option<&DocumentFile> {
        self.file.as_ref()
    }

    pub fn is_filled(&self) -> bool {
        self.file.is_some()
    }
}

/// Holds the resume and job description for one upload attempt.
///
/// Manual selection and drag-and-drop both end in [`DocumentSelector::assign`].
/// Nothing here ever triggers a submission.
#[derive(Debug, Clone)]
pub struct DocumentSelector {
    resume: FileSlot,
    job_description: FileSlot,
}

impl Default for DocumentSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSelector {
    pub fn new() -> Self {
        Self {
            resume: FileSlot::new(SlotKind::Resume),
            job_description: FileSlot::new(SlotKind::JobDescription),
        }
    }

    pub fn slot(&self, kind: SlotKind) -> &FileSlot {
        match kind {
            SlotKind::Resume => &self.resume,
            SlotKind::JobDescription => &self.job_description,
        }
    }

    fn slot_mut(&mut self, kind: SlotKind) -> &mut FileSlot {
        match kind {
            SlotKind::Resume => &mut self.resume,
            SlotKind::JobDescription => &mut self.job_description,
        }
    }

    /// Places `file` in the slot if its media type is allowed. On rejection the
    /// slot keeps whatever it held before.
    pub fn assign(&mut self, kind: SlotKind, file: DocumentFile) -> Result<()> {
        file.ensure_allowed_type()?;

        info!("Selected {} for {}", file.name(), kind);
        self.slot_mut(kind).file = Some(file);
        Ok(())
    }

    pub fn remove(&mut self, kind: SlotKind) {
        if let Some(file) = self.slot_mut(kind).file.take() {
            info!("Removed {} from {}", file.name(), kind);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.resume.is_filled() && self.job_description.is_filled()
    }

    /// Releases both files for submission. Leaves the slots untouched unless both are filled.
    pub fn take_ready(&mut self) -> Option<(DocumentFile, DocumentFile)> {
        if !self.is_ready() {
            return None;
        }
        let resume = self.resume.file.take()?;
        let job_description = self.job_description.file.take()?;
        Some((resume, job_description))
    }

    pub fn drag_enter(&mut self, kind: SlotKind) {
        debug!("Drag over {}", kind);
        self.slot_mut(kind).drag_active = true;
    }

    pub fn drag_leave(&mut self, kind: SlotKind) {
        self.slot_mut(kind).drag_active = false;
    }

    /// A drop ends the hover on that slot whether or not the file is accepted.
    pub fn drop_file(&mut self, kind: SlotKind, file: DocumentFile) -> Result<()> {
        self.drag_leave(kind);
        self.assign(kind, file)
    }

    pub fn is_drag_active(&self, kind: SlotKind) -> bool {
        self.slot(kind).drag_active
    }
}
