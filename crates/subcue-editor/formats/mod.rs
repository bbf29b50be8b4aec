//! Export adapter for downstream collaborators
//!
//! The store hands collaborators one [`ExportUnit`] per cue, in
//! collection order: id, both timecodes verbatim, and the diff segments.
//! The collaborator reconstructs the final text from the segments
//! (everything that is not `Removed`); the SRT serializer in
//! [`srt`] does exactly that locally, and [`ExportRequest`] is the
//! same tuple wrapped up as a timeline-apply request body.

pub mod srt;

use crate::core::{CueStore, EditorError, Result};
use std::io::Write;
use subcue_core::{reconstruct_current, Cue, Segment};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-cue export shape handed to external renderers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExportUnit {
    /// Cue identifier
    pub id: u32,
    /// Start timecode, passed through verbatim
    #[cfg_attr(feature = "serde", serde(rename = "startTimecode"))]
    pub start_timecode: String,
    /// End timecode, passed through verbatim
    #[cfg_attr(feature = "serde", serde(rename = "endTimecode"))]
    pub end_timecode: String,
    /// The cue's edit script; the receiver reconstructs text from it
    #[cfg_attr(feature = "serde", serde(rename = "diffs"))]
    pub segments: Vec<Segment>,
}

impl ExportUnit {
    /// Build an export unit from a cue
    #[must_use]
    pub fn from_cue(cue: &Cue) -> Self {
        Self {
            id: cue.id,
            start_timecode: cue.start_timecode.clone(),
            end_timecode: cue.end_timecode.clone(),
            segments: cue.segments.clone(),
        }
    }

    /// The final text this unit exports to
    #[must_use]
    pub fn exported_text(&self) -> String {
        reconstruct_current(&self.segments)
    }
}

/// Request body for applying edited cues back to the originating timeline
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExportRequest {
    /// Timeline frame rate the timecodes are expressed in
    #[cfg_attr(feature = "serde", serde(rename = "frameRate"))]
    pub frame_rate: u32,
    /// Export units in collection order
    #[cfg_attr(feature = "serde", serde(rename = "subtitles"))]
    pub cues: Vec<ExportUnit>,
}

impl ExportRequest {
    /// Snapshot the store into a timeline-apply request
    #[must_use]
    pub fn from_store(store: &CueStore, frame_rate: u32) -> Self {
        Self {
            frame_rate,
            cues: export_units(store),
        }
    }
}

/// Serialize the store's cues into export units, in collection order
#[must_use]
pub fn export_units(store: &CueStore) -> Vec<ExportUnit> {
    store.cues().iter().map(|c| ExportUnit::from_cue(c)).collect()
}

/// Outcome of an export operation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportSummary {
    /// Number of cues written
    pub exported: usize,
    /// Per-cue problems that were skipped over rather than failing the export
    pub warnings: Vec<String>,
}

/// Trait for serializers that write export units to an output sink
pub trait CueExporter {
    /// Write the units to the given writer
    fn export_to_writer(
        &self,
        units: &[ExportUnit],
        writer: &mut dyn Write,
    ) -> Result<ExportSummary>;

    /// Serialize the units into an in-memory string
    fn export_to_string(&self, units: &[ExportUnit]) -> Result<(String, ExportSummary)> {
        let mut buffer = Vec::new();
        let summary = self.export_to_writer(units, &mut buffer)?;
        let content = String::from_utf8(buffer)
            .map_err(|e| EditorError::io(format!("Exported content is not UTF-8: {e}")))?;
        Ok((content, summary))
    }

    /// Serialize the units into a file, creating or truncating it
    fn export_to_file(&self, units: &[ExportUnit], path: &str) -> Result<ExportSummary> {
        let mut file = std::fs::File::create(path)
            .map_err(|e| EditorError::io(format!("Failed to create {path}: {e}")))?;
        self.export_to_writer(units, &mut file)
    }
}
