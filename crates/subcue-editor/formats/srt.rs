//! SRT (SubRip) serialization of export units
//!
//! Reconstructs each cue's final text from its segments, converts the
//! timeline timecodes (`HH:MM:SS:FF`) through frame counts into SRT
//! timestamps (`HH:MM:SS,mmm`), and emits numbered blocks separated by
//! blank lines. Timeline timecodes are absolute; subtracting a base
//! frame offset makes the output start near zero when exporting a
//! timeline that does not begin at 00:00:00:00.

use super::{CueExporter, ExportSummary, ExportUnit};
use crate::core::Result;
use std::io::Write;
use subcue_core::{frames_to_srt_timecode, timecode_to_frames};

/// SRT serializer for export units
///
/// # Example
///
/// ```
/// use subcue_editor::{CueExporter, ExportUnit, SrtExporter};
/// use subcue_core::Segment;
///
/// let unit = ExportUnit {
///     id: 1,
///     start_timecode: "00:00:01:00".to_string(),
///     end_timecode: "00:00:02:12".to_string(),
///     segments: vec![Segment::unchanged("Hello")],
/// };
///
/// let exporter = SrtExporter::new(24);
/// let (content, summary) = exporter.export_to_string(&[unit]).unwrap();
/// assert_eq!(content, "1\n00:00:01,000 --> 00:00:02,500\nHello");
/// assert_eq!(summary.exported, 1);
/// ```
#[derive(Debug, Clone)]
pub struct SrtExporter {
    /// Frame rate the inbound timecodes are expressed in
    frame_rate: u32,
    /// Frame offset subtracted from every timecode, clamped at zero
    base_frames: u64,
}

impl SrtExporter {
    /// Create an exporter for the given frame rate
    #[must_use]
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_rate,
            base_frames: 0,
        }
    }

    /// Subtract a base frame offset from every exported timecode
    #[must_use]
    pub fn with_base_frames(mut self, base_frames: u64) -> Self {
        self.base_frames = base_frames;
        self
    }

    /// Subtract the frames of a base timecode from every exported timecode
    ///
    /// Convenience over [`Self::with_base_frames`] for callers that have
    /// the timeline start as a timecode string.
    pub fn with_base_timecode(self, timecode: &str) -> Result<Self> {
        let base = timecode_to_frames(timecode, self.frame_rate)?;
        Ok(self.with_base_frames(base))
    }

    fn srt_timestamp(&self, timecode: &str) -> Result<String> {
        let frames = timecode_to_frames(timecode, self.frame_rate)?;
        let relative = frames.saturating_sub(self.base_frames);
        Ok(frames_to_srt_timecode(relative, self.frame_rate))
    }
}

impl CueExporter for SrtExporter {
    fn export_to_writer(
        &self,
        units: &[ExportUnit],
        writer: &mut dyn Write,
    ) -> Result<ExportSummary> {
        let mut blocks = Vec::with_capacity(units.len());
        let mut warnings = Vec::new();

        for unit in units {
            let start = match self.srt_timestamp(&unit.start_timecode) {
                Ok(ts) => ts,
                Err(e) => {
                    warnings.push(format!("Skipping cue {}: {e}", unit.id));
                    continue;
                }
            };
            let end = match self.srt_timestamp(&unit.end_timecode) {
                Ok(ts) => ts,
                Err(e) => {
                    warnings.push(format!("Skipping cue {}: {e}", unit.id));
                    continue;
                }
            };

            let index = blocks.len() + 1;
            let text = unit.exported_text();
            blocks.push(format!("{index}\n{start} --> {end}\n{text}"));
        }

        let exported = blocks.len();
        let content = blocks.join("\n\n");
        writer
            .write_all(content.as_bytes())
            .map_err(|e| crate::core::EditorError::io(format!("Failed to write SRT content: {e}")))?;

        Ok(ExportSummary { exported, warnings })
    }
}
