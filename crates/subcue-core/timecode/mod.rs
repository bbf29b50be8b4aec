//! Frame-based timecode conversions
//!
//! The editing core treats timecodes as opaque strings; these conversions
//! exist for the export path, which turns `HH:MM:SS:FF` timeline timecodes
//! into frame counts and SRT-style `HH:MM:SS,mmm` timestamps.
//!
//! A frame rate of zero degrades to the zero timecode instead of erroring,
//! matching the timeline backend this core talks to.

use crate::utils::errors::{CoreError, Result};

/// Parse an `HH:MM:SS:FF` timecode into an absolute frame count
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimecode`] when the string does not have
/// four colon-separated fields, and
/// [`CoreError::InvalidTimecodeComponent`] when a field is not numeric.
pub fn timecode_to_frames(timecode: &str, frame_rate: u32) -> Result<u64> {
    if frame_rate == 0 {
        return Ok(0);
    }

    let parts: Vec<&str> = timecode.split(':').collect();
    if parts.len() != 4 {
        return Err(CoreError::invalid_timecode(timecode));
    }

    let mut fields = [0u64; 4];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| CoreError::InvalidTimecodeComponent {
                value: timecode.to_string(),
                component: (*part).to_string(),
            })?;
    }

    let [hours, minutes, seconds, frames] = fields;
    Ok((hours * 3600 + minutes * 60 + seconds) * u64::from(frame_rate) + frames)
}

/// Format an absolute frame count as an `HH:MM:SS:FF` timecode
#[must_use]
pub fn frames_to_timecode(frames: u64, frame_rate: u32) -> String {
    if frame_rate == 0 {
        return "00:00:00:00".to_string();
    }

    let rate = u64::from(frame_rate);
    let total_seconds = frames / rate;
    let ff = frames % rate;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}:{ff:02}")
}

/// Format an absolute frame count as an SRT `HH:MM:SS,mmm` timestamp
#[must_use]
pub fn frames_to_srt_timecode(frames: u64, frame_rate: u32) -> String {
    if frame_rate == 0 {
        return "00:00:00,000".to_string();
    }

    let rate = u64::from(frame_rate);
    let total_ms = frames * 1000 / rate;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;

    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}
