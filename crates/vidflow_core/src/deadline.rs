use std::time::Duration;

use crate::OutputFormat;

/// Fixed deadline for the metadata request.
pub const INFO_DEADLINE: Duration = Duration::from_secs(30);

/// Milliseconds of conversion budget per second of source video.
const AUDIO_MS_PER_SECOND: u64 = 5_000;
const VIDEO_MS_PER_SECOND: u64 = 3_000;

/// Buffer added on top of the proportional budget, also the floor.
const DEADLINE_BUFFER_MS: u64 = 180_000;
const DEADLINE_FLOOR_MS: u64 = 180_000;
const DEADLINE_CEILING_MS: u64 = 1_800_000;

/// Fallbacks when the source duration is unknown.
const AUDIO_FALLBACK_MS: u64 = 900_000;
const VIDEO_FALLBACK_MS: u64 = 600_000;

/// Parses a `MM:SS` or `HH:MM:SS` duration into total seconds.
pub fn parse_duration(text: &str) -> Option<u64> {
    let parts: Vec<u64> = text
        .split(':')
        .map(|part| part.parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;
    match parts.as_slice() {
        [minutes, seconds] => Some(minutes * 60 + seconds),
        [hours, minutes, seconds] => Some(hours * 3600 + minutes * 60 + seconds),
        _ => None,
    }
}

/// Client-side cancellation deadline for a conversion request.
///
/// Longer source videos need proportionally more server-side transcoding
/// time; the floor prevents premature cancellation on short clips and the
/// ceiling bounds the wait. An unknown or unparsable duration falls back to
/// a fixed budget per output format.
pub fn conversion_deadline(duration: Option<&str>, format: OutputFormat) -> Duration {
    let per_second = if format.is_audio_only() {
        AUDIO_MS_PER_SECOND
    } else {
        VIDEO_MS_PER_SECOND
    };

    let millis = match duration.and_then(parse_duration) {
        Some(seconds) => {
            (seconds * per_second + DEADLINE_BUFFER_MS).clamp(DEADLINE_FLOOR_MS, DEADLINE_CEILING_MS)
        }
        None if format.is_audio_only() => AUDIO_FALLBACK_MS,
        None => VIDEO_FALLBACK_MS,
    };

    Duration::from_millis(millis)
}
