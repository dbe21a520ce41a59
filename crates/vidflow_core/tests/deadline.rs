use std::time::Duration;

use vidflow_core::{conversion_deadline, parse_duration, OutputFormat};

#[test]
fn parses_minute_and_hour_forms() {
    assert_eq!(parse_duration("1:00"), Some(60));
    assert_eq!(parse_duration("10:00"), Some(600));
    assert_eq!(parse_duration("1:02:03"), Some(3723));
    assert_eq!(parse_duration("0:07"), Some(7));
}

#[test]
fn rejects_malformed_durations() {
    assert_eq!(parse_duration(""), None);
    assert_eq!(parse_duration("abc"), None);
    assert_eq!(parse_duration("1:2:3:4"), None);
    assert_eq!(parse_duration("90"), None);
    assert_eq!(parse_duration("1:xx"), None);
}

#[test]
fn audio_deadline_is_proportional_with_buffer() {
    // 60 s of audio: 60 * 5000 + 180_000 = 480_000 ms, under both bounds.
    assert_eq!(
        conversion_deadline(Some("1:00"), OutputFormat::Mp3),
        Duration::from_millis(480_000)
    );
}

#[test]
fn long_video_deadline_hits_the_ceiling() {
    // 600 s of video: 600 * 3000 + 180_000 = 1_980_000 ms, clamped to 30 min.
    assert_eq!(
        conversion_deadline(Some("10:00"), OutputFormat::Mp4),
        Duration::from_millis(1_800_000)
    );
}

#[test]
fn very_short_video_deadline_hits_the_floor() {
    assert_eq!(
        conversion_deadline(Some("0:00"), OutputFormat::Mp4),
        Duration::from_millis(180_000)
    );
}

#[test]
fn unknown_duration_uses_format_based_fallbacks() {
    assert_eq!(
        conversion_deadline(None, OutputFormat::Mp3),
        Duration::from_millis(900_000)
    );
    assert_eq!(
        conversion_deadline(None, OutputFormat::Mp4),
        Duration::from_millis(600_000)
    );
}

#[test]
fn unparsable_duration_is_treated_as_unknown() {
    assert_eq!(
        conversion_deadline(Some("n/a"), OutputFormat::Mp3),
        Duration::from_millis(900_000)
    );
}
