use std::time::Duration;

use vidflow_core::{ProgressState, SIMULATED_CAP, STAGE_MESSAGES, START_PERCENT};

const NORMAL_GAP: Duration = Duration::from_millis(500);
const SLOW_GAP: Duration = Duration::from_secs(31);

#[test]
fn starts_at_five_percent_with_the_first_stage_message() {
    let progress = ProgressState::default();
    assert_eq!(progress.percent(), START_PERCENT);
    assert_eq!(progress.message(), STAGE_MESSAGES[0]);
}

#[test]
fn normal_ticks_move_between_two_and_eight_points() {
    let mut progress = ProgressState::default();
    progress.tick(0.0, NORMAL_GAP);
    assert_eq!(progress.percent(), START_PERCENT + 2.0);

    let mut progress = ProgressState::default();
    progress.tick(0.5, NORMAL_GAP);
    assert_eq!(progress.percent(), START_PERCENT + 5.0);
}

#[test]
fn slow_ticks_move_between_half_and_two_and_a_half_points() {
    let mut progress = ProgressState::default();
    progress.tick(0.0, SLOW_GAP);
    assert_eq!(progress.percent(), START_PERCENT + 0.5);

    let mut progress = ProgressState::default();
    progress.tick(0.5, SLOW_GAP);
    assert_eq!(progress.percent(), START_PERCENT + 1.5);
}

#[test]
fn simulated_progress_never_passes_the_cap() {
    let mut progress = ProgressState::default();
    for _ in 0..1_000 {
        progress.tick(0.999, NORMAL_GAP);
        assert!(progress.percent() <= SIMULATED_CAP);
    }
    assert_eq!(progress.percent(), SIMULATED_CAP);
}

#[test]
fn completion_jumps_to_one_hundred() {
    let mut progress = ProgressState::default();
    progress.tick(0.5, NORMAL_GAP);
    progress.complete();
    assert_eq!(progress.percent(), 100.0);
    assert_eq!(progress.message(), "Conversion complete!");
}

#[test]
fn begin_resets_a_completed_display() {
    let mut progress = ProgressState::default();
    progress.complete();
    progress.begin();
    assert_eq!(progress.percent(), START_PERCENT);
    assert_eq!(progress.message(), STAGE_MESSAGES[0]);
}

#[test]
fn stage_messages_cycle_in_order() {
    let mut progress = ProgressState::default();
    for expected in STAGE_MESSAGES {
        progress.advance_message(Duration::ZERO);
        assert_eq!(progress.message(), expected);
    }
    // Ninth advance wraps back to the first message.
    progress.advance_message(Duration::ZERO);
    assert_eq!(progress.message(), STAGE_MESSAGES[0]);
}

#[test]
fn elapsed_suffix_appears_past_ten_seconds() {
    let mut progress = ProgressState::default();
    progress.advance_message(Duration::from_secs(10));
    assert_eq!(progress.message(), STAGE_MESSAGES[0]);

    progress.advance_message(Duration::from_secs(30));
    assert_eq!(progress.message(), format!("{} (30s)", STAGE_MESSAGES[1]));
}

#[test]
fn elapsed_suffix_switches_to_minutes_past_sixty_seconds() {
    let mut progress = ProgressState::default();
    progress.advance_message(Duration::from_secs(90));
    assert_eq!(
        progress.message(),
        format!("{} (1m 30s)", STAGE_MESSAGES[0])
    );
}
