use std::time::Duration;

/// Simulated progress starts here on every submission.
pub const START_PERCENT: f64 = 5.0;

/// Simulated progress never passes this until the real response settles.
pub const SIMULATED_CAP: f64 = 92.0;

/// Ticks arriving after a gap longer than this use the reduced increment.
pub const SLOW_TICK_THRESHOLD: Duration = Duration::from_secs(30);

/// Cadence the platform drives [`crate::Msg::ProgressTick`] at.
pub const PROGRESS_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Cadence the platform drives [`crate::Msg::StageTick`] at.
pub const STAGE_TICK_INTERVAL: Duration = Duration::from_secs(3);

/// Stage messages cycled while a request is in flight.
pub const STAGE_MESSAGES: [&str; 8] = [
    "Fetching video information...",
    "Analyzing video format...",
    "Downloading video data...",
    "Processing video stream...",
    "Converting format...",
    "Optimizing file...",
    "Finalizing download...",
    "Almost done...",
];

const COMPLETE_MESSAGE: &str = "Conversion complete!";

/// Display-only progress for the in-flight submission.
///
/// The percentage is simulated: it drifts upward on a fixed cadence while
/// the real request is pending and only reaches 100 when the response
/// settles. Reset at the start of every submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    percent: f64,
    message: String,
    message_index: usize,
    elapsed: Duration,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            percent: START_PERCENT,
            message: STAGE_MESSAGES[0].to_string(),
            message_index: 0,
            elapsed: Duration::ZERO,
        }
    }
}

impl ProgressState {
    /// Resets to the start-of-submission display.
    pub fn begin(&mut self) {
        *self = Self::default();
    }

    /// Applies one simulated increment.
    ///
    /// `jitter` is a platform-sampled value in `[0, 1)`; `since_last` is the
    /// real time since the previous tick. Gaps past [`SLOW_TICK_THRESHOLD`]
    /// use a much smaller increment so a long wait reads as "still working"
    /// without racing to the cap.
    pub fn tick(&mut self, jitter: f64, since_last: Duration) {
        let increment = if since_last > SLOW_TICK_THRESHOLD {
            jitter * 2.0 + 0.5
        } else {
            jitter * 6.0 + 2.0
        };
        self.percent = (self.percent + increment).min(SIMULATED_CAP);
    }

    /// Rotates to the next stage message, stamping elapsed time once the
    /// wait is long enough to be worth reporting.
    pub fn advance_message(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
        let base = STAGE_MESSAGES[self.message_index % STAGE_MESSAGES.len()];
        self.message = match elapsed_suffix(elapsed) {
            Some(suffix) => format!("{base} {suffix}"),
            None => base.to_string(),
        };
        self.message_index += 1;
    }

    /// Jumps to 100% when the real response has settled.
    pub fn complete(&mut self) {
        self.percent = 100.0;
        self.message = COMPLETE_MESSAGE.to_string();
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

fn elapsed_suffix(elapsed: Duration) -> Option<String> {
    let secs = elapsed.as_secs();
    if secs > 60 {
        Some(format!("({}m {}s)", secs / 60, secs % 60))
    } else if secs > 10 {
        Some(format!("({secs}s)"))
    } else {
        None
    }
}
