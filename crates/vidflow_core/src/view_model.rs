use crate::{Dialog, OutputFormat, Phase, Theme, VideoInfo};

/// Live styling for the URL input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlValidity {
    /// Empty input: no styling.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// Progress display, present only while a submission is showing progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub percent: f64,
    pub message: String,
}

/// Everything the rendering layer needs, derived from [`crate::AppState`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub phase: Phase,
    /// The submit control is disabled for the full duration of a
    /// submission; this mirrors the core re-entrancy guard visually.
    pub submit_enabled: bool,
    pub url_validity: UrlValidity,
    pub format: OutputFormat,
    pub quality: String,
    /// Audio-only output hides the quality selector.
    pub quality_selector_visible: bool,
    pub video_info: Option<VideoInfo>,
    pub progress: Option<ProgressView>,
    pub dialog: Option<Dialog>,
    pub theme: Theme,
    pub faq_open: Option<usize>,
    pub dirty: bool,
}
