use crate::view_model::{AppViewModel, ProgressView, UrlValidity};
use crate::{
    is_valid_video_url, ConversionRequest, FaqAccordion, OutputFormat, ProgressState, Theme,
    VideoInfo,
};

/// Where the current (or last) submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    FetchingInfo,
    Converting,
    Succeeded,
    Failed,
}

impl Phase {
    /// True while network work is outstanding; gates re-entrancy.
    pub fn in_flight(self) -> bool {
        matches!(self, Phase::FetchingInfo | Phase::Converting)
    }
}

/// A blocking dialog. At most one shows at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Error { title: String, message: String },
    Success { filename: String },
}

/// The whole application state behind the page: conversion orchestrator,
/// theme preference and FAQ accordion. Mutated only through
/// [`crate::update`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    url_input: String,
    format: OutputFormat,
    quality: String,
    phase: Phase,
    /// Single-slot handle for the in-flight submission; `Some` exactly
    /// while `phase.in_flight()`.
    submission: Option<ConversionRequest>,
    video_info: Option<VideoInfo>,
    progress: ProgressState,
    dialog: Option<Dialog>,
    theme: Theme,
    faq: FaqAccordion,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            quality: "best".to_string(),
            dirty: true,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let trimmed = self.url_input.trim();
        let url_validity = if trimmed.is_empty() {
            UrlValidity::Neutral
        } else if is_valid_video_url(trimmed) {
            UrlValidity::Valid
        } else {
            UrlValidity::Invalid
        };

        let progress = match self.phase {
            Phase::FetchingInfo | Phase::Converting | Phase::Succeeded => Some(ProgressView {
                percent: self.progress.percent(),
                message: self.progress.message().to_string(),
            }),
            Phase::Idle | Phase::Failed => None,
        };

        AppViewModel {
            phase: self.phase,
            submit_enabled: !self.phase.in_flight(),
            url_validity,
            format: self.format,
            quality: self.quality.clone(),
            quality_selector_visible: !self.format.is_audio_only(),
            video_info: self.video_info.clone(),
            progress,
            dialog: self.dialog.clone(),
            theme: self.theme,
            faq_open: self.faq.open(),
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; used to coalesce repaints.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.url_input = text;
    }

    pub(crate) fn url_input(&self) -> &str {
        &self.url_input
    }

    pub(crate) fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub(crate) fn set_quality(&mut self, quality: String) {
        self.quality = quality;
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn show_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    pub(crate) fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Enters `FetchingInfo`, claiming the single submission slot and
    /// resetting the transient per-submission state.
    pub(crate) fn begin_submission(&mut self, url: String) -> ConversionRequest {
        let request = ConversionRequest {
            url,
            format: self.format,
            quality: self.quality.clone(),
        };
        self.submission = Some(request.clone());
        self.video_info = None;
        self.progress.begin();
        self.dialog = None;
        self.phase = Phase::FetchingInfo;
        request
    }

    pub(crate) fn submission(&self) -> Option<&ConversionRequest> {
        self.submission.as_ref()
    }

    pub(crate) fn note_video_info(&mut self, info: VideoInfo) {
        self.video_info = Some(info);
    }

    pub(crate) fn video_info(&self) -> Option<&VideoInfo> {
        self.video_info.as_ref()
    }

    pub(crate) fn enter_converting(&mut self) {
        self.phase = Phase::Converting;
    }

    /// Releases the submission slot with the given terminal phase.
    pub(crate) fn settle(&mut self, phase: Phase) {
        debug_assert!(matches!(phase, Phase::Succeeded | Phase::Failed));
        self.submission = None;
        self.phase = phase;
    }

    /// Dialog dismissed; a settled submission returns the page to `Idle`.
    pub(crate) fn close_dialog(&mut self) {
        self.dialog = None;
        if matches!(self.phase, Phase::Succeeded | Phase::Failed) {
            self.phase = Phase::Idle;
        }
    }

    pub(crate) fn progress_mut(&mut self) -> &mut ProgressState {
        &mut self.progress
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub(crate) fn faq_mut(&mut self) -> &mut FaqAccordion {
        &mut self.faq
    }
}
