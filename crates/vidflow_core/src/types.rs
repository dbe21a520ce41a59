use std::fmt;

/// Output container requested from the conversion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Mp3,
    #[default]
    Mp4,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Mp4 => "mp4",
        }
    }

    /// Audio-only outputs get a larger per-second deadline budget.
    pub fn is_audio_only(self) -> bool {
        matches!(self, OutputFormat::Mp3)
    }
}

/// One submission's worth of conversion parameters.
///
/// Constructed when the user submits, never mutated afterwards; format and
/// quality edits made while a submission is in flight do not affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub url: String,
    pub format: OutputFormat,
    pub quality: String,
}

/// Server-provided metadata, read-only, discarded on the next submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub title: String,
    pub thumbnail_url: String,
    pub uploader: String,
    /// `MM:SS` or `HH:MM:SS`, absent when the server did not report one.
    pub duration: Option<String>,
    pub view_count: u64,
}

/// Opaque token the server hands back for a finished conversion; the
/// download path is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReceipt {
    pub filename: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client-enforced deadline expired and the request was cancelled.
    Timeout,
    /// Non-2xx response status.
    HttpStatus(u16),
    /// 2xx response whose body reported `success: false`.
    Server,
    /// Transport-level failure.
    Network,
}

/// A settled conversion failure as the state machine sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ConversionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Text shown in the failure dialog. Timeouts get a connectivity-oriented
    /// message that must stay distinct from the generic failure text.
    pub fn user_message(&self) -> String {
        match self.kind {
            ErrorKind::Timeout => {
                "Conversion timed out. This may happen with slow connections or very long \
                 videos. Please check your internet connection and try again."
                    .to_string()
            }
            _ if !self.message.is_empty() => self.message.clone(),
            _ => "An error occurred during conversion".to_string(),
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Timeout => write!(f, "timeout: {}", self.message),
            ErrorKind::HttpStatus(code) => write!(f, "http status {code}: {}", self.message),
            ErrorKind::Server => write!(f, "server error: {}", self.message),
            ErrorKind::Network => write!(f, "network error: {}", self.message),
        }
    }
}
