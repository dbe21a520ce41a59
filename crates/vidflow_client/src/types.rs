use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Output container requested from the service, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Mp3,
    Mp4,
}

/// Body of `POST /convert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRequest {
    pub url: String,
    pub format: OutputFormat,
    pub quality: String,
}

/// Metadata returned by `POST /video-info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub title: String,
    pub thumbnail: String,
    pub uploader: String,
    pub duration: Option<String>,
    pub view_count: u64,
}

/// Successful `POST /convert` response; `filename` keys the download path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReceipt {
    pub filename: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The per-request deadline expired and the request was cancelled.
    Timeout,
    /// Non-2xx response status.
    HttpStatus(u16),
    /// 2xx response whose body reported `success: false`.
    Server,
    /// 2xx success body missing a required field.
    InvalidResponse,
    /// Transport-level failure.
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Server => write!(f, "server error"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// A failed API call, with the most specific message available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Events emitted by [`crate::ClientHandle`] as commands settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    InfoDone {
        result: Result<VideoInfo, ApiError>,
    },
    ConvertDone {
        result: Result<ConversionReceipt, ApiError>,
    },
    ThumbnailDone {
        result: Result<Vec<u8>, ApiError>,
    },
}
