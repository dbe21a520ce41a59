use std::time::Duration;

use serde::Deserialize;

use crate::{
    ApiError, ConversionReceipt, ConversionRequest, FailureKind, VideoInfo,
};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Fixed deadline for the metadata request.
    pub info_timeout: Duration,
    /// Deadline for thumbnail downloads; thumbnails are cosmetic.
    pub thumbnail_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            info_timeout: Duration::from_secs(30),
            thumbnail_timeout: Duration::from_secs(15),
        }
    }
}

impl ApiSettings {
    /// Download path for a finished conversion, keyed by the server-returned
    /// filename token. Opened by the browser, never fetched here.
    pub fn download_url(&self, filename: &str) -> String {
        format!("{}/download/{filename}", self.base_url.trim_end_matches('/'))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// The two JSON endpoints plus the cosmetic thumbnail download, behind a
/// trait so tests can run against a local mock server.
#[async_trait::async_trait]
pub trait ConvertApi: Send + Sync {
    /// `POST /video-info`. Failure here is non-fatal to the caller's flow.
    async fn video_info(&self, url: &str) -> Result<VideoInfo, ApiError>;

    /// `POST /convert` with a caller-computed deadline. Deadline expiry
    /// cancels the request and surfaces as [`FailureKind::Timeout`].
    async fn convert(
        &self,
        request: &ConversionRequest,
        deadline: Duration,
    ) -> Result<ConversionReceipt, ApiError>;

    /// Fetches thumbnail bytes from wherever the info response pointed.
    async fn thumbnail(&self, url: &str) -> Result<Vec<u8>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ApiSettings,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))
    }
}

/// `POST /video-info` response. Error responses carry only `error`, so every
/// field is defaulted and validated after the `success` check.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InfoBody {
    success: bool,
    error: Option<String>,
    title: String,
    thumbnail: String,
    duration: Option<String>,
    uploader: String,
    view_count: u64,
}

/// `POST /convert` response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConvertBody {
    success: bool,
    error: Option<String>,
    filename: Option<String>,
}

/// Error payload attached to non-2xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    error: Option<String>,
}

#[async_trait::async_trait]
impl ConvertApi for ReqwestApi {
    async fn video_info(&self, url: &str) -> Result<VideoInfo, ApiError> {
        let client = self.build_client()?;
        let response = client
            .post(self.settings.endpoint("/video-info"))
            .json(&serde_json::json!({ "url": url }))
            .timeout(self.settings.info_timeout)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_status_error(status, response).await);
        }

        let body: InfoBody = response.json().await.map_err(map_body_error)?;
        if !body.success {
            return Err(ApiError::new(
                FailureKind::Server,
                body.error
                    .unwrap_or_else(|| "Failed to fetch video info".to_string()),
            ));
        }

        Ok(VideoInfo {
            title: body.title,
            thumbnail: body.thumbnail,
            uploader: body.uploader,
            duration: body.duration.filter(|d| !d.is_empty()),
            view_count: body.view_count,
        })
    }

    async fn convert(
        &self,
        request: &ConversionRequest,
        deadline: Duration,
    ) -> Result<ConversionReceipt, ApiError> {
        let client = self.build_client()?;
        let response = client
            .post(self.settings.endpoint("/convert"))
            .json(request)
            .timeout(deadline)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_status_error(status, response).await);
        }

        let body: ConvertBody = response.json().await.map_err(map_body_error)?;
        if !body.success {
            return Err(ApiError::new(
                FailureKind::Server,
                body.error.unwrap_or_else(|| "Conversion failed".to_string()),
            ));
        }

        match body.filename {
            Some(filename) if !filename.is_empty() => Ok(ConversionReceipt { filename }),
            _ => Err(ApiError::new(
                FailureKind::InvalidResponse,
                "success response without a filename",
            )),
        }
    }

    async fn thumbnail(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let client = self.build_client()?;
        let response = client
            .get(url)
            .timeout(self.settings.thumbnail_timeout)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_body_error)?;
        Ok(bytes.to_vec())
    }
}

/// Pulls the server's `error` message out of a non-2xx response when there
/// is one; the status line is the fallback.
async fn http_status_error(status: reqwest::StatusCode, response: reqwest::Response) -> ApiError {
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody { error: Some(error) }) if !error.is_empty() => error,
        _ => status.to_string(),
    };
    ApiError::new(FailureKind::HttpStatus(status.as_u16()), message)
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

fn map_body_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::InvalidResponse, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
