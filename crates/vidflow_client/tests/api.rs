use std::time::Duration;

use pretty_assertions::assert_eq;
use vidflow_client::{
    ApiSettings, ConvertApi, ConversionRequest, FailureKind, OutputFormat, ReqwestApi,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn api_for(server: &MockServer) -> ReqwestApi {
    ReqwestApi::new(ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    })
}

fn mp3_request() -> ConversionRequest {
    ConversionRequest {
        url: VIDEO_URL.to_string(),
        format: OutputFormat::Mp3,
        quality: "best".to_string(),
    }
}

#[tokio::test]
async fn video_info_returns_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video-info"))
        .and(body_json(serde_json::json!({ "url": VIDEO_URL })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "title": "Test Clip",
            "thumbnail": "https://img.example.com/t.jpg",
            "duration": "3:45",
            "uploader": "Uploader",
            "view_count": 123_456,
        })))
        .mount(&server)
        .await;

    let info = api_for(&server)
        .video_info(VIDEO_URL)
        .await
        .expect("info ok");
    assert_eq!(info.title, "Test Clip");
    assert_eq!(info.thumbnail, "https://img.example.com/t.jpg");
    assert_eq!(info.duration.as_deref(), Some("3:45"));
    assert_eq!(info.uploader, "Uploader");
    assert_eq!(info.view_count, 123_456);
}

#[tokio::test]
async fn video_info_without_duration_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "title": "Test Clip",
            "thumbnail": "",
            "duration": "",
            "uploader": "Uploader",
            "view_count": 1,
        })))
        .mount(&server)
        .await;

    let info = api_for(&server)
        .video_info(VIDEO_URL)
        .await
        .expect("info ok");
    assert_eq!(info.duration, None);
}

#[tokio::test]
async fn video_info_surfaces_server_reported_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "error": "This video is private and cannot be accessed.",
        })))
        .mount(&server)
        .await;

    let err = api_for(&server).video_info(VIDEO_URL).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Server);
    assert_eq!(err.message, "This video is private and cannot be accessed.");
}

#[tokio::test]
async fn video_info_maps_http_status_and_keeps_the_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video-info"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "Invalid YouTube URL" })),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).video_info(VIDEO_URL).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.message, "Invalid YouTube URL");
}

#[tokio::test]
async fn convert_serializes_the_request_and_returns_the_receipt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/convert"))
        .and(body_json(serde_json::json!({
            "url": VIDEO_URL,
            "format": "mp3",
            "quality": "best",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "filename": "test-clip.mp3",
        })))
        .mount(&server)
        .await;

    let receipt = api_for(&server)
        .convert(&mp3_request(), Duration::from_secs(5))
        .await
        .expect("convert ok");
    assert_eq!(receipt.filename, "test-clip.mp3");
}

#[tokio::test]
async fn convert_fails_on_a_success_body_without_filename() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/convert"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&server)
        .await;

    let err = api_for(&server)
        .convert(&mp3_request(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn convert_maps_a_bare_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/convert"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .convert(&mp3_request(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn convert_times_out_at_the_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/convert"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "success": true, "filename": "x.mp3" })),
        )
        .mount(&server)
        .await;

    let err = api_for(&server)
        .convert(&mp3_request(), Duration::from_millis(50))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn thumbnail_returns_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/thumb.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .mount(&server)
        .await;

    let bytes = api_for(&server)
        .thumbnail(&format!("{}/thumb.jpg", server.uri()))
        .await
        .expect("thumbnail ok");
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
}
