//! Executes core effects: client commands, ticker lifecycle, settings
//! writes and download navigation.

use std::process::Command;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use app_logging::{app_debug, app_error, app_info, app_warn};
use vidflow_client::{ApiSettings, ClientCommands, ClientEvent, ClientHandle};
use vidflow_core::{ConversionError, ConversionReceipt, Effect, ErrorKind, Msg, VideoInfo};

use super::persistence;
use super::tickers::Tickers;

pub(crate) struct EffectRunner {
    settings: ApiSettings,
    commands: ClientCommands,
    msg_tx: mpsc::Sender<Msg>,
    tickers: Tickers,
    pending_thumbnail: Arc<Mutex<Option<Vec<u8>>>>,
}

impl EffectRunner {
    pub(crate) fn new(settings: ApiSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let handle = ClientHandle::new(settings.clone());
        let commands = handle.commands();
        let pending_thumbnail = Arc::new(Mutex::new(None));
        spawn_event_loop(
            handle,
            msg_tx.clone(),
            commands.clone(),
            pending_thumbnail.clone(),
        );
        Self {
            settings,
            commands,
            msg_tx,
            tickers: Tickers::new(),
            pending_thumbnail,
        }
    }

    pub(crate) fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchVideoInfo { url } => {
                    app_info!("video-info request url={url}");
                    self.commands.fetch_info(url);
                }
                Effect::RequestConversion { request, deadline } => {
                    app_info!(
                        "convert request format={} quality={} deadline={}s",
                        request.format.as_str(),
                        request.quality,
                        deadline.as_secs()
                    );
                    self.commands.convert(map_request(request), deadline);
                }
                Effect::StartTickers => self.tickers.start(self.msg_tx.clone()),
                Effect::StopTickers => self.tickers.stop(),
                Effect::OpenDownload { filename } => {
                    let url = self.settings.download_url(&filename);
                    app_info!("opening download {url}");
                    open_in_browser(url);
                }
                Effect::PersistTheme(theme) => persistence::save_theme(theme),
            }
        }
    }

    /// Thumbnail bytes fetched in the background; the UI layer decodes them
    /// into a texture when it picks them up.
    pub(crate) fn take_thumbnail(&self) -> Option<Vec<u8>> {
        self.pending_thumbnail
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }
}

fn spawn_event_loop(
    handle: ClientHandle,
    msg_tx: mpsc::Sender<Msg>,
    commands: ClientCommands,
    pending_thumbnail: Arc<Mutex<Option<Vec<u8>>>>,
) {
    thread::spawn(move || loop {
        if let Some(event) = handle.try_recv() {
            match event {
                ClientEvent::InfoDone { result } => match result {
                    Ok(info) => {
                        if !info.thumbnail.is_empty() {
                            commands.fetch_thumbnail(info.thumbnail.clone());
                        }
                        let _ = msg_tx.send(Msg::InfoFetched {
                            info: map_info(info),
                        });
                    }
                    Err(err) => {
                        app_warn!("video-info failed: {err}");
                        let _ = msg_tx.send(Msg::InfoFailed {
                            message: err.message,
                        });
                    }
                },
                ClientEvent::ConvertDone { result } => {
                    if let Err(err) = &result {
                        app_warn!("convert failed: {err}");
                    }
                    let result = result
                        .map(|receipt| ConversionReceipt {
                            filename: receipt.filename,
                        })
                        .map_err(map_failure);
                    let _ = msg_tx.send(Msg::ConversionDone { result });
                }
                ClientEvent::ThumbnailDone { result } => match result {
                    Ok(bytes) => {
                        if let Ok(mut slot) = pending_thumbnail.lock() {
                            *slot = Some(bytes);
                        }
                    }
                    // Thumbnails are cosmetic; a failed fetch is dropped.
                    Err(err) => app_debug!("thumbnail fetch failed: {err}"),
                },
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

fn map_request(request: vidflow_core::ConversionRequest) -> vidflow_client::ConversionRequest {
    vidflow_client::ConversionRequest {
        url: request.url,
        format: match request.format {
            vidflow_core::OutputFormat::Mp3 => vidflow_client::OutputFormat::Mp3,
            vidflow_core::OutputFormat::Mp4 => vidflow_client::OutputFormat::Mp4,
        },
        quality: request.quality,
    }
}

fn map_info(info: vidflow_client::VideoInfo) -> VideoInfo {
    VideoInfo {
        title: info.title,
        thumbnail_url: info.thumbnail,
        uploader: info.uploader,
        duration: info.duration,
        view_count: info.view_count,
    }
}

fn map_failure(err: vidflow_client::ApiError) -> ConversionError {
    let kind = match err.kind {
        vidflow_client::FailureKind::Timeout => ErrorKind::Timeout,
        vidflow_client::FailureKind::HttpStatus(code) => ErrorKind::HttpStatus(code),
        vidflow_client::FailureKind::Server | vidflow_client::FailureKind::InvalidResponse => {
            ErrorKind::Server
        }
        vidflow_client::FailureKind::Network => ErrorKind::Network,
    };
    ConversionError::new(kind, err.message)
}

/// Hands the download URL to the system browser, off the UI thread.
fn open_in_browser(url: String) {
    thread::spawn(move || {
        #[cfg(target_os = "windows")]
        let result = Command::new("cmd").args(["/C", "start", "", &url]).spawn();
        #[cfg(target_os = "macos")]
        let result = Command::new("open").arg(&url).spawn();
        #[cfg(all(unix, not(target_os = "macos")))]
        let result = Command::new("xdg-open").arg(&url).spawn();

        if let Err(err) = result {
            app_error!("Failed to open {url}: {err}");
        }
    });
}
