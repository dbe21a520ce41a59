use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use app_logging::app_debug;

use crate::{ApiSettings, ClientEvent, ConvertApi, ConversionRequest, ReqwestApi};

enum ClientCommand {
    FetchInfo {
        url: String,
    },
    Convert {
        request: ConversionRequest,
        deadline: Duration,
    },
    FetchThumbnail {
        url: String,
    },
}

/// Cloneable command side of a [`ClientHandle`], usable from any thread.
#[derive(Clone)]
pub struct ClientCommands {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientCommands {
    pub fn fetch_info(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::FetchInfo { url: url.into() });
    }

    pub fn convert(&self, request: ConversionRequest, deadline: Duration) {
        let _ = self
            .cmd_tx
            .send(ClientCommand::Convert { request, deadline });
    }

    pub fn fetch_thumbnail(&self, url: impl Into<String>) {
        let _ = self
            .cmd_tx
            .send(ClientCommand::FetchThumbnail { url: url.into() });
    }
}

/// Runs API commands on a dedicated tokio-runtime thread and reports their
/// results as [`ClientEvent`]s.
///
/// Sequencing is the caller's concern: the orchestrator only issues the
/// conversion command after the info command has settled, so the two are
/// never in flight together.
pub struct ClientHandle {
    commands: ClientCommands,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ApiSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestApi::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            commands: ClientCommands { cmd_tx },
            event_rx,
        }
    }

    pub fn commands(&self) -> ClientCommands {
        self.commands.clone()
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn ConvertApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::FetchInfo { url } => {
            app_debug!("video-info request url={url}");
            let result = api.video_info(&url).await;
            let _ = event_tx.send(ClientEvent::InfoDone { result });
        }
        ClientCommand::Convert { request, deadline } => {
            app_debug!(
                "convert request format={:?} quality={} deadline={:?}",
                request.format,
                request.quality,
                deadline
            );
            let result = api.convert(&request, deadline).await;
            let _ = event_tx.send(ClientEvent::ConvertDone { result });
        }
        ClientCommand::FetchThumbnail { url } => {
            let result = api.thumbnail(&url).await;
            let _ = event_tx.send(ClientEvent::ThumbnailDone { result });
        }
    }
}
