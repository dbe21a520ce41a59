use std::sync::mpsc;
use std::time::Duration;

use app_logging::app_info;
use vidflow_client::ApiSettings;
use vidflow_core::{update, AppState, Msg, Theme};

use super::effects::EffectRunner;
use super::particles::ParticleField;
use super::{logging, persistence, ui};

const WINDOW_SIZE: [f32; 2] = [960.0, 720.0];

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();
    app_info!("VidFlow desktop starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        "VidFlow",
        options,
        Box::new(|_cc| Ok(Box::new(VidflowApp::new()))),
    )
    .map_err(|err| anyhow::anyhow!("eframe: {err}"))
}

/// The page's single context object: core state, message channel, effect
/// runner and decorative extras, attached once at startup and alive for the
/// whole session.
struct VidflowApp {
    state: AppState,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
    /// Edit buffer mirrored into the core via `Msg::InputChanged`.
    url_buffer: String,
    particles: ParticleField,
    thumbnail: Option<egui::TextureHandle>,
    applied_theme: Option<Theme>,
}

impl VidflowApp {
    fn new() -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let settings = ApiSettings {
            info_timeout: vidflow_core::INFO_DEADLINE,
            ..ApiSettings::default()
        };
        let effects = EffectRunner::new(settings, msg_tx);
        let mut app = Self {
            state: AppState::new(),
            msg_rx,
            effects,
            url_buffer: String::new(),
            particles: ParticleField::new(WINDOW_SIZE[0], WINDOW_SIZE[1]),
            thumbnail: None,
            applied_theme: None,
        };
        app.dispatch(Msg::ThemeRestored(persistence::load_theme()));
        app
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }

    fn drain_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }
}

impl eframe::App for VidflowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Background-fetched thumbnail bytes become a texture here.
        if let Some(bytes) = self.effects.take_thumbnail() {
            self.thumbnail = decode_thumbnail(ctx, &bytes);
        }

        self.drain_messages();

        let view = self.state.view();
        if self.applied_theme != Some(view.theme) {
            ctx.set_visuals(match view.theme {
                Theme::Dark => egui::Visuals::dark(),
                Theme::Light => egui::Visuals::light(),
            });
            self.applied_theme = Some(view.theme);
        }

        // A new submission cleared the metadata; drop the stale texture.
        if view.video_info.is_none() && self.thumbnail.is_some() {
            self.thumbnail = None;
        }

        let rect = ctx.screen_rect();
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.particles.step(dt, rect.width(), rect.height());

        let msgs = ui::render(
            ctx,
            &view,
            &mut self.url_buffer,
            self.thumbnail.as_ref(),
            &self.particles,
        );
        for msg in msgs {
            self.dispatch(msg);
        }

        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
        // Keeps the message pump and the particle drift moving even when
        // the user is idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn decode_thumbnail(ctx: &egui::Context, bytes: &[u8]) -> Option<egui::TextureHandle> {
    let image = image::load_from_memory(bytes).ok()?.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image);
    Some(ctx.load_texture("video-thumbnail", color_image, egui::TextureOptions::LINEAR))
}
