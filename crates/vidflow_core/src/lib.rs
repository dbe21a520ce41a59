//! VidFlow core: pure state machine and view-model helpers.
//!
//! Nothing in this crate performs IO, reads a clock or samples randomness.
//! Time deltas and jitter arrive inside messages; network and timer work is
//! described by [`Effect`] values the platform layer executes.
mod deadline;
mod effect;
mod faq;
mod msg;
mod progress;
mod state;
mod theme;
mod types;
mod update;
mod validate;
mod view_model;

pub use deadline::{conversion_deadline, parse_duration, INFO_DEADLINE};
pub use effect::Effect;
pub use faq::FaqAccordion;
pub use msg::Msg;
pub use progress::{
    ProgressState, PROGRESS_TICK_INTERVAL, SIMULATED_CAP, SLOW_TICK_THRESHOLD, STAGE_MESSAGES,
    STAGE_TICK_INTERVAL, START_PERCENT,
};
pub use state::{AppState, Dialog, Phase};
pub use theme::Theme;
pub use types::{
    ConversionError, ConversionReceipt, ConversionRequest, ErrorKind, OutputFormat, VideoInfo,
};
pub use update::update;
pub use validate::is_valid_video_url;
pub use view_model::{AppViewModel, ProgressView, UrlValidity};
