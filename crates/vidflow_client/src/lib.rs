//! VidFlow client: HTTP access to the conversion service.
mod api;
mod handle;
mod types;

pub use api::{ApiSettings, ConvertApi, ReqwestApi};
pub use handle::{ClientCommands, ClientHandle};
pub use types::{
    ApiError, ClientEvent, ConversionReceipt, ConversionRequest, FailureKind, OutputFormat,
    VideoInfo,
};
