use std::time::Duration;

use crate::{ConversionRequest, Theme};

/// IO the platform layer performs on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the metadata request (fixed 30 s deadline, non-fatal).
    FetchVideoInfo { url: String },
    /// Issue the conversion request with its computed deadline.
    RequestConversion {
        request: ConversionRequest,
        deadline: Duration,
    },
    /// Start the submission's progress and stage-message tickers.
    StartTickers,
    /// Cancel both tickers; emitted on every exit path.
    StopTickers,
    /// Navigate to the server's download path for a finished conversion.
    OpenDownload { filename: String },
    /// Re-persist the theme preference.
    PersistTheme(Theme),
}
