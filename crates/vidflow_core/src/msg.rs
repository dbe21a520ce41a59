use std::time::Duration;

use crate::{ConversionError, ConversionReceipt, OutputFormat, Theme, VideoInfo};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User picked an output format.
    FormatPicked(OutputFormat),
    /// User picked a quality option.
    QualityPicked(String),
    /// User submitted the current input for conversion.
    ConvertClicked,
    /// Metadata request settled successfully.
    InfoFetched { info: VideoInfo },
    /// Metadata request failed; the flow still proceeds to conversion.
    InfoFailed { message: String },
    /// Conversion request settled.
    ConversionDone {
        result: Result<ConversionReceipt, ConversionError>,
    },
    /// Simulated-progress tick from the platform timer (500 ms cadence).
    /// `jitter` is in `[0, 1)`; `since_last` is real time since the
    /// previous tick.
    ProgressTick { jitter: f64, since_last: Duration },
    /// Stage-message tick (3 s cadence); `elapsed` is real time since the
    /// submission started.
    StageTick { elapsed: Duration },
    /// User chose Download in the success dialog.
    DownloadClicked,
    /// User dismissed whichever dialog is showing.
    DialogDismissed,
    /// User clicked the theme toggle.
    ThemeToggled,
    /// Persisted preference applied once at startup.
    ThemeRestored(Theme),
    /// User clicked an FAQ item's header.
    FaqToggled(usize),
    /// Fallback for placeholder wiring.
    NoOp,
}
