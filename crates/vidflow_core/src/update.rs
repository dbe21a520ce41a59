use crate::{
    conversion_deadline, is_valid_video_url, AppState, Dialog, Effect, Msg, Phase,
};

const EMPTY_INPUT_TITLE: &str = "Error";
const EMPTY_INPUT_MESSAGE: &str = "Please enter a YouTube URL";
const INVALID_URL_TITLE: &str = "Invalid URL";
const INVALID_URL_MESSAGE: &str = "Please enter a valid YouTube URL";
const CONVERSION_FAILED_TITLE: &str = "Conversion Failed";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FormatPicked(format) => {
            state.set_format(format);
            state.mark_dirty();
            Vec::new()
        }
        Msg::QualityPicked(quality) => {
            state.set_quality(quality);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ConvertClicked => {
            // One conversion at a time: while a submission is active (or its
            // result dialog is still up) a new click is rejected outright.
            if state.phase() != Phase::Idle {
                return (state, Vec::new());
            }

            let url = state.url_input().trim().to_string();
            if url.is_empty() {
                state.show_dialog(Dialog::Error {
                    title: EMPTY_INPUT_TITLE.to_string(),
                    message: EMPTY_INPUT_MESSAGE.to_string(),
                });
                state.mark_dirty();
                return (state, Vec::new());
            }
            if !is_valid_video_url(&url) {
                state.show_dialog(Dialog::Error {
                    title: INVALID_URL_TITLE.to_string(),
                    message: INVALID_URL_MESSAGE.to_string(),
                });
                state.mark_dirty();
                return (state, Vec::new());
            }

            let request = state.begin_submission(url);
            state.mark_dirty();
            vec![
                Effect::StartTickers,
                Effect::FetchVideoInfo { url: request.url },
            ]
        }
        Msg::InfoFetched { info } => {
            if state.phase() != Phase::FetchingInfo {
                return (state, Vec::new());
            }
            state.note_video_info(info);
            state.mark_dirty();
            request_conversion(&mut state)
        }
        Msg::InfoFailed { message: _ } => {
            // Metadata is cosmetic; the conversion is still attempted with
            // the format-based fallback deadline.
            if state.phase() != Phase::FetchingInfo {
                return (state, Vec::new());
            }
            state.mark_dirty();
            request_conversion(&mut state)
        }
        Msg::ConversionDone { result } => {
            if state.phase() != Phase::Converting {
                return (state, Vec::new());
            }
            match result {
                Ok(receipt) => {
                    state.progress_mut().complete();
                    state.settle(Phase::Succeeded);
                    state.show_dialog(Dialog::Success {
                        filename: receipt.filename,
                    });
                }
                Err(failure) => {
                    state.settle(Phase::Failed);
                    state.show_dialog(Dialog::Error {
                        title: CONVERSION_FAILED_TITLE.to_string(),
                        message: failure.user_message(),
                    });
                }
            }
            state.mark_dirty();
            vec![Effect::StopTickers]
        }
        Msg::ProgressTick { jitter, since_last } => {
            if !state.phase().in_flight() {
                return (state, Vec::new());
            }
            state.progress_mut().tick(jitter, since_last);
            state.mark_dirty();
            Vec::new()
        }
        Msg::StageTick { elapsed } => {
            if !state.phase().in_flight() {
                return (state, Vec::new());
            }
            state.progress_mut().advance_message(elapsed);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DownloadClicked => {
            let filename = match state.dialog() {
                Some(Dialog::Success { filename }) => filename.clone(),
                _ => return (state, Vec::new()),
            };
            state.close_dialog();
            state.mark_dirty();
            vec![Effect::OpenDownload { filename }]
        }
        Msg::DialogDismissed => {
            state.close_dialog();
            state.mark_dirty();
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            state.mark_dirty();
            vec![Effect::PersistTheme(theme)]
        }
        Msg::ThemeRestored(theme) => {
            state.set_theme(theme);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FaqToggled(index) => {
            state.faq_mut().toggle(index);
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Shared `FetchingInfo -> Converting` transition; the deadline comes from
/// whatever duration the info fetch produced (possibly none).
fn request_conversion(state: &mut AppState) -> Vec<Effect> {
    let request = match state.submission() {
        Some(request) => request.clone(),
        None => return Vec::new(),
    };
    let duration = state
        .video_info()
        .and_then(|info| info.duration.as_deref())
        .map(str::to_owned);
    let deadline = conversion_deadline(duration.as_deref(), request.format);
    state.enter_converting();
    vec![Effect::RequestConversion { request, deadline }]
}
