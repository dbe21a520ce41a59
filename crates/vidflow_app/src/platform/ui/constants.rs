use egui::Color32;

/// Underline tint for a well-formed URL in the input field.
pub(crate) const VALID_URL_TINT: Color32 = Color32::from_rgb(34, 197, 94);

/// Underline tint for a malformed URL in the input field.
pub(crate) const INVALID_URL_TINT: Color32 = Color32::from_rgb(239, 68, 68);

pub(crate) const THUMBNAIL_MAX_WIDTH: f32 = 240.0;

/// Quality options offered for video output, as `(wire value, label)`.
pub(crate) const QUALITY_CHOICES: [(&str, &str); 5] = [
    ("best", "Best available"),
    ("1080", "1080p"),
    ("720", "720p"),
    ("480", "480p"),
    ("360", "360p"),
];

/// FAQ page content.
pub(crate) const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "Which formats can I convert to?",
        "MP4 video and MP3 audio. For MP4 you can also pick a target \
         resolution; MP3 always uses the best available audio stream.",
    ),
    (
        "Why does a long video take so long to convert?",
        "The server transcodes the whole source, so conversion time grows \
         with video length. The app waits proportionally longer for longer \
         videos, up to 30 minutes.",
    ),
    (
        "Where does my converted file end up?",
        "When a conversion finishes, the Download button opens the server's \
         download link in your browser, which saves the file wherever your \
         browser normally puts downloads.",
    ),
    (
        "Why did my conversion time out?",
        "Timeouts usually mean a slow connection or a very long source \
         video. Check your internet connection and try again; shorter \
         videos convert much faster.",
    ),
    (
        "Do I need an account?",
        "No. Paste a link, pick a format and convert. Nothing is stored \
         between sessions except your theme preference.",
    ),
];
