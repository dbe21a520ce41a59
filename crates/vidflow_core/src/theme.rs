/// Binary color-scheme preference, persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Storage token, the only value that crosses the persistence boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Inverse of [`Theme::as_str`]; unrecognized tokens yield `None` so the
    /// caller can fall back to the default.
    pub fn from_str(token: &str) -> Option<Self> {
        match token {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}
