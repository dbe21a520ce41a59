use url::Url;

/// Length of a video identifier.
const ID_LEN: usize = 11;

/// Characters that may not appear inside a video identifier.
const ID_FORBIDDEN: [char; 4] = ['&', '=', '%', '?'];

/// Hosts recognized as video hosts, after an optional `www.` prefix.
const VIDEO_HOSTS: [&str; 6] = [
    "youtube.com",
    "youtube.be",
    "youtu.com",
    "youtu.be",
    "youtube-nocookie.com",
    "youtube-nocookie.be",
];

/// Returns true when `raw` looks like a video URL this client can submit.
///
/// Accepted: an optional `http://`/`https://` scheme, an optional `www.`
/// prefix, a recognized host, and an 11-character identifier in one of the
/// positional shapes `watch?v=ID`, `embed/ID`, `v/ID`, a leading `?v=ID`
/// query, or a bare `/ID` path (the short-link form).
///
/// Pure; used both for submit-time rejection and for live input styling on
/// every edit.
pub fn is_valid_video_url(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        return false;
    }

    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let parsed = match Url::parse(&with_scheme) {
        Ok(url) => url,
        Err(_) => return false,
    };

    let host = match parsed.host_str() {
        Some(host) => host.strip_prefix("www.").unwrap_or(host),
        None => return false,
    };
    if !VIDEO_HOSTS.contains(&host) {
        return false;
    }

    // Query shape: `?v=ID` (covers `watch?v=ID`).
    if let Some(id) = parsed.query().and_then(|q| q.strip_prefix("v=")) {
        if is_valid_id(id) {
            return true;
        }
    }

    // Path shapes: `embed/ID`, `v/ID`, or a bare `/ID`.
    let mut segments = parsed.path_segments().into_iter().flatten();
    match segments.next() {
        Some("embed") | Some("v") => segments.next().is_some_and(is_valid_id),
        Some(first) => is_valid_id(first),
        None => false,
    }
}

/// The first eleven characters must exist and stay clear of separators.
fn is_valid_id(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    for _ in 0..ID_LEN {
        match chars.next() {
            Some(c) if !ID_FORBIDDEN.contains(&c) => {}
            _ => return false,
        }
    }
    true
}
