use vidflow_core::is_valid_video_url;

#[test]
fn accepts_the_standard_watch_form() {
    assert!(is_valid_video_url(
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    ));
    assert!(is_valid_video_url("http://youtube.com/watch?v=dQw4w9WgXcQ"));
}

#[test]
fn accepts_short_link_embed_and_v_forms() {
    assert!(is_valid_video_url("https://youtu.be/dQw4w9WgXcQ"));
    assert!(is_valid_video_url("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    assert!(is_valid_video_url("https://www.youtube.com/v/dQw4w9WgXcQ"));
    assert!(is_valid_video_url(
        "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"
    ));
}

#[test]
fn scheme_is_optional() {
    assert!(is_valid_video_url("www.youtube.com/watch?v=dQw4w9WgXcQ"));
    assert!(is_valid_video_url("youtu.be/dQw4w9WgXcQ"));
}

#[test]
fn accepts_a_bare_identifier_path() {
    assert!(is_valid_video_url("https://youtube.com/dQw4w9WgXcQ"));
}

#[test]
fn rejects_unrecognized_hosts() {
    assert!(!is_valid_video_url("https://example.com/video"));
    assert!(!is_valid_video_url(
        "https://vimeo.com/watch?v=dQw4w9WgXcQ"
    ));
    assert!(!is_valid_video_url("https://notyoutube.com/dQw4w9WgXcQ"));
}

#[test]
fn rejects_short_or_separator_laden_identifiers() {
    assert!(!is_valid_video_url("https://youtu.be/short"));
    assert!(!is_valid_video_url("https://www.youtube.com/watch?v=abc"));
    assert!(!is_valid_video_url("https://www.youtube.com/watch?v=a%b=c&d?ef"));
    assert!(!is_valid_video_url("https://www.youtube.com/watch"));
}

#[test]
fn rejects_empty_and_garbage_input() {
    assert!(!is_valid_video_url(""));
    assert!(!is_valid_video_url("   "));
    assert!(!is_valid_video_url("not a url at all"));
}

#[test]
fn trailing_query_noise_does_not_break_a_valid_identifier() {
    assert!(is_valid_video_url(
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"
    ));
}
