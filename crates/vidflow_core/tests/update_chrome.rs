use vidflow_core::{update, AppState, Effect, Msg, Theme};

#[test]
fn theme_toggle_flips_and_persists() {
    let state = AppState::new();
    assert_eq!(state.view().theme, Theme::Dark);

    let (state, effects) = update(state, Msg::ThemeToggled);
    assert_eq!(state.view().theme, Theme::Light);
    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Light)]);
}

#[test]
fn double_toggle_returns_to_the_original_theme() {
    let state = AppState::new();
    let original = state.view().theme;

    let (state, _) = update(state, Msg::ThemeToggled);
    let (state, _) = update(state, Msg::ThemeToggled);
    assert_eq!(state.view().theme, original);
}

#[test]
fn theme_survives_a_simulated_reload() {
    let (state, _) = update(AppState::new(), Msg::ThemeToggled);
    let stored = state.view().theme.as_str().to_string();

    // A fresh page load restores from the persisted token.
    let restored = Theme::from_str(&stored).unwrap_or_default();
    let (state, _) = update(AppState::new(), Msg::ThemeRestored(restored));
    assert_eq!(state.view().theme, Theme::Light);
}

#[test]
fn unknown_theme_token_falls_back_to_dark() {
    assert_eq!(Theme::from_str("solarized"), None);
    assert_eq!(Theme::from_str("solarized").unwrap_or_default(), Theme::Dark);
}

#[test]
fn opening_one_faq_item_closes_the_previous() {
    let (state, _) = update(AppState::new(), Msg::FaqToggled(0));
    assert_eq!(state.view().faq_open, Some(0));

    let (state, _) = update(state, Msg::FaqToggled(2));
    assert_eq!(state.view().faq_open, Some(2));
}

#[test]
fn clicking_the_open_faq_item_closes_it() {
    let (state, _) = update(AppState::new(), Msg::FaqToggled(1));
    let (state, _) = update(state, Msg::FaqToggled(1));
    assert_eq!(state.view().faq_open, None);
}
