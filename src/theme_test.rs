use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggling_twice_returns_to_the_original_theme() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn attribute_values_match_stylesheet_contract() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn pressed_reflects_dark_mode() {
    assert!(!Theme::Light.pressed());
    assert!(Theme::Dark.pressed());
}

#[test]
fn toggle_label_names_the_next_theme() {
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
}

#[test]
fn icon_shows_the_mode_a_press_switches_into() {
    assert_eq!(Theme::Light.icon(), "🌙");
    assert_eq!(Theme::Dark.icon(), "☀️");
}
