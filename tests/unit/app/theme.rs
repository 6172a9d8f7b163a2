use super::*;

#[test]
fn parse_color_accepts_hex_names_and_indices() {
    assert_eq!(parse_color("#1E90ff"), Some(Color::Rgb(0x1E, 0x90, 0xFF)));
    assert_eq!(parse_color(" cyan "), Some(Color::Cyan));
    assert_eq!(parse_color("dark_gray"), Some(Color::DarkGray));
    assert_eq!(parse_color("Light-Blue"), Some(Color::LightBlue));
    assert_eq!(parse_color("244"), Some(Color::Indexed(244)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
}

#[test]
fn parse_color_rejects_garbage() {
    assert_eq!(parse_color(""), None);
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#GG0000"), None);
    assert_eq!(parse_color("chartreuse"), None);
    assert_eq!(parse_color("256"), None);
}

#[test]
fn default_settings_match_default_theme() {
    let mut theme = UiTheme::default();
    theme.apply_settings(&ThemeSettings::default());
    assert_eq!(theme, UiTheme::default());
}

#[test]
fn settings_override_only_valid_entries() {
    let settings = ThemeSettings {
        folder_fg: Some("#102030".to_string()),
        error_fg: Some("not-a-color".to_string()),
        palette_bg: None,
        ..ThemeSettings::default()
    };
    let mut theme = UiTheme::default();
    theme.apply_settings(&settings);

    assert_eq!(theme.folder_fg, Color::Rgb(0x10, 0x20, 0x30));
    assert_eq!(theme.error_fg, Color::Red);
    assert_eq!(theme.palette_bg, Color::Reset);
}

#[test]
fn ansi256_fallback_converts_rgb_to_indexed_colors() {
    let mut theme = UiTheme {
        accent_fg: Color::Rgb(0xFF, 0x00, 0x00),
        ..UiTheme::default()
    };
    theme.apply_color_support(TerminalColorSupport::Ansi256);

    assert_eq!(theme.accent_fg, Color::Indexed(9));
    assert_eq!(theme.focus_border, Color::Cyan);
}

#[test]
fn ansi16_fallback_maps_high_indices_into_basic_range() {
    let mut theme = UiTheme {
        accent_fg: Color::Rgb(0x00, 0x00, 0x00),
        header_fg: Color::Indexed(231),
        ..UiTheme::default()
    };
    theme.apply_color_support(TerminalColorSupport::Ansi16);

    assert_eq!(theme.accent_fg, Color::Indexed(0));
    assert_eq!(theme.header_fg, Color::Indexed(15));
}

#[test]
fn truecolor_keeps_rgb() {
    let mut theme = UiTheme {
        accent_fg: Color::Rgb(1, 2, 3),
        ..UiTheme::default()
    };
    theme.apply_color_support(TerminalColorSupport::TrueColor);
    assert_eq!(theme.accent_fg, Color::Rgb(1, 2, 3));
}

#[test]
fn color_support_detection() {
    assert_eq!(
        color_support_from("", "truecolor", "xterm"),
        TerminalColorSupport::TrueColor
    );
    assert_eq!(
        color_support_from("", "", "xterm-256color"),
        TerminalColorSupport::Ansi256
    );
    assert_eq!(
        color_support_from("", "", "linux"),
        TerminalColorSupport::Ansi16
    );
    assert_eq!(
        color_support_from("16", "truecolor", "xterm-256color"),
        TerminalColorSupport::Ansi16
    );
    assert_eq!(
        color_support_from("bogus", "", "xterm-256color"),
        TerminalColorSupport::Ansi256
    );
}
