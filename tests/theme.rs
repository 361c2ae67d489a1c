use marquee::{MarqueeError, Theme};
use std::io::Write;

#[test]
fn test_builtin_themes_parse() {
    for name in [
        "catppuccin-mocha",
        "catppuccin-latte",
        "catppuccin-frappe",
        "catppuccin-macchiato",
    ] {
        let theme = Theme::from_name(name).expect("builtin theme should parse");
        assert_eq!(theme.name, name);
    }
}

#[test]
fn test_unknown_builtin_name_is_none() {
    assert!(Theme::from_name("solarized-dark").is_none());
}

#[test]
fn test_default_theme_is_mocha() {
    assert_eq!(Theme::default().name, "catppuccin-mocha");
}

#[test]
fn test_theme_loads_from_custom_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
name = "projector-booth"

[colors]
header_fg = "#ffffff"
selection_fg = "#000000"
selection_bg = "#ffcc00"
text_normal = "#dddddd"
text_dim = "#777777"
border = "#444444"
search_bar_border = "#ffcc00"
match_highlight_fg = "#000000"
match_highlight_bg = "#00ccff"
empty_state_fg = "#00ccff"
sort_indicator_fg = "#ffcc00"
chip_fg = "#000000"
chip_bg = "#00ffcc"
pager_current_fg = "#000000"
pager_current_bg = "#00ccff"
pager_disabled_fg = "#444444"
panel_border = "#00ffcc"
"##
    )
    .unwrap();

    let theme = Theme::from_file(file.path()).unwrap();
    assert_eq!(theme.name, "projector-booth");
    assert_eq!(theme.colors.selection_bg, "#ffcc00");
    assert!(theme.colors.header_bg.is_none());
}

#[test]
fn test_missing_theme_file_errors() {
    let result = Theme::from_file("/nonexistent/theme.toml");
    assert!(matches!(result, Err(MarqueeError::Theme(_))));
}

#[test]
fn test_invalid_theme_toml_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "name = \"broken").unwrap();

    let result = Theme::from_file(file.path());
    assert!(matches!(result, Err(MarqueeError::Theme(_))));
}

#[test]
fn test_hex_colors_render_as_truecolor_sequences() {
    assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
    assert_eq!(Theme::bg("00ff00"), "\u{1b}[48;2;0;255;0m");
    // Malformed hex falls back to white rather than erroring.
    assert_eq!(Theme::fg("#xyz"), "\u{1b}[38;2;255;255;255m");
}
