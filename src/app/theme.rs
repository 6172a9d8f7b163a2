//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

pub const COLOR_SUPPORT_ENV: &str = "URNOTE_COLOR_SUPPORT";

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub folder_fg: Color,
    pub markdown_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub palette_border: Color,
    pub palette_bg: Color,
    pub palette_fg: Color,
    pub palette_selected_bg: Color,
    pub palette_selected_fg: Color,
    pub palette_muted_fg: Color,
    pub error_fg: Color,
    pub warning_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    let var = |name: &str| std::env::var(name).unwrap_or_default();
    color_support_from(&var(COLOR_SUPPORT_ENV), &var("COLORTERM"), &var("TERM"))
}

/// `forced` is the `URNOTE_COLOR_SUPPORT` override; unknown values are ignored.
pub fn color_support_from(forced: &str, colorterm: &str, term: &str) -> TerminalColorSupport {
    match forced.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
        "256" | "ansi256" => return TerminalColorSupport::Ansi256,
        "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
        _ => {}
    }

    let colorterm = colorterm.to_ascii_lowercase();
    let term = term.to_ascii_lowercase();
    let direct = |s: &str| s.contains("truecolor") || s.contains("24bit") || s.contains("direct");
    if direct(&colorterm) || direct(&term) {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            accent_fg: Color::Yellow,
            header_fg: Color::Cyan,
            folder_fg: Color::Blue,
            markdown_fg: Color::Green,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            palette_border: Color::Cyan,
            palette_bg: Color::Reset,
            palette_fg: Color::White,
            palette_selected_bg: Color::DarkGray,
            palette_selected_fg: Color::White,
            palette_muted_fg: Color::DarkGray,
            error_fg: Color::Red,
            warning_fg: Color::Yellow,
        }
    }
}

impl UiTheme {
    /// Defaults, then user settings, then downgraded to what the terminal can show.
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme.adapt_to_terminal_capabilities();
        theme
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    fn colors_mut(&mut self) -> [&mut Color; 16] {
        [
            &mut self.focus_border,
            &mut self.inactive_border,
            &mut self.accent_fg,
            &mut self.header_fg,
            &mut self.folder_fg,
            &mut self.markdown_fg,
            &mut self.selection_bg,
            &mut self.selection_fg,
            &mut self.palette_border,
            &mut self.palette_bg,
            &mut self.palette_fg,
            &mut self.palette_selected_bg,
            &mut self.palette_selected_fg,
            &mut self.palette_muted_fg,
            &mut self.error_fg,
            &mut self.warning_fg,
        ]
    }

    pub(crate) fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for color in self.colors_mut() {
            *color = map_color_for_support(*color, support);
        }
    }

    /// Unset or unparsable entries keep the current color.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let pairs: [(&mut Color, &Option<String>); 16] = [
            (&mut self.focus_border, &settings.focus_border),
            (&mut self.inactive_border, &settings.inactive_border),
            (&mut self.accent_fg, &settings.accent_fg),
            (&mut self.header_fg, &settings.header_fg),
            (&mut self.folder_fg, &settings.folder_fg),
            (&mut self.markdown_fg, &settings.markdown_fg),
            (&mut self.selection_bg, &settings.selection_bg),
            (&mut self.selection_fg, &settings.selection_fg),
            (&mut self.palette_border, &settings.palette_border),
            (&mut self.palette_bg, &settings.palette_bg),
            (&mut self.palette_fg, &settings.palette_fg),
            (&mut self.palette_selected_bg, &settings.palette_selected_bg),
            (&mut self.palette_selected_fg, &settings.palette_selected_fg),
            (&mut self.palette_muted_fg, &settings.palette_muted_fg),
            (&mut self.error_fg, &settings.error_fg),
            (&mut self.warning_fg, &settings.warning_fg),
        ];
        for (slot, value) in pairs {
            let Some(value) = value.as_deref() else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value, "ignoring unknown theme color"),
            }
        }
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        // Named colors and the first 16 indices are always available.
        (_, value) => value,
    }
}

fn nearest(r: u8, g: u8, b: u8, candidates: impl Iterator<Item = (u8, (u8, u8, u8))>) -> u8 {
    candidates
        .min_by_key(|(_, (pr, pg, pb))| color_distance_sq((r, g, b), (*pr, *pg, *pb)))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    nearest(r, g, b, (0..=255u8).map(|i| (i, ansi256_index_to_rgb(i))))
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    nearest(r, g, b, (0..16u8).map(|i| (i, ANSI16_RGB[i as usize])))
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => ANSI16_RGB[index as usize],
        16..=231 => {
            const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
            let offset = index - 16;
            (
                LEVELS[(offset / 36) as usize],
                LEVELS[((offset / 6) % 6) as usize],
                LEVELS[(offset % 6) as usize],
            )
        }
        _ => {
            let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
            (gray, gray, gray)
        }
    }
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (i32::from(x) - i32::from(y)).pow(2) as u32;
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Accepts `#RRGGBB`, a color name (`cyan`, `dark_gray`, `light_blue`, ...) or
/// an ANSI index (`0`..`255`).
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    if let Ok(index) = v.parse::<u8>() {
        return Some(Color::Indexed(index));
    }

    let c = match v.to_ascii_lowercase().replace('-', "_").as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
