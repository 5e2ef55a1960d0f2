//! Light and dark palettes plus the color-token gradients used by section renderers.

use gyanify_core::config::ThemeColorOverrides;
use gyanify_core::content::ColorToken;
use gyanify_core::ThemeMode;
use ratatui::style::Color;

/// Runtime palette for one theme mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: Color,
    /// Card and status bar background
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    /// Filled part of the scroll progress bar
    pub progress: Color,
    /// Track behind the progress bar
    pub track: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::Rgb(0xf5, 0xf7, 0xff),
            surface: Color::Rgb(0xe0, 0xe7, 0xff),
            text: Color::Rgb(0x1f, 0x29, 0x37),
            muted: Color::Rgb(0x4b, 0x55, 0x63),
            accent: Color::Rgb(0x4f, 0x46, 0xe5),
            progress: Color::Rgb(0x3b, 0x82, 0xf6),
            track: Color::Rgb(0xc7, 0xd2, 0xfe),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::Rgb(0x11, 0x18, 0x27),
            surface: Color::Rgb(0x1e, 0x29, 0x3b),
            text: Color::Rgb(0xf9, 0xfa, 0xfb),
            muted: Color::Rgb(0xd1, 0xd5, 0xdb),
            accent: Color::Rgb(0xa7, 0x8b, 0xfa),
            progress: Color::Rgb(0x8b, 0x5c, 0xf6),
            track: Color::Rgb(0x33, 0x41, 0x55),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Palette for `mode` with the configured hex overrides applied
    pub fn load(mode: ThemeMode, overrides: &ThemeColorOverrides) -> Self {
        let mut palette = Self::for_mode(mode);
        let slots: [(&Option<String>, &mut Color); 6] = [
            (&overrides.background, &mut palette.background),
            (&overrides.surface, &mut palette.surface),
            (&overrides.text, &mut palette.text),
            (&overrides.muted, &mut palette.muted),
            (&overrides.accent, &mut palette.accent),
            (&overrides.progress, &mut palette.progress),
        ];
        for (hex, slot) in slots {
            if let Some(hex) = hex {
                match parse_hex_color(hex) {
                    Some(color) => *slot = color,
                    None => tracing::warn!("Ignoring invalid color override '{}'", hex),
                }
            }
        }
        palette
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

const BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
const CYAN: Color = Color::Rgb(0x06, 0xb6, 0xd4);
const GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
const EMERALD: Color = Color::Rgb(0x10, 0xb9, 0x81);
const VIOLET: Color = Color::Rgb(0x8b, 0x5c, 0xf6);
const PURPLE: Color = Color::Rgb(0xa8, 0x55, 0xf7);
const ORANGE: Color = Color::Rgb(0xf9, 0x73, 0x16);
const RED: Color = Color::Rgb(0xef, 0x44, 0x44);
const YELLOW: Color = Color::Rgb(0xea, 0xb3, 0x08);
const INDIGO: Color = Color::Rgb(0x63, 0x66, 0xf1);
const PINK: Color = Color::Rgb(0xec, 0x48, 0x99);
const TEAL: Color = Color::Rgb(0x14, 0xb8, 0xa6);
const ROSE: Color = Color::Rgb(0xf4, 0x3f, 0x5e);

/// Start and end color of a token's gradient
pub fn gradient(token: ColorToken) -> (Color, Color) {
    match token {
        ColorToken::BlueCyan => (BLUE, CYAN),
        ColorToken::GreenEmerald => (GREEN, EMERALD),
        ColorToken::VioletPurple => (VIOLET, PURPLE),
        ColorToken::OrangeRed => (ORANGE, RED),
        ColorToken::YellowOrange => (YELLOW, ORANGE),
        ColorToken::PurpleViolet => (PURPLE, VIOLET),
        ColorToken::IndigoBlue => (INDIGO, BLUE),
        ColorToken::RedPink => (RED, PINK),
        ColorToken::TealCyan => (TEAL, CYAN),
        ColorToken::PinkRose => (PINK, ROSE),
        ColorToken::EmeraldBlue => (EMERALD, BLUE),
        ColorToken::RedOrange => (RED, ORANGE),
        ColorToken::BlueViolet => (BLUE, VIOLET),
    }
}

/// Mix two colors; `t = 0` gives `from`, `t = 1` gives `to`.
/// Non-RGB colors snap at the halfway point.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| -> u8 {
                gyanify_core::animation::lerp(f64::from(a), f64::from(b), t).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        assert_eq!(parse_hex_color("#ff5500"), Some(Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        assert_eq!(parse_hex_color("#f50"), Some(Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_load_applies_overrides() {
        let overrides = ThemeColorOverrides {
            accent: Some("#ff0000".to_string()),
            text: Some("nonsense".to_string()),
            ..Default::default()
        };
        let palette = Palette::load(ThemeMode::Dark, &overrides);
        assert_eq!(palette.accent, Color::Rgb(255, 0, 0));
        assert_eq!(palette.text, Palette::dark().text);
    }

    #[test]
    fn test_modes_differ() {
        assert_ne!(Palette::light().background, Palette::dark().background);
        assert_eq!(Palette::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
    }

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(blend(black, white, 0.0), black);
        assert_eq!(blend(black, white, 1.0), white);
        assert_eq!(blend(black, white, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(blend(Color::Reset, white, 0.2), Color::Reset);
    }
}
