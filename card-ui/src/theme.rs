/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Design tokens shared by every section of the page.
//!
//! The theme is built once per process and handed to components as a
//! `&'static Theme` prop. Nothing mutates it after construction.

use std::fmt;

use once_cell::sync::Lazy;

use crate::constants::DIRECTION;

/// Horizontal writing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An sRGB colour with an optional alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Mix the colour towards white by `coefficient` (0.0..=1.0).
    ///
    /// Channels are truncated, not rounded, so `#83c5be` lightened by 0.2
    /// gives `#9bd0cb`.
    pub fn lighten(self, coefficient: f32) -> Self {
        let coefficient = coefficient.clamp(0.0, 1.0);
        let mix = |c: u8| -> u8 { (f32::from(c) + f32::from(255 - c) * coefficient) as u8 };
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
            alpha: self.alpha,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

/// Main colour plus the derived light variant and the text colour used on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteColor {
    pub main: Color,
    pub light: Color,
    pub contrast_text: Color,
}

impl PaletteColor {
    /// Offset used to derive `light` from `main`.
    pub const TONAL_OFFSET: f32 = 0.2;

    pub fn new(main: Color, contrast_text: Color) -> Self {
        Self {
            main,
            light: main.lighten(Self::TONAL_OFFSET),
            contrast_text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub info: PaletteColor,
    pub background_default: Color,
    pub background_paper: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub body_text: Color,
    pub divider: Color,
    pub grey_900: Color,
    pub grey_100: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    /// Base corner radius in px.
    pub border_radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub direction: Direction,
    pub typography: Typography,
    pub palette: Palette,
    pub shape: Shape,
    /// Base spacing unit in px.
    pub spacing_unit: f32,
}

impl Theme {
    /// The light, right-to-left theme of the landing page.
    pub fn card_default() -> Self {
        Self {
            direction: DIRECTION,
            typography: Typography {
                font_family: r#"Vazir, "IRANSans", "Segoe UI", sans-serif"#,
            },
            palette: Palette {
                primary: PaletteColor::new(Color::rgb(0x00, 0x6d, 0x77), Color::WHITE),
                secondary: PaletteColor::new(
                    Color::rgb(0x83, 0xc5, 0xbe),
                    Color::rgba(0, 0, 0, 0.87),
                ),
                info: PaletteColor::new(Color::rgb(0x02, 0x88, 0xd1), Color::WHITE),
                background_default: Color::rgb(0xf5, 0xf5, 0xf5),
                background_paper: Color::WHITE,
                text_primary: Color::rgba(0, 0, 0, 0.87),
                text_secondary: Color::rgba(0, 0, 0, 0.6),
                body_text: Color::rgb(0x1f, 0x29, 0x33),
                divider: Color::rgba(0, 0, 0, 0.12),
                grey_900: Color::rgb(0x21, 0x21, 0x21),
                grey_100: Color::rgb(0xf5, 0xf5, 0xf5),
            },
            shape: Shape {
                border_radius: 16.0,
            },
            spacing_unit: 8.0,
        }
    }

    /// `factor` spacing units as a CSS length.
    pub fn spacing(&self, factor: f32) -> String {
        px(self.spacing_unit * factor)
    }

    /// `factor` times the base corner radius as a CSS length.
    pub fn radius(&self, factor: f32) -> String {
        px(self.shape.border_radius * factor)
    }

    /// Banner background: primary to secondary, diagonally.
    pub fn hero_gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.palette.primary.main, self.palette.secondary.main
        )
    }

    /// Background of the mock card in the preview section.
    pub fn mockup_gradient(&self) -> String {
        format!(
            "linear-gradient(160deg, {} 0%, {} 90%)",
            self.palette.secondary.light,
            Color::WHITE
        )
    }
}

fn px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

static THEME: Lazy<Theme> = Lazy::new(|| {
    log::debug!("Building theme");
    Theme::card_default()
});

/// The process-wide theme.
pub fn theme() -> &'static Theme {
    Lazy::force(&THEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_formats_as_hex_or_rgba() {
        assert_eq!(Color::rgb(0x00, 0x6d, 0x77).to_string(), "#006d77");
        assert_eq!(Color::rgba(0, 0, 0, 0.6).to_string(), "rgba(0, 0, 0, 0.6)");
    }

    #[test]
    fn lighten_truncates_channels() {
        let secondary = Color::rgb(0x83, 0xc5, 0xbe);
        assert_eq!(secondary.lighten(0.2).to_string(), "#9bd0cb");
        assert_eq!(secondary.lighten(0.0), secondary);
        assert_eq!(secondary.lighten(1.0), Color::WHITE);
        // Out-of-range coefficients are clamped.
        assert_eq!(secondary.lighten(4.0), Color::WHITE);
    }

    #[test]
    fn default_theme_is_rtl_with_brand_colors() {
        let theme = Theme::card_default();
        assert_eq!(theme.direction, Direction::Rtl);
        assert_eq!(theme.palette.primary.main.to_string(), "#006d77");
        assert_eq!(theme.palette.primary.contrast_text.to_string(), "#ffffff");
        assert_eq!(theme.palette.secondary.main.to_string(), "#83c5be");
        assert_eq!(theme.palette.background_default.to_string(), "#f5f5f5");
        assert!(theme.typography.font_family.starts_with("Vazir"));
    }

    #[test]
    fn spacing_and_radius_scale_base_units() {
        let theme = Theme::card_default();
        assert_eq!(theme.spacing(2.0), "16px");
        assert_eq!(theme.spacing(1.5), "12px");
        assert_eq!(theme.spacing(0.5), "4px");
        assert_eq!(theme.radius(1.0), "16px");
        assert_eq!(theme.radius(0.25), "4px");
    }

    #[test]
    fn gradients_use_palette() {
        let theme = Theme::card_default();
        assert_eq!(
            theme.hero_gradient(),
            "linear-gradient(135deg, #006d77 0%, #83c5be 100%)"
        );
        assert_eq!(
            theme.mockup_gradient(),
            "linear-gradient(160deg, #9bd0cb 0%, #ffffff 90%)"
        );
    }

    #[test]
    fn theme_singleton_is_shared() {
        assert!(std::ptr::eq(theme(), theme()));
    }
}
