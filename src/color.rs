use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ThemeError;

/// An RGBA color with components in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Creates an opaque color from a `0xRRGGBB` hex value.
pub fn rgb(hex: u32) -> Rgba {
    rgb_a(hex, 1.0)
}

/// Creates a color from a `0xRRGGBB` hex value and an alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

impl Rgba {
    /// The HSV value channel (the maximum of the RGB components),
    /// used as the lightness measure throughout palette derivation.
    pub fn value(&self) -> f32 {
        self.r.max(self.g.max(self.b))
    }

    pub fn to_hsva(&self) -> Hsva {
        let max = self.value();
        let min = self.r.min(self.g.min(self.b));
        let d = max - min;

        let h = if d == 0.0 {
            0.0
        } else if max == self.r {
            ((self.g - self.b) / d).rem_euclid(6.0) / 6.0
        } else if max == self.g {
            ((self.b - self.r) / d + 2.0) / 6.0
        } else {
            ((self.r - self.g) / d + 4.0) / 6.0
        };

        let s = if max == 0.0 { 0.0 } else { d / max };

        Hsva { h, s, v: max, a: self.a }
    }

    /// Returns a darker color, with the value channel scaled by
    /// `100 / factor` and hue/saturation preserved. A factor of 125
    /// multiplies the value by 0.8; factors below 100 lighten instead.
    pub fn darker(self, factor: f32) -> Rgba {
        let mut hsva = self.to_hsva();
        hsva.v = (hsva.v * 100.0 / factor).clamp(0.0, 1.0);
        hsva.to_rgba()
    }

    /// Inverts the value channel (`v' = 1 - v`), preserving hue,
    /// saturation and alpha.
    pub fn invert_value(self) -> Rgba {
        let mut hsva = self.to_hsva();
        hsva.v = 1.0 - hsva.v;
        hsva.to_rgba()
    }

    /// Formats the color as `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] =
            [self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);

        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ThemeError;

    /// Parses `#RGB`, `#RRGGBB`, `#RRGGBBAA` or a named color.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ThemeError::InvalidColor(value.into()));
        }

        named_color(value).ok_or_else(|| ThemeError::InvalidColor(value.into()))
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        // #rgb doubles each digit.
        3 => {
            let value = u32::from_str_radix(hex, 16).ok()?;
            let [r, g, b] = [8, 4, 0].map(|shift| (value >> shift) & 0xf);
            Some(rgb((r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)))
        }
        6 => Some(rgb(u32::from_str_radix(hex, 16).ok()?)),
        8 => {
            let value = u32::from_str_radix(hex, 16).ok()?;
            Some(rgb_a(value >> 8, ((value & 0xff) as f32) / 255.0))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Rgba> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => rgb(0x000000),
        "white" => rgb(0xffffff),
        "red" => rgb(0xff0000),
        "green" => rgb(0x008000),
        "blue" => rgb(0x0000ff),
        "cyan" => rgb(0x00ffff),
        "magenta" => rgb(0xff00ff),
        "yellow" => rgb(0xffff00),
        "orange" => rgb(0xffa500),
        "gray" | "grey" => rgb(0x808080),
        "transparent" => rgb_a(0x000000, 0.0),
        _ => return None,
    };

    Some(color)
}

/// An HSVA color. Hue is normalized to `0.0..1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsva {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl Hsva {
    pub fn to_rgba(&self) -> Rgba {
        let h = self.h.rem_euclid(1.0) * 6.0;
        let c = self.v * self.s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = match h as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgba {
            r: r + m,
            g: g + m,
            b: b + m,
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "expected {a} to be close to {b}");
    }

    #[test]
    fn test_parse_six_digit_hex() {
        let color: Rgba = "#1e1e2e".parse().unwrap();
        assert_close(color.r, 0x1e as f32 / 255.0);
        assert_close(color.g, 0x1e as f32 / 255.0);
        assert_close(color.b, 0x2e as f32 / 255.0);
        assert_close(color.a, 1.0);
    }

    #[test]
    fn test_parse_three_digit_hex() {
        let color: Rgba = "#fa0".parse().unwrap();
        assert_eq!(color, rgb(0xffaa00));
    }

    #[test]
    fn test_parse_eight_digit_hex() {
        let color: Rgba = "#11223380".parse().unwrap();
        assert_eq!(color.to_hex(), "#11223380");
        assert_close(color.a, 128.0 / 255.0);
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!("white".parse::<Rgba>().unwrap(), rgb(0xffffff));
        assert_eq!("Magenta".parse::<Rgba>().unwrap(), rgb(0xff00ff));
    }

    #[test]
    fn test_parse_invalid_color() {
        assert!("#12345".parse::<Rgba>().is_err());
        assert!("#zzzzzz".parse::<Rgba>().is_err());
        assert!("not-a-color".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_value_is_max_component() {
        assert_close(rgb(0x336699).value(), 0x99 as f32 / 255.0);
        assert_close(rgb(0x000000).value(), 0.0);
        assert_close(rgb(0xffffff).value(), 1.0);
    }

    #[test]
    fn test_hsv_round_trip() {
        for hex in [0x1e1e2e, 0xf38ba8, 0x88c0d0, 0xffffff, 0x000000] {
            let color = rgb(hex);
            let back = color.to_hsva().to_rgba();
            assert_close(back.r, color.r);
            assert_close(back.g, color.g);
            assert_close(back.b, color.b);
        }
    }

    #[test]
    fn test_darker_scales_value() {
        let color = rgb(0x5090ff);
        let darker = color.darker(125.0);
        assert_close(darker.value(), color.value() * 0.8);

        let hsva = color.to_hsva();
        let darker_hsva = darker.to_hsva();
        assert_close(hsva.h, darker_hsva.h);
        assert_close(hsva.s, darker_hsva.s);
    }

    #[test]
    fn test_invert_value_flips_lightness() {
        let bright = rgb(0xf0f0f0);
        let inverted = bright.invert_value();
        assert_close(inverted.value(), 1.0 - bright.value());

        // Inverting twice restores the original value.
        assert_close(inverted.invert_value().value(), bright.value());
    }
}
