//! Expands a [`ColorScheme`] into a complete [`Palette`].

use crate::color::Hsva;
use crate::error::ThemeError;
use crate::palette::{ColorGroup, ColorRole, Palette};
use crate::scheme::{ColorScheme, SchemeField};

/// `primary` lightness above which highlighted text switches from
/// `text` to `mantle`. The cutoff is exact: a value of exactly 0.5
/// still selects `text`.
const HIGHLIGHTED_TEXT_CUTOFF: f32 = 0.5;

/// Factor applied to `primary` for link colors, matching toolkit
/// `darker()` semantics (value channel scaled by `100 / factor`).
const LINK_DARKEN_FACTOR: f32 = 125.0;

/// Derives the full widget palette for `scheme`.
///
/// Pure and deterministic: the same scheme always produces an
/// identical palette. Fails fast with [`ThemeError::MissingField`] on
/// an incomplete scheme; no partial palette is ever produced.
///
/// Directly mapped roles copy the scheme color untouched. The
/// Light/Midlight/Mid/Dark/Shadow bevel ramp is computed in HSV space
/// from the hue and saturation of `base`, with value channels
/// interpolated between anchors selected by theme polarity:
///
/// - dark themes anchor on `text` (the brightest color) and produce
///   `shadow < light < midlight < button < mid < dark < text`;
/// - light themes swap the anchor to `crust`, flipping the ramp
///   direction relative to `button`.
pub fn derive_palette(scheme: &ColorScheme) -> Result<Palette, ThemeError> {
    scheme.validate()?;

    let primary = scheme.require(SchemeField::Primary)?;
    let text = scheme.require(SchemeField::Text)?;
    let surface0 = scheme.require(SchemeField::Surface0)?;
    let base = scheme.require(SchemeField::Base)?;
    let mantle = scheme.require(SchemeField::Mantle)?;
    let crust = scheme.require(SchemeField::Crust)?;

    let highlighted_text = if primary.value() > HIGHLIGHTED_TEXT_CUTOFF {
        mantle
    } else {
        text
    };

    let mut palette = Palette::new();

    // Directly mapped roles.
    palette.set_color(ColorRole::Window, base);
    palette.set_color(ColorRole::WindowText, text);
    palette.set_color(ColorRole::Base, mantle);
    palette.set_color(ColorRole::AlternateBase, surface0);
    palette.set_color(ColorRole::ToolTipBase, mantle);
    palette.set_color(ColorRole::ToolTipText, text);
    palette.set_color(ColorRole::PlaceholderText, text);
    palette.set_color(ColorRole::Text, text);
    palette.set_color(ColorRole::Button, base);
    palette.set_color(ColorRole::ButtonText, text);
    palette.set_color(ColorRole::BrightText, text.invert_value());

    palette.set_color(ColorRole::Highlight, primary);
    palette.set_color(ColorRole::HighlightedText, highlighted_text);
    palette.set_color(ColorRole::Accent, primary);

    palette.set_color(ColorRole::Link, primary.darker(LINK_DARKEN_FACTOR));
    palette.set_color(ColorRole::LinkVisited, primary.darker(LINK_DARKEN_FACTOR));

    // Bevel ramp: hue and saturation come from `base`, values are
    // interpolated between the polarity-dependent anchors.
    let Hsva { h, s, v: button_v, a } = base.to_hsva();

    let light_v = mantle.value();
    let black_v = if scheme.is_dark_theme()? {
        text.value()
    } else {
        crust.value()
    };

    let midlight = Hsva { h, s, v: lerp(button_v, light_v, 0.5), a }.to_rgba();
    let mid = Hsva { h, s, v: lerp(black_v, button_v, 0.65), a }.to_rgba();
    let dark = Hsva { h, s, v: lerp(black_v, button_v, 0.35), a }.to_rgba();

    palette.set_color(ColorRole::Light, mantle);
    palette.set_color(ColorRole::Midlight, midlight);
    palette.set_color(ColorRole::Mid, mid);
    palette.set_color(ColorRole::Dark, dark);
    palette.set_color(ColorRole::Shadow, crust);

    // Disabled entries are a fixed role-by-role mapping, not a
    // brightness transform of the active group. Roles not listed here
    // keep their active color.
    let disabled = ColorGroup::Disabled;
    palette.set_group_color(disabled, ColorRole::WindowText, dark);
    palette.set_group_color(disabled, ColorRole::Base, base);
    palette.set_group_color(disabled, ColorRole::AlternateBase, base);

    palette.set_group_color(disabled, ColorRole::PlaceholderText, dark);
    palette.set_group_color(disabled, ColorRole::Text, dark);
    palette.set_group_color(disabled, ColorRole::Button, surface0);
    palette.set_group_color(disabled, ColorRole::ButtonText, dark);
    palette.set_group_color(disabled, ColorRole::BrightText, mantle);

    palette.set_group_color(disabled, ColorRole::Highlight, base);
    palette.set_group_color(disabled, ColorRole::HighlightedText, surface0);

    palette.set_group_color(disabled, ColorRole::Link, dark);
    palette.set_group_color(disabled, ColorRole::LinkVisited, dark);

    Ok(palette)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}
