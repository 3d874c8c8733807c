//! Applies derived palettes to a live application.
//!
//! The "current application" is an explicit [`PaletteHost`] handle
//! rather than a hidden process-wide singleton: callers own the handle
//! and pass it in, preserving the one-active-theme-at-a-time
//! semantics without global mutable state.

use crate::error::ThemeError;
use crate::palette::{ColorGroup, ColorRole, Palette, derive_palette};
use crate::repository::load_color_scheme;
use crate::scheme::ColorScheme;

/// Widget class receiving the alternating-row palette fix in dark
/// themes. Hosts map this to their toolkit's item-view widgets.
pub const ITEM_VIEW_WIDGET_CLASS: &str = "ItemView";

/// A running application whose palette this crate manages.
///
/// The host is treated as a single external resource that is read and
/// replaced wholesale; palettes are never partially updated.
pub trait PaletteHost {
    /// Whether a live UI exists. Palette application fails with
    /// [`ThemeError::NoApplication`] while this is false.
    fn is_running(&self) -> bool;

    /// The palette currently in effect.
    fn palette(&self) -> Palette;

    /// Replaces the application-wide palette.
    fn set_palette(&mut self, palette: Palette);

    /// Replaces the palette for one widget class only. Hosts without
    /// per-class palettes can ignore this.
    fn set_widget_palette(&mut self, _widget_class: &str, _palette: Palette) {}

    /// Switches the toolkit's widget style. Cosmetic; defaults to a
    /// no-op.
    fn set_style(&mut self, _name: &str) {}
}

/// Selects a scheme either by repository name or as an already-loaded
/// value.
#[derive(Debug, Clone)]
pub enum SchemeSpec {
    Named(String),
    Loaded(ColorScheme),
}

impl From<&str> for SchemeSpec {
    fn from(name: &str) -> Self {
        SchemeSpec::Named(name.into())
    }
}

impl From<String> for SchemeSpec {
    fn from(name: String) -> Self {
        SchemeSpec::Named(name)
    }
}

impl From<ColorScheme> for SchemeSpec {
    fn from(scheme: ColorScheme) -> Self {
        SchemeSpec::Loaded(scheme)
    }
}

/// Resolves `spec`, derives its palette and applies it to `host`.
///
/// Dark themes additionally receive an item-view palette whose
/// alternate-base color matches the window background, keeping
/// alternating rows legible on dark surfaces. Returns the scheme that
/// was applied.
pub fn set_color_scheme(
    host: &mut impl PaletteHost,
    spec: impl Into<SchemeSpec>,
) -> Result<ColorScheme, ThemeError> {
    if !host.is_running() {
        return Err(ThemeError::NoApplication);
    }

    let scheme = match spec.into() {
        SchemeSpec::Named(name) => load_color_scheme(&name)?,
        SchemeSpec::Loaded(scheme) => {
            scheme.validate()?;
            scheme
        }
    };

    let palette = derive_palette(&scheme)?;

    // The application-wide palette must land first: toolkits clear
    // per-class palettes when the global one is replaced, so the
    // item-view palette would be dropped in the opposite order.
    tracing::debug!(entries = palette.len(), "applying palette");
    host.set_palette(palette.clone());

    if scheme.is_dark_theme()? {
        let mut item_view = palette.clone();
        if let Some(window) = palette.color(ColorGroup::Active, ColorRole::Window) {
            item_view.set_color(ColorRole::AlternateBase, window);
        }
        host.set_widget_palette(ITEM_VIEW_WIDGET_CLASS, item_view);
    }

    Ok(scheme)
}

/// Forwards a widget style name to the host. Does nothing when no
/// application is running.
pub fn set_style(host: &mut impl PaletteHost, name: &str) {
    if host.is_running() {
        host.set_style(name);
    }
}
