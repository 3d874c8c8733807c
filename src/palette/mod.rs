//! The derived widget palette: a full mapping from
//! (color group, color role) to concrete colors.

use enum_assoc::Assoc;
use indexmap::IndexMap;

use crate::color::Rgba;

mod derive;
pub use derive::derive_palette;

/// Widget interaction states a palette distinguishes between.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum ColorGroup {
    /// Widgets in the window that currently has focus.
    #[assoc(name = "active")]
    Active,
    /// Widgets that are disabled.
    #[assoc(name = "disabled")]
    Disabled,
    /// Widgets in unfocused windows.
    #[assoc(name = "inactive")]
    Inactive,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 3] = [ColorGroup::Active, ColorGroup::Disabled, ColorGroup::Inactive];
}

/// Semantic color roles a toolkit resolves widget colors against.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum ColorRole {
    /// General window background.
    #[assoc(name = "window")]
    Window,
    /// Text drawn on the window background.
    #[assoc(name = "window_text")]
    WindowText,
    /// Background of text-entry and item views.
    #[assoc(name = "base")]
    Base,
    /// Alternating row background in item views.
    #[assoc(name = "alternate_base")]
    AlternateBase,
    /// Tooltip background.
    #[assoc(name = "tool_tip_base")]
    ToolTipBase,
    /// Tooltip text.
    #[assoc(name = "tool_tip_text")]
    ToolTipText,
    /// Placeholder text in empty inputs.
    #[assoc(name = "placeholder_text")]
    PlaceholderText,
    /// Text drawn on [`ColorRole::Base`].
    #[assoc(name = "text")]
    Text,
    /// Button background.
    #[assoc(name = "button")]
    Button,
    /// Button label text.
    #[assoc(name = "button_text")]
    ButtonText,
    /// Text guaranteed to contrast with dark surfaces.
    #[assoc(name = "bright_text")]
    BrightText,
    /// Selection background.
    #[assoc(name = "highlight")]
    Highlight,
    /// Text drawn over a selection.
    #[assoc(name = "highlighted_text")]
    HighlightedText,
    /// Toolkit accent color.
    #[assoc(name = "accent")]
    Accent,
    /// Unvisited hyperlinks.
    #[assoc(name = "link")]
    Link,
    /// Visited hyperlinks.
    #[assoc(name = "link_visited")]
    LinkVisited,
    /// Lightest bevel shade.
    #[assoc(name = "light")]
    Light,
    /// Between [`ColorRole::Button`] and [`ColorRole::Light`].
    #[assoc(name = "midlight")]
    Midlight,
    /// Between [`ColorRole::Button`] and [`ColorRole::Dark`].
    #[assoc(name = "mid")]
    Mid,
    /// Darker bevel shade.
    #[assoc(name = "dark")]
    Dark,
    /// Darkest shade, used for drop shadows.
    #[assoc(name = "shadow")]
    Shadow,
}

impl ColorRole {
    /// Every palette role, in derivation order.
    pub const ALL: [ColorRole; 21] = [
        ColorRole::Window,
        ColorRole::WindowText,
        ColorRole::Base,
        ColorRole::AlternateBase,
        ColorRole::ToolTipBase,
        ColorRole::ToolTipText,
        ColorRole::PlaceholderText,
        ColorRole::Text,
        ColorRole::Button,
        ColorRole::ButtonText,
        ColorRole::BrightText,
        ColorRole::Highlight,
        ColorRole::HighlightedText,
        ColorRole::Accent,
        ColorRole::Link,
        ColorRole::LinkVisited,
        ColorRole::Light,
        ColorRole::Midlight,
        ColorRole::Mid,
        ColorRole::Dark,
        ColorRole::Shadow,
    ];
}

/// A fully derived palette.
///
/// Palettes have no identity of their own: they are recomputed in full
/// on every theme switch, and no entry ever inherits a stale value.
/// Iteration follows insertion order, so identical schemes derive
/// byte-identical palettes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    entries: IndexMap<(ColorGroup, ColorRole), Rgba>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `role` to `color` for every color group.
    pub fn set_color(&mut self, role: ColorRole, color: Rgba) {
        for group in ColorGroup::ALL {
            self.entries.insert((group, role), color);
        }
    }

    /// Sets `role` to `color` for a single color group.
    pub fn set_group_color(&mut self, group: ColorGroup, role: ColorRole, color: Rgba) {
        self.entries.insert((group, role), color);
    }

    /// Looks up the color for `(group, role)`.
    pub fn color(&self, group: ColorGroup, role: ColorRole) -> Option<Rgba> {
        self.entries.get(&(group, role)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorGroup, ColorRole, Rgba)> + '_ {
        self.entries
            .iter()
            .map(|(&(group, role), &color)| (group, role, color))
    }
}
