use std::fmt;

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use super::deserializers::de_opt_color;
use crate::color::Rgba;
use crate::error::ThemeError;

/// A named color scheme: two emphasis colors, six accent hues and a
/// lightness ramp running from `text` (foreground) down to `crust`
/// (darkest surface in dark themes, or the reverse in light themes).
///
/// Every field is optional so schemes can be assembled programmatically,
/// but all of them are required before a palette can be derived.
/// Schemes are immutable once loaded; deriving a palette never mutates
/// or caches them.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ColorScheme {
    #[serde(deserialize_with = "de_opt_color")]
    pub primary: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub secondary: Option<Rgba>,

    #[serde(deserialize_with = "de_opt_color")]
    pub magenta: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub red: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub orange: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub yellow: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub green: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub cyan: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub blue: Option<Rgba>,

    #[serde(deserialize_with = "de_opt_color")]
    pub text: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub subtext1: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub subtext0: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub overlay2: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub overlay1: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub overlay0: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub surface2: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub surface1: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub surface0: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub base: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub mantle: Option<Rgba>,
    #[serde(deserialize_with = "de_opt_color")]
    pub crust: Option<Rgba>,
}

/// Identifies a single [`ColorScheme`] field by name.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum SchemeField {
    #[assoc(name = "primary")]
    Primary,
    #[assoc(name = "secondary")]
    Secondary,
    #[assoc(name = "magenta")]
    Magenta,
    #[assoc(name = "red")]
    Red,
    #[assoc(name = "orange")]
    Orange,
    #[assoc(name = "yellow")]
    Yellow,
    #[assoc(name = "green")]
    Green,
    #[assoc(name = "cyan")]
    Cyan,
    #[assoc(name = "blue")]
    Blue,
    #[assoc(name = "text")]
    Text,
    #[assoc(name = "subtext1")]
    Subtext1,
    #[assoc(name = "subtext0")]
    Subtext0,
    #[assoc(name = "overlay2")]
    Overlay2,
    #[assoc(name = "overlay1")]
    Overlay1,
    #[assoc(name = "overlay0")]
    Overlay0,
    #[assoc(name = "surface2")]
    Surface2,
    #[assoc(name = "surface1")]
    Surface1,
    #[assoc(name = "surface0")]
    Surface0,
    #[assoc(name = "base")]
    Base,
    #[assoc(name = "mantle")]
    Mantle,
    #[assoc(name = "crust")]
    Crust,
}

impl SchemeField {
    /// Every scheme field, in declaration order.
    pub const ALL: [SchemeField; 21] = [
        SchemeField::Primary,
        SchemeField::Secondary,
        SchemeField::Magenta,
        SchemeField::Red,
        SchemeField::Orange,
        SchemeField::Yellow,
        SchemeField::Green,
        SchemeField::Cyan,
        SchemeField::Blue,
        SchemeField::Text,
        SchemeField::Subtext1,
        SchemeField::Subtext0,
        SchemeField::Overlay2,
        SchemeField::Overlay1,
        SchemeField::Overlay0,
        SchemeField::Surface2,
        SchemeField::Surface1,
        SchemeField::Surface0,
        SchemeField::Base,
        SchemeField::Mantle,
        SchemeField::Crust,
    ];
}

impl fmt::Display for SchemeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ColorScheme {
    pub fn get(&self, field: SchemeField) -> Option<Rgba> {
        match field {
            SchemeField::Primary => self.primary,
            SchemeField::Secondary => self.secondary,
            SchemeField::Magenta => self.magenta,
            SchemeField::Red => self.red,
            SchemeField::Orange => self.orange,
            SchemeField::Yellow => self.yellow,
            SchemeField::Green => self.green,
            SchemeField::Cyan => self.cyan,
            SchemeField::Blue => self.blue,
            SchemeField::Text => self.text,
            SchemeField::Subtext1 => self.subtext1,
            SchemeField::Subtext0 => self.subtext0,
            SchemeField::Overlay2 => self.overlay2,
            SchemeField::Overlay1 => self.overlay1,
            SchemeField::Overlay0 => self.overlay0,
            SchemeField::Surface2 => self.surface2,
            SchemeField::Surface1 => self.surface1,
            SchemeField::Surface0 => self.surface0,
            SchemeField::Base => self.base,
            SchemeField::Mantle => self.mantle,
            SchemeField::Crust => self.crust,
        }
    }

    /// Returns the color for `field`, or [`ThemeError::MissingField`]
    /// when the scheme does not define it.
    pub fn require(&self, field: SchemeField) -> Result<Rgba, ThemeError> {
        self.get(field).ok_or(ThemeError::MissingField { field })
    }

    /// Checks that every scheme field is present.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for field in SchemeField::ALL {
            self.require(field)?;
        }

        Ok(())
    }

    /// A scheme is dark iff its foreground is lighter than its window
    /// background. This single predicate branches every derived-shade
    /// computation.
    pub fn is_dark_theme(&self) -> Result<bool, ThemeError> {
        let text = self.require(SchemeField::Text)?;
        let base = self.require(SchemeField::Base)?;

        Ok(text.value() > base.value())
    }
}
