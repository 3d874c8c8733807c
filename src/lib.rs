//! Maps declarative color schemes onto a complete widget palette.
//!
//! A [`ColorScheme`] is a flat record of ~20 named colors loaded from a
//! JSON file. [`derive_palette`] expands it into every
//! (color role, color group) entry a GUI toolkit needs, deriving shades
//! and disabled-state variants with perceptual lightness heuristics in
//! HSV space. [`set_color_scheme`] applies the result to a live
//! application through a [`PaletteHost`] handle.

pub mod assets;

pub mod palette;
pub use palette::{ColorGroup, ColorRole, Palette, derive_palette};

pub mod scheme;
pub use scheme::{ColorScheme, SchemeField};

mod apply;
pub use apply::*;

mod color;
pub use color::*;

mod error;
pub use error::*;

mod repository;
pub use repository::*;
