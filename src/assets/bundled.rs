use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::assets::SchemeProvider;

/// Color schemes embedded in the crate at build time.
#[derive(RustEmbed)]
#[folder = "assets/color_schemes/"]
#[include = "*.json"]
#[exclude = "*.DS_Store"]
pub struct BundledSchemes;

impl SchemeProvider for BundledSchemes {
    fn get(&self, file_name: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(file_name).map(|f| f.data)
    }

    fn list(&self) -> Vec<String> {
        BundledSchemes::iter().map(|path| path.into_owned()).collect()
    }
}
