//! Resolves scheme names against an ordered chain of providers.

use std::env;
use std::path::PathBuf;

use smallvec::SmallVec;

use crate::assets::{DirSchemes, SchemeProvider};
use crate::error::ThemeError;
use crate::scheme::ColorScheme;

/// Environment variable naming a directory of user-supplied scheme
/// files. It is searched after the bundled schemes, so bundled names
/// always win.
pub const SCHEMES_ENV_VAR: &str = "POLYCHROME_COLOR_SCHEMES";

/// Looks up scheme files across an ordered provider chain.
///
/// The first provider holding `<name>.json` wins. The default chain is
/// the bundled schemes followed by the directory named by
/// [`SCHEMES_ENV_VAR`], which makes the precedence contract explicit:
/// user directories extend the bundled set but never shadow it.
pub struct SchemeRepository {
    providers: SmallVec<[Box<dyn SchemeProvider>; 2]>,
}

impl SchemeRepository {
    pub fn new(providers: impl IntoIterator<Item = Box<dyn SchemeProvider>>) -> Self {
        Self {
            providers: providers.into_iter().collect(),
        }
    }

    /// The default chain: bundled schemes, then the directory from the
    /// environment (when set).
    pub fn from_env() -> Self {
        Self::with_override_dir(env::var_os(SCHEMES_ENV_VAR).map(PathBuf::from))
    }

    /// The default chain with an explicit override directory instead of
    /// the environment lookup.
    pub fn with_override_dir(dir: Option<PathBuf>) -> Self {
        let mut providers: SmallVec<[Box<dyn SchemeProvider>; 2]> = SmallVec::new();

        #[cfg(feature = "bundled")]
        providers.push(Box::new(crate::assets::BundledSchemes));

        if let Some(dir) = dir {
            providers.push(Box::new(DirSchemes::new(dir)));
        }

        Self { providers }
    }

    /// Loads and validates the scheme called `name`.
    ///
    /// Fails with [`ThemeError::NotFound`] when no provider has a
    /// matching file, [`ThemeError::Parse`] on malformed JSON or an
    /// unparseable color value, and [`ThemeError::MissingField`] when a
    /// required key is absent. Validation is eager: an incomplete
    /// scheme is rejected here rather than at first use.
    pub fn load(&self, name: &str) -> Result<ColorScheme, ThemeError> {
        let file_name = format!("{name}.json");

        for provider in &self.providers {
            let Some(bytes) = provider.get(&file_name) else {
                continue;
            };

            let scheme: ColorScheme = serde_json::from_slice(&bytes)?;
            scheme.validate()?;

            tracing::debug!(name, "loaded color scheme");
            return Ok(scheme);
        }

        Err(ThemeError::NotFound { name: name.into() })
    }

    /// All available scheme names, sorted and de-duplicated across
    /// providers.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .providers
            .iter()
            .flat_map(|provider| provider.list())
            .filter_map(|file_name| Some(file_name.strip_suffix(".json")?.to_owned()))
            .collect();

        names.sort();
        names.dedup();
        names
    }
}

impl Default for SchemeRepository {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Loads the scheme called `name` using the default repository chain.
pub fn load_color_scheme(name: &str) -> Result<ColorScheme, ThemeError> {
    SchemeRepository::from_env().load(name)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::color::rgb;
    use crate::scheme::SchemeField;

    /// Creates a throwaway scheme directory, removed on drop.
    struct SchemeDir {
        path: PathBuf,
    }

    impl SchemeDir {
        fn new(label: &str) -> Self {
            let path = env::temp_dir().join(format!(
                "polychrome-{label}-{}",
                std::process::id()
            ));
            fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        fn write(&self, file_name: &str, contents: &str) {
            fs::write(self.path.join(file_name), contents).unwrap();
        }
    }

    impl Drop for SchemeDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    const COMPLETE_SCHEME: &str = r##"{
        "primary": "#445566", "secondary": "#556677",
        "magenta": "#aa00aa", "red": "#aa0000", "orange": "#aa5500",
        "yellow": "#aaaa00", "green": "#00aa00", "cyan": "#00aaaa",
        "blue": "#0000aa",
        "text": "#eeeeee", "subtext1": "#dddddd", "subtext0": "#cccccc",
        "overlay2": "#999999", "overlay1": "#888888", "overlay0": "#777777",
        "surface2": "#555555", "surface1": "#444444", "surface0": "#333333",
        "base": "#222222", "mantle": "#1a1a1a", "crust": "#111111"
    }"##;

    #[cfg(feature = "bundled")]
    #[test]
    fn test_load_bundled_scheme() {
        let repository = SchemeRepository::with_override_dir(None);
        let scheme = repository.load("nord").unwrap();

        assert!(scheme.validate().is_ok());
        assert!(scheme.is_dark_theme().unwrap());
    }

    #[test]
    fn test_load_unknown_scheme_is_not_found() {
        let repository = SchemeRepository::with_override_dir(None);
        assert!(matches!(
            repository.load("no-such-scheme").unwrap_err(),
            ThemeError::NotFound { name } if name == "no-such-scheme"
        ));
    }

    #[test]
    fn test_load_from_override_dir() {
        let dir = SchemeDir::new("override");
        dir.write("custom.json", COMPLETE_SCHEME);

        let repository = SchemeRepository::with_override_dir(Some(dir.path.clone()));
        let scheme = repository.load("custom").unwrap();
        assert_eq!(scheme.base, Some(rgb(0x222222)));
    }

    #[cfg(feature = "bundled")]
    #[test]
    fn test_bundled_scheme_shadows_override_dir() {
        let dir = SchemeDir::new("precedence");
        dir.write("nord.json", COMPLETE_SCHEME);

        let repository = SchemeRepository::with_override_dir(Some(dir.path.clone()));
        let scheme = repository.load("nord").unwrap();

        // The bundled nord wins over the same-named override file.
        assert_ne!(scheme.base, Some(rgb(0x222222)));
        assert_eq!(scheme.base, Some(rgb(0x2e3440)));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let dir = SchemeDir::new("malformed");
        dir.write("broken.json", "{ not json");

        let repository = SchemeRepository::new([
            Box::new(DirSchemes::new(dir.path.clone())) as Box<dyn SchemeProvider>
        ]);
        assert!(matches!(
            repository.load("broken").unwrap_err(),
            ThemeError::Parse(_)
        ));
    }

    #[test]
    fn test_unparseable_color_is_a_parse_error() {
        let dir = SchemeDir::new("badcolor");
        dir.write("bad.json", r##"{"primary": "#notacolor"}"##);

        let repository = SchemeRepository::new([
            Box::new(DirSchemes::new(dir.path.clone())) as Box<dyn SchemeProvider>
        ]);
        assert!(matches!(
            repository.load("bad").unwrap_err(),
            ThemeError::Parse(_)
        ));
    }

    #[test]
    fn test_incomplete_scheme_is_rejected_at_load() {
        let dir = SchemeDir::new("incomplete");
        // A light-polarity scheme with every field except `crust`.
        let without_crust =
            COMPLETE_SCHEME.replace(r##""crust": "#111111""##, r##""spare": "#0000aa""##);
        dir.write("partial.json", &without_crust);

        let repository = SchemeRepository::new([
            Box::new(DirSchemes::new(dir.path.clone())) as Box<dyn SchemeProvider>
        ]);
        assert!(matches!(
            repository.load("partial").unwrap_err(),
            ThemeError::MissingField {
                field: SchemeField::Crust
            }
        ));
    }

    #[cfg(feature = "bundled")]
    #[test]
    fn test_names_are_sorted_and_deduplicated() {
        let dir = SchemeDir::new("names");
        dir.write("nord.json", COMPLETE_SCHEME);
        dir.write("aaa_custom.json", COMPLETE_SCHEME);

        let repository = SchemeRepository::with_override_dir(Some(dir.path.clone()));
        let names = repository.names();

        assert_eq!(names.iter().filter(|name| *name == "nord").count(), 1);
        assert!(names.contains(&"aaa_custom".to_owned()));
        assert!(names.is_sorted());
    }
}
