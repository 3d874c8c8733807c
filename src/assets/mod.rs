//! Sources of color scheme files.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "bundled")] {
        mod bundled;
        pub use bundled::*;
    }
);

/// A location scheme files can be fetched from.
///
/// Providers address files by bare file name (e.g. `nord.json`) and
/// treat unreadable entries as absent.
pub trait SchemeProvider: Send + Sync {
    fn get(&self, file_name: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self) -> Vec<String>;
}

/// Scheme files stored in a directory on disk, typically the
/// user-supplied override directory.
pub struct DirSchemes {
    dir: PathBuf,
}

impl DirSchemes {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SchemeProvider for DirSchemes {
    fn get(&self, file_name: &str) -> Option<Cow<'static, [u8]>> {
        fs::read(self.dir.join(file_name)).ok().map(Cow::Owned)
    }

    fn list(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };

        entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    Some(path.file_name()?.to_str()?.to_owned())
                } else {
                    None
                }
            })
            .collect()
    }
}
