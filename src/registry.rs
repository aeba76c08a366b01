//! Application registration
//!
//! Wires the helpers into a host application: collects the view search path
//! (the host's views directory first, the crate's bundled `views/` directory
//! appended as a secondary path) and merges the bundled locale files into the
//! host's i18n load path when one exists.
//!
//! Everything here is best-effort: a host without a views directory, without
//! an i18n subsystem, or a missing bundled directory is not an error.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Host application seam for [`register`]
pub trait HelperHost {
    /// Base views directory of the host application, if it has one
    fn views_dir(&self) -> Option<PathBuf>;

    /// Mutable i18n load path, when the host runs an i18n subsystem
    fn i18n_load_path(&mut self) -> Option<&mut Vec<PathBuf>> {
        None
    }
}

/// Result of registering the helpers into a host
#[derive(Debug, Clone, Default)]
pub struct Registration {
    /// Template search path: host views first, bundled views appended
    pub view_paths: Vec<PathBuf>,
    /// Bundled locale files, sorted; also merged into the host's i18n load
    /// path when the host exposes one
    pub locale_paths: Vec<PathBuf>,
}

/// Register the pagination helpers into a host application
pub fn register<H: HelperHost>(host: &mut H) -> Registration {
    let mut view_paths = Vec::new();
    if let Some(dir) = host.views_dir() {
        view_paths.push(dir);
    }
    if let Some(bundled) = bundled_views_dir() {
        view_paths.push(bundled);
    }

    let locale_paths = bundled_locale_files();
    if let Some(load_path) = host.i18n_load_path() {
        load_path.extend(locale_paths.iter().cloned());
    }

    Registration {
        view_paths,
        locale_paths,
    }
}

/// The crate's bundled views directory, when present
pub fn bundled_views_dir() -> Option<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("views");
    dir.is_dir().then_some(dir)
}

/// Bundled locale definition files, sorted by file name
pub fn bundled_locale_files() -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = %dir.display(), %err, "no bundled locale directory");
            return Vec::new();
        }
    };
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
        })
        .collect();
    files.sort();
    files
}
