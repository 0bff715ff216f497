//! Emulator catalog — id → display-title lookups.
//!
//! The host keys games by an opaque emulator id; the receiver wants the
//! emulator's display title as the selection scope. [`EmulatorCatalog`]
//! is the seam the tracker queries during selection handling, and
//! [`StaticCatalog`] is the file-backed implementation the daemon loads
//! at startup.

use std::collections::HashMap;
use std::path::Path;

/// Resolves an emulator id to its display title.
pub trait EmulatorCatalog {
    /// `None` when the id is unknown; the tracker then falls back to an
    /// empty scope rather than failing the transition.
    fn emulator_title(&self, emulator_id: &str) -> Option<String>;
}

/// Why loading a catalog file failed. Startup-fatal in the daemon.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("read catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("parse catalog {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// In-memory id → title map, loaded once at startup.
#[derive(Debug)]
pub struct StaticCatalog {
    titles: HashMap<String, String>,
}

impl StaticCatalog {
    pub fn new(titles: HashMap<String, String>) -> Self {
        Self { titles }
    }

    /// Load a JSON object of `{ "<emulator id>": "<display title>" }`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let titles = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { titles })
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }
}

impl EmulatorCatalog for StaticCatalog {
    fn emulator_title(&self, emulator_id: &str) -> Option<String> {
        self.titles.get(emulator_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lookup_hit_and_miss() {
        let catalog = StaticCatalog::new(HashMap::from([(
            "mame-01".to_string(),
            "MAME".to_string(),
        )]));
        assert_eq!(catalog.emulator_title("mame-01"), Some("MAME".into()));
        assert_eq!(catalog.emulator_title("unknown"), None);
    }

    #[test]
    fn load_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emulators.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"mame-01":"MAME","retro-02":"RetroArch"}}"#).unwrap();

        let catalog = StaticCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.emulator_title("retro-02"), Some("RetroArch".into()));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StaticCatalog::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }), "{err}");
    }

    #[test]
    fn load_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emulators.json");
        std::fs::write(&path, "not json").unwrap();
        let err = StaticCatalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }), "{err}");
    }
}
