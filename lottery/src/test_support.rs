//! Test-only helpers for building preference documents and generators.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::document::PreferenceDocument;

/// Two people sharing one food: the union is `{"rice", "noodles"}`.
pub const TWO_PEOPLE: &str = r#"{
  "people": {
    "A": { "food_preferences": ["rice", "noodles"] },
    "B": { "food_preferences": ["noodles"] }
  }
}"#;

/// Parse a document from JSON, panicking on invalid fixtures.
pub fn document(raw: &str) -> PreferenceDocument {
    serde_json::from_str(raw).expect("fixture document must be valid JSON")
}

/// Deterministic generator for reproducible draws.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Write `contents` to `<dir>/config.json` and return the path.
pub fn write_preferences(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join("config.json");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// A temporary directory holding a `config/config.json` preferences file.
///
/// Mirrors the default layout so binaries run with `current_dir` set to
/// [`TempPreferences::root`] pick the file up without flags.
pub struct TempPreferences {
    dir: tempfile::TempDir,
    path: PathBuf,
}

impl TempPreferences {
    pub fn new(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("create {}", config_dir.display()))?;
        let path = write_preferences(&config_dir, contents)?;
        Ok(Self { dir, path })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the preferences file contents.
    pub fn rewrite(&self, contents: &str) -> Result<()> {
        fs::write(&self.path, contents).with_context(|| format!("write {}", self.path.display()))
    }
}
