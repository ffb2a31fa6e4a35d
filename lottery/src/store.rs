//! Preference store: owns the loaded document and the path it came from.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::document::PreferenceDocument;
use crate::error::LotteryError;

/// Read and parse a preference document from disk.
pub fn load_document(path: &Path) -> Result<PreferenceDocument, LotteryError> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LotteryError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LotteryError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    serde_json::from_str(&contents).map_err(|source| LotteryError::InvalidFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// The session's single loaded preference document.
///
/// Constructed once at session start and passed to whichever front end needs
/// it. [`PreferenceStore::refresh`] re-reads the backing file and swaps the
/// whole document; a failed refresh keeps the previous one.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    document: PreferenceDocument,
}

impl PreferenceStore {
    /// Load the document at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LotteryError> {
        let path = path.as_ref().to_path_buf();
        let document = load_document(&path)?;
        info!(people = document.people.len(), "preferences loaded");
        Ok(Self { path, document })
    }

    /// Build a store around an already parsed document.
    pub fn from_document(path: impl Into<PathBuf>, document: PreferenceDocument) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// Re-read the backing file, replacing the in-memory document on success.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn refresh(&mut self) -> Result<(), LotteryError> {
        let document = load_document(&self.path)?;
        debug!(people = document.people.len(), "preferences refreshed");
        self.document = document;
        Ok(())
    }

    /// Swap in a document loaded elsewhere from [`PreferenceStore::path`].
    pub fn replace(&mut self, document: PreferenceDocument) {
        debug!(people = document.people.len(), "preferences replaced");
        self.document = document;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &PreferenceDocument {
        &self.document
    }

    pub fn people(&self) -> Vec<String> {
        self.document.people()
    }

    pub fn preferences_for(&self, person: &str) -> &[String] {
        self.document.preferences_for(person)
    }

    pub fn all_food_options(&self) -> std::collections::BTreeSet<String> {
        self.document.all_food_options()
    }
}
