//! Typed failures returned by the preference store and selector.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`crate::store::PreferenceStore`] and
/// [`crate::select::select_one`].
#[derive(Debug, Error)]
pub enum LotteryError {
    /// The preferences file does not exist.
    #[error("preferences file not found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// The preferences file exists but is not a valid preference document.
    #[error("invalid preferences format in {}: {source}", .path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A draw was requested over zero candidates.
    #[error("{}", empty_pool_message(.person.as_deref()))]
    EmptyPool { person: Option<String> },

    /// Any other failure while reading the preferences file.
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn empty_pool_message(person: Option<&str>) -> String {
    match person {
        Some(name) => format!("no food preferences found for {name}"),
        None => "no food options available".to_string(),
    }
}

impl LotteryError {
    /// True for [`LotteryError::EmptyPool`].
    pub fn is_empty_pool(&self) -> bool {
        matches!(self, LotteryError::EmptyPool { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_message_names_person() {
        let err = LotteryError::EmptyPool {
            person: Some("Bob".to_string()),
        };
        assert_eq!(err.to_string(), "no food preferences found for Bob");
        assert!(err.is_empty_pool());
    }

    #[test]
    fn empty_pool_message_without_person() {
        let err = LotteryError::EmptyPool { person: None };
        assert_eq!(err.to_string(), "no food options available");
    }
}
