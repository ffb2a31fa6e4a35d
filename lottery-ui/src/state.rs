//! Shared application state for the form server.

use std::path::PathBuf;
use std::sync::Arc;

use lottery::document::PreferenceDocument;
use lottery::error::LotteryError;
use lottery::store::{PreferenceStore, load_document};
use rand::rngs::StdRng;
use tokio::sync::{Mutex, broadcast};
use tracing::{info, warn};

/// Events broadcast to SSE clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The store was reloaded from disk.
    PreferencesChanged,
    /// A reload failed; the previous document is still served.
    RefreshFailed { message: String },
}

/// The store and its generator. Requests take the lock for the whole
/// operation, so draws and refreshes never interleave.
pub struct Session {
    pub store: PreferenceStore,
    pub rng: StdRng,
}

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Preferences file backing the store.
    pub preferences_path: PathBuf,
    pub session: Arc<Mutex<Session>>,
    /// Broadcast sender for change events.
    pub event_tx: Arc<broadcast::Sender<ChangeEvent>>,
}

impl AppState {
    pub fn new(store: PreferenceStore, rng: StdRng) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            preferences_path: store.path().to_path_buf(),
            session: Arc::new(Mutex::new(Session { store, rng })),
            event_tx: Arc::new(event_tx),
        }
    }

    /// Reload the store and tell SSE clients about the outcome.
    ///
    /// The file is read on the blocking pool; the lock is only taken to swap
    /// the parsed document in.
    pub async fn refresh(&self) -> Result<(), LotteryError> {
        let result = match self.read_preferences().await {
            Ok(document) => {
                self.session.lock().await.store.replace(document);
                Ok(())
            }
            Err(err) => Err(err),
        };
        match &result {
            Ok(()) => {
                info!(path = %self.preferences_path.display(), "preferences refreshed");
                let _ = self.event_tx.send(ChangeEvent::PreferencesChanged);
            }
            Err(err) => {
                warn!(error = %err, "refresh failed, keeping previous preferences");
                let _ = self.event_tx.send(ChangeEvent::RefreshFailed {
                    message: err.to_string(),
                });
            }
        }
        result
    }

    async fn read_preferences(&self) -> Result<PreferenceDocument, LotteryError> {
        let path = self.preferences_path.clone();
        tokio::task::spawn_blocking(move || load_document(&path))
            .await
            .unwrap_or_else(|join_err| {
                Err(LotteryError::Io {
                    path: self.preferences_path.clone(),
                    source: std::io::Error::other(join_err),
                })
            })
    }
}
