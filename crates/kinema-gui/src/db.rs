//! Async database actor.
//!
//! Owns the `Storage` on a dedicated thread and exposes async methods
//! that communicate via channels. This keeps all SQLite I/O off the
//! render thread.

use std::path::Path;

use tokio::sync::{mpsc, oneshot};

use kinema_core::error::KinemaError;
use kinema_core::models::WatchedList;
use kinema_core::storage::Storage;

/// Cloneable handle to the DB actor thread.
#[derive(Clone)]
pub struct DbHandle {
    tx: mpsc::UnboundedSender<DbCommand>,
}

/// Commands sent to the actor thread.
enum DbCommand {
    LoadWatched {
        key: String,
        reply: oneshot::Sender<Result<WatchedList, KinemaError>>,
    },
    SaveWatched {
        key: String,
        list: WatchedList,
        reply: oneshot::Sender<Result<(), KinemaError>>,
    },
}

impl DbHandle {
    /// Spawn the DB actor on a dedicated thread and return a handle.
    ///
    /// Returns `None` if the database cannot be opened.
    pub fn open(path: &Path) -> Option<Self> {
        let storage = Storage::open(path)
            .map_err(|e| tracing::error!("Failed to open database: {e}"))
            .ok()?;

        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::Builder::new()
            .name("db-actor".into())
            .spawn(move || actor_loop(storage, rx))
            .map_err(|e| tracing::error!("Failed to spawn DB thread: {e}"))
            .ok()?;

        Some(Self { tx })
    }

    pub async fn load_watched(&self, key: String) -> Result<WatchedList, KinemaError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(DbCommand::LoadWatched { key, reply });
        rx.await.unwrap_or_else(|_| Err(actor_gone()))
    }

    pub async fn save_watched(&self, key: String, list: WatchedList) -> Result<(), KinemaError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(DbCommand::SaveWatched { key, list, reply });
        rx.await.unwrap_or_else(|_| Err(actor_gone()))
    }
}

fn actor_gone() -> KinemaError {
    KinemaError::Worker("database thread stopped".into())
}

/// Run the actor loop on a dedicated thread.
fn actor_loop(storage: Storage, mut rx: mpsc::UnboundedReceiver<DbCommand>) {
    // Block the thread waiting for commands. We use blocking_recv because
    // this thread has no tokio runtime — it's a plain OS thread.
    while let Some(cmd) = rx.blocking_recv() {
        match cmd {
            DbCommand::LoadWatched { key, reply } => {
                let _ = reply.send(storage.load_list(&key));
            }
            DbCommand::SaveWatched { key, list, reply } => {
                let _ = reply.send(storage.save_list(&key, &list));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dead_actor_reports_a_worker_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let db = DbHandle { tx };

        let err = db.load_watched("watched".into()).await.unwrap_err();
        assert!(matches!(err, KinemaError::Worker(_)));

        let err = db
            .save_watched("watched".into(), WatchedList::new())
            .await
            .unwrap_err();
        assert!(matches!(err, KinemaError::Worker(_)));
    }
}
