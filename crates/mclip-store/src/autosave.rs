//! Debounced autosave task.
//!
//! The scorer must never wait on persistence: saves run on a spawned
//! task fed through a channel, with the latest record always winning. A
//! new point persists immediately; edits to existing points debounce so
//! a burst of timeline tweaks becomes one write.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use mclip_models::MatchRecord;

use crate::error::{StoreError, StoreResult};
use crate::MatchStore;

/// Why a save was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTrigger {
    /// A new point was recorded; persist immediately
    PointAdded,
    /// An existing point was edited; debounce
    Edit,
}

enum Command {
    Save(Box<MatchRecord>, SaveTrigger),
    Flush(oneshot::Sender<()>),
}

/// Handle to the autosave task.
pub struct Autosaver {
    tx: mpsc::UnboundedSender<Command>,
    task: JoinHandle<()>,
}

impl Autosaver {
    /// Spawn the autosave task writing to `store`, debouncing
    /// edit-triggered saves by `debounce`.
    pub fn spawn(store: impl Into<MatchStore>, debounce: Duration) -> Self {
        let store = store.into();
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(store, rx, debounce));
        Self { tx, task }
    }

    /// Queue a save of the given record. Never blocks; the task applies
    /// last-write-wins if saves pile up.
    pub fn submit(&self, record: MatchRecord, trigger: SaveTrigger) -> StoreResult<()> {
        self.tx
            .send(Command::Save(Box::new(record), trigger))
            .map_err(|_| StoreError::Closed)
    }

    /// Force any debounced record to disk and wait for the write.
    pub async fn flush(&self) -> StoreResult<()> {
        let (ack, done) = oneshot::channel();
        self.tx
            .send(Command::Flush(ack))
            .map_err(|_| StoreError::Closed)?;
        done.await.map_err(|_| StoreError::Closed)
    }

    /// Flush pending work and stop the task.
    pub async fn shutdown(self) -> StoreResult<()> {
        drop(self.tx);
        self.task.await.map_err(|_| StoreError::Closed)
    }
}

async fn run(store: MatchStore, mut rx: mpsc::UnboundedReceiver<Command>, debounce: Duration) {
    let mut pending: Option<MatchRecord> = None;
    let mut deadline: Option<Instant> = None;

    loop {
        let wake = deadline.unwrap_or_else(Instant::now);
        tokio::select! {
            command = rx.recv() => match command {
                Some(Command::Save(record, SaveTrigger::PointAdded)) => {
                    // The record carries the whole log; it supersedes
                    // anything still debouncing
                    pending = None;
                    deadline = None;
                    write(&store, &record).await;
                }
                Some(Command::Save(record, SaveTrigger::Edit)) => {
                    pending = Some(*record);
                    deadline = Some(Instant::now() + debounce);
                }
                Some(Command::Flush(ack)) => {
                    if let Some(record) = pending.take() {
                        write(&store, &record).await;
                    }
                    deadline = None;
                    ack.send(()).ok();
                }
                None => {
                    if let Some(record) = pending.take() {
                        write(&store, &record).await;
                    }
                    break;
                }
            },
            _ = tokio::time::sleep_until(wake), if deadline.is_some() => {
                if let Some(record) = pending.take() {
                    write(&store, &record).await;
                }
                deadline = None;
            }
        }
    }
    debug!("Autosaver stopped");
}

async fn write(store: &MatchStore, record: &MatchRecord) {
    // Fire-and-forget: scoring must keep going if a save fails
    if let Err(e) = store.save(record).await {
        warn!(error = %e, "Autosave failed");
    }
}
