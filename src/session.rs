/// Collaborator Boundary and Batch Edit Commit
///
/// The engine consumes three narrow collaborator interfaces: a record
/// source it loads from, a per-record updater it fans edit batches out to,
/// and a notification sink it reports batch outcomes through. A
/// TableSession wires one RecordStore to its collaborators.
///
/// The commit path is the crate's only asynchronous boundary. Every update
/// in a batch is dispatched as an independent operation and the batch
/// settles only after the slowest one: a fan-out/fan-in join, reported
/// once, with no cancellation of an in-flight batch. The batch is atomic
/// by convention, not transactional: collaborators may fail independently,
/// successful entries merge and failing entries are reported individually.

use crate::edit::RecordEdit;
use crate::error::{EditFailure, EditFailureCause, FetchError, UpdateError};
use crate::store::RecordStore;
use crate::value::Record;
use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, warn};

/// Supplies the full record set
#[async_trait]
pub trait RecordSource {
    /// Fetch the complete record set.
    ///
    /// May fail; the caller keeps its last-known-good view when it does.
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError>;
}

/// Applies a single record's field updates at the external system
#[async_trait]
pub trait RecordUpdater {
    async fn update(&self, edit: &RecordEdit) -> Result<(), UpdateError>;
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Fire-and-forget outcome reporting; nothing is consumed from it
pub trait NotificationSink {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Outcome of one committed batch, reported after every update settles
#[derive(Debug, Clone)]
pub struct EditReport {
    /// Number of edits accepted remotely and merged locally
    pub merged: usize,
    /// Entries that failed, each with the record identity and cause
    pub failures: Vec<EditFailure>,
}

impl EditReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One store wired to its collaborators
pub struct TableSession<S, U, N> {
    store: RecordStore,
    source: S,
    updater: U,
    notifier: N,
}

impl<S, U, N> TableSession<S, U, N>
where
    S: RecordSource,
    U: RecordUpdater,
    N: NotificationSink,
{
    pub fn new(store: RecordStore, source: S, updater: U, notifier: N) -> Self {
        TableSession {
            store,
            source,
            updater,
            notifier,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Fetch the full record set and replace the store's authoritative set,
    /// resetting the view.
    ///
    /// On failure the store is left untouched at its last-known-good state
    /// and the error is returned to the caller as data.
    pub async fn load(&mut self) -> Result<usize, FetchError> {
        let records = self.source.fetch_all().await?;
        let count = records.len();
        debug!("loaded {} records from source", count);
        self.store.set_all(records);
        Ok(count)
    }

    /// Commit a batch of edits.
    ///
    /// One update is fanned out per edited record; the join waits for all
    /// of them to settle. Accepted edits merge into the store (the active
    /// search, sort and page survive) while edits whose update failed are
    /// left out, so their records keep their previous values. The batch
    /// outcome is notified exactly once, after the slowest update.
    pub async fn commit_edits(&mut self, edits: Vec<RecordEdit>) -> EditReport {
        let total = edits.len();
        let updates = edits.iter().map(|edit| self.updater.update(edit));
        let results = join_all(updates).await;

        let mut accepted = Vec::new();
        let mut failures = Vec::new();
        for (edit, result) in edits.into_iter().zip(results) {
            match result {
                Ok(()) => accepted.push(edit),
                Err(cause) => {
                    warn!("update for record {} failed: {}", edit.position, cause);
                    failures.push(EditFailure {
                        position: edit.position,
                        cause: EditFailureCause::Update(cause),
                    });
                }
            }
        }

        let merge_failures = self.store.apply_edits(&accepted);
        let merged = accepted.len() - merge_failures.len();
        failures.extend(merge_failures);

        if failures.is_empty() {
            debug!("batch of {} edits committed", total);
            self.notifier
                .notify(NotificationKind::Success, "records updated successfully");
        } else {
            warn!("{} of {} edits in batch failed", failures.len(), total);
            self.notifier.notify(
                NotificationKind::Error,
                &format!("{} of {} records failed to update", failures.len(), total),
            );
        }

        EditReport { merged, failures }
    }
}
