//! The daily log workflow: one day's work-log entries and their lifecycle.
//!
//! [`DailyLog`] sits between the user and a [`WorkLogStore`]. It validates
//! input before anything reaches the store, enforces forward-only status
//! changes, and keeps a working set of the day's entries that is replaced
//! wholesale every time the store publishes a new snapshot. Projections
//! (pending list, counters) are always computed from that working set.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftdesk::db::{db::Db, work_logs::WorkLogs};
//! use shiftdesk::libs::daily_log::DailyLog;
//! use shiftdesk::libs::worklog::WorkLogForm;
//! use chrono::Local;
//!
//! let store = WorkLogs::new(Db::new()?);
//! let mut log = DailyLog::open(store, Local::now().date_naive())?;
//! let mut form = WorkLogForm { details: "Trap check".into(), location: "Floor 1 (1F)".into(), ..Default::default() };
//! let id = log.create(&mut form)?;
//! log.complete(id)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::feed::Subscription;
use crate::libs::worklog::{self, DailyLogStats, LogStatus, NewWorkLog, WorkLogEntry, WorkLogError, WorkLogForm};
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

pub type WorkLogListener = Box<dyn Fn(&[WorkLogEntry]) + Send + Sync>;

/// The work-log collection as the workflow needs it.
///
/// Implementations publish the full collection, ordered by time of day, to
/// every subscriber after each successful mutation.
pub trait WorkLogStore {
    fn append(&mut self, entry: &NewWorkLog) -> anyhow::Result<i64>;
    fn get(&mut self, id: i64) -> anyhow::Result<Option<WorkLogEntry>>;
    fn update_status(&mut self, id: i64, status: LogStatus) -> anyhow::Result<()>;
    fn delete(&mut self, id: i64) -> anyhow::Result<()>;
    fn subscribe(&mut self, listener: WorkLogListener) -> anyhow::Result<Subscription>;
}

#[derive(Debug, Error)]
pub enum DailyLogError {
    #[error(transparent)]
    Rejected(#[from] WorkLogError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub struct DailyLog<S: WorkLogStore> {
    store: S,
    date: NaiveDate,
    entries: Arc<Mutex<Vec<WorkLogEntry>>>,
    subscription: Option<Subscription>,
}

impl<S: WorkLogStore> DailyLog<S> {
    /// Subscribes to `store` and starts tracking the entries dated `date`.
    pub fn open(mut store: S, date: NaiveDate) -> anyhow::Result<Self> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        let sink = entries.clone();
        let subscription = store.subscribe(Box::new(move |snapshot: &[WorkLogEntry]| {
            let today: Vec<WorkLogEntry> = snapshot.iter().filter(|e| e.date == date).cloned().collect();
            *sink.lock() = today;
        }))?;

        Ok(Self {
            store,
            date,
            entries,
            subscription: Some(subscription),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Validates the form, appends a `Pending` entry and clears the form.
    ///
    /// On any failure the form is left untouched so the user can retry.
    pub fn create(&mut self, form: &mut WorkLogForm) -> Result<i64, DailyLogError> {
        let entry = form.validate(self.date)?;
        let id = self.store.append(&entry)?;
        tracing::debug!(id, date = %self.date, "work log created");
        form.reset();
        Ok(id)
    }

    /// Moves an entry forward in its lifecycle.
    pub fn change_status(&mut self, id: i64, status: LogStatus) -> Result<(), DailyLogError> {
        let current = self.store.get(id)?.ok_or(WorkLogError::NotFound(id))?;
        if let Some(next) = worklog::transition(current.status, status)? {
            self.store.update_status(id, next)?;
            tracing::debug!(id, from = %current.status, to = %next, "work log status changed");
        }
        Ok(())
    }

    pub fn start(&mut self, id: i64) -> Result<(), DailyLogError> {
        self.change_status(id, LogStatus::InProgress)
    }

    pub fn complete(&mut self, id: i64) -> Result<(), DailyLogError> {
        self.change_status(id, LogStatus::Completed)
    }

    /// Removes an entry. Confirmation is the caller's job.
    pub fn delete(&mut self, id: i64) -> Result<(), DailyLogError> {
        if self.store.get(id)?.is_none() {
            return Err(WorkLogError::NotFound(id).into());
        }
        self.store.delete(id)?;
        tracing::debug!(id, "work log deleted");
        Ok(())
    }

    /// The day's entries as of the latest snapshot, ordered by time.
    pub fn entries(&self) -> Vec<WorkLogEntry> {
        self.entries.lock().clone()
    }

    /// Entries that belong in the next shift's handover.
    pub fn pending(&self) -> Vec<WorkLogEntry> {
        worklog::derive_pending(&self.entries.lock())
    }

    pub fn stats(&self) -> DailyLogStats {
        DailyLogStats::from_entries(&self.entries.lock())
    }

    /// Stops tracking and hands the store back.
    pub fn close(mut self) -> S {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
        self.store
    }
}
