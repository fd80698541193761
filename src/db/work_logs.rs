use super::activity_logs::ActivityLogs;
use super::db::Db;
use super::text_column;
use crate::libs::daily_log::{WorkLogListener, WorkLogStore};
use crate::libs::activity::DEFAULT_ACTOR;
use crate::libs::feed::{Feed, Subscription};
use crate::libs::messages::Message;
use crate::libs::worklog::{LogStatus, NewWorkLog, WorkLogEntry, WorkLogFilter};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_WORK_LOG: &str = "INSERT INTO work_logs (date, time, kind, category, details, location, priority, status, photo_url)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_WORK_LOGS: &str = "SELECT id, date, time, kind, category, details, location, priority, status, photo_url FROM work_logs";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_DATE: &str = "WHERE date = ?1";
const ORDER_BY_TIME: &str = "ORDER BY time ASC, id ASC";
const UPDATE_STATUS: &str = "UPDATE work_logs SET status = ?2 WHERE id = ?1";
const DELETE_WORK_LOG: &str = "DELETE FROM work_logs WHERE id = ?1";

/// The work-log collection.
///
/// Every write publishes the whole collection, ordered by time of day, to
/// subscribers, and is noted in the activity trail under the store's actor.
pub struct WorkLogs {
    conn: Connection,
    feed: Feed<WorkLogEntry>,
    actor: String,
}

impl WorkLogs {
    pub fn new(db: Db) -> Self {
        Self {
            conn: db.conn,
            feed: Feed::new(),
            actor: DEFAULT_ACTOR.to_string(),
        }
    }

    /// Names who is making the changes in the activity trail.
    pub fn with_actor(mut self, actor: &str) -> Self {
        self.actor = actor.to_string();
        self
    }

    pub fn insert(&mut self, entry: &NewWorkLog) -> Result<i64> {
        self.conn.execute(
            INSERT_WORK_LOG,
            params![
                entry.date,
                entry.time,
                entry.kind.as_str(),
                entry.category,
                entry.details,
                entry.location,
                entry.priority.as_str(),
                entry.status.as_str(),
                entry.photo_url,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        ActivityLogs::note_edit(&self.conn, &self.actor, &format!("Added work log #{id} at {}", entry.location));
        self.publish();
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<WorkLogEntry>> {
        let entry = self
            .conn
            .query_row(&format!("{} {}", SELECT_WORK_LOGS, WHERE_ID), params![id], Self::map_row)
            .optional()?;
        Ok(entry)
    }

    pub fn fetch(&self, filter: WorkLogFilter) -> Result<Vec<WorkLogEntry>> {
        let entries = match filter {
            WorkLogFilter::All => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_WORK_LOGS, ORDER_BY_TIME))?;
                let rows = stmt.query_map([], Self::map_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            WorkLogFilter::Date(date) => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{} {} {}", SELECT_WORK_LOGS, WHERE_DATE, ORDER_BY_TIME))?;
                let rows = stmt.query_map(params![date], Self::map_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(entries)
    }

    pub fn set_status(&mut self, id: i64, status: LogStatus) -> Result<()> {
        let affected = self.conn.execute(UPDATE_STATUS, params![id, status.as_str()])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::WorkLogNotFound(id)));
        }
        ActivityLogs::note_edit(&self.conn, &self.actor, &format!("Set work log #{id} to {status}"));
        self.publish();
        Ok(())
    }

    pub fn remove(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_WORK_LOG, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::WorkLogNotFound(id)));
        }
        ActivityLogs::note_edit(&self.conn, &self.actor, &format!("Deleted work log #{id}"));
        self.publish();
        Ok(())
    }

    /// Re-reads the collection for subscribers. The write has already
    /// happened, so a failed re-read is logged and not returned.
    fn publish(&self) {
        if self.feed.subscriber_count() == 0 {
            return;
        }
        match self.fetch(WorkLogFilter::All) {
            Ok(snapshot) => self.feed.publish(&snapshot),
            Err(e) => tracing::warn!(error = %e, "work log snapshot could not be published"),
        }
    }

    fn map_row(row: &Row) -> rusqlite::Result<WorkLogEntry> {
        Ok(WorkLogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            time: row.get(2)?,
            kind: text_column(row, 3)?,
            category: row.get(4)?,
            details: row.get(5)?,
            location: row.get(6)?,
            priority: text_column(row, 7)?,
            status: text_column(row, 8)?,
            photo_url: row.get(9)?,
        })
    }
}

impl WorkLogStore for WorkLogs {
    fn append(&mut self, entry: &NewWorkLog) -> Result<i64> {
        self.insert(entry)
    }

    fn get(&mut self, id: i64) -> Result<Option<WorkLogEntry>> {
        self.get_by_id(id)
    }

    fn update_status(&mut self, id: i64, status: LogStatus) -> Result<()> {
        self.set_status(id, status)
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        self.remove(id)
    }

    fn subscribe(&mut self, listener: WorkLogListener) -> Result<Subscription> {
        let current = self.fetch(WorkLogFilter::All)?;
        Ok(self.feed.subscribe(&current, listener))
    }
}
