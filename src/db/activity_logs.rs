use super::db::Db;
use super::text_column;
use crate::libs::activity::{ActivityKind, ActivityLog};
use anyhow::Result;
use rusqlite::{params, Connection, Row};

const INSERT_ACTIVITY: &str = "INSERT INTO activity_logs (user, action, kind, timestamp) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ACTIVITY: &str = "SELECT id, user, action, kind, timestamp FROM activity_logs";
const ORDER_BY_NEWEST: &str = "ORDER BY timestamp DESC, id DESC";
const COUNT_ACTIVITY: &str = "SELECT COUNT(*) FROM activity_logs";

pub struct ActivityLogs {
    conn: Connection,
}

impl ActivityLogs {
    pub fn new(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn record(&mut self, entry: &ActivityLog) -> Result<i64> {
        Self::insert_on(&self.conn, entry)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// The `limit` most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<ActivityLog>> {
        let mut stmt = self.conn.prepare(&format!("{} {} LIMIT ?1", SELECT_ACTIVITY, ORDER_BY_NEWEST))?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let entries = stmt.query_map(params![limit], Self::map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_ACTIVITY, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Writes `entries` in one transaction if the trail is empty.
    pub fn seed_if_empty(&mut self, entries: &[ActivityLog]) -> Result<usize> {
        if self.count()? > 0 {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        for entry in entries {
            Self::insert_on(&tx, entry)?;
        }
        tx.commit()?;
        Ok(entries.len())
    }

    pub(crate) fn insert_on(conn: &Connection, entry: &ActivityLog) -> Result<()> {
        conn.execute(
            INSERT_ACTIVITY,
            params![entry.user, entry.action, entry.kind.as_str(), entry.timestamp],
        )?;
        Ok(())
    }

    /// Appends an `edit` entry for a write that already succeeded. Failures
    /// are logged, not returned.
    pub(crate) fn note_edit(conn: &Connection, actor: &str, action: &str) {
        let entry = ActivityLog::now(actor, action, ActivityKind::Edit);
        if let Err(e) = Self::insert_on(conn, &entry) {
            tracing::warn!(error = %e, action, "activity could not be recorded");
        }
    }

    fn map_row(row: &Row) -> rusqlite::Result<ActivityLog> {
        Ok(ActivityLog {
            id: row.get(0)?,
            user: row.get(1)?,
            action: row.get(2)?,
            kind: text_column(row, 3)?,
            timestamp: row.get(4)?,
        })
    }
}
