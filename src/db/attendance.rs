use super::db::Db;
use super::text_column;
use crate::libs::attendance::AttendanceRecord;
use crate::libs::feed::{Feed, Subscription};
use anyhow::Result;
use rusqlite::{params, Connection, Row};

const INSERT_RECORD: &str = "INSERT INTO attendance_records (employee_name, department, date, check_in, check_out, total_hours, status)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_RECORDS: &str = "SELECT id, employee_name, department, date, check_in, check_out, total_hours, status FROM attendance_records";
const WHERE_MONTH: &str = "WHERE date LIKE ?1 || '-%'";
const ORDER_BY_DATE_DESC: &str = "ORDER BY date DESC, id ASC";

/// Attendance lines. Records are only ever appended; nothing here edits or
/// removes one.
pub struct AttendanceRecords {
    conn: Connection,
    feed: Feed<AttendanceRecord>,
}

impl AttendanceRecords {
    pub fn new(db: Db) -> Self {
        Self {
            conn: db.conn,
            feed: Feed::new(),
        }
    }

    pub fn insert(&mut self, record: &AttendanceRecord) -> Result<i64> {
        Self::insert_on(&self.conn, record)?;
        let id = self.conn.last_insert_rowid();
        self.publish();
        Ok(id)
    }

    /// Appends a batch in one transaction and publishes once.
    pub fn import(&mut self, records: &[AttendanceRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for record in records {
            Self::insert_on(&tx, record)?;
        }
        tx.commit()?;
        tracing::debug!(count = records.len(), "attendance records imported");

        self.publish();
        Ok(records.len())
    }

    /// Every record, newest date first.
    pub fn fetch_all(&self) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_RECORDS, ORDER_BY_DATE_DESC))?;
        let records = stmt.query_map([], Self::map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    pub fn fetch_month(&self, year: i32, month: u32) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} {} {}", SELECT_RECORDS, WHERE_MONTH, ORDER_BY_DATE_DESC))?;
        let records = stmt
            .query_map(params![format!("{year:04}-{month:02}")], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    pub fn subscribe<F>(&self, listener: F) -> Result<Subscription>
    where
        F: Fn(&[AttendanceRecord]) + Send + Sync + 'static,
    {
        let current = self.fetch_all()?;
        Ok(self.feed.subscribe(&current, listener))
    }

    fn insert_on(conn: &Connection, record: &AttendanceRecord) -> Result<()> {
        conn.execute(
            INSERT_RECORD,
            params![
                record.employee_name,
                record.department,
                record.date,
                record.check_in,
                record.check_out,
                record.total_hours,
                record.status.as_str(),
            ],
        )?;
        Ok(())
    }

    /// Re-reads the collection for subscribers. The write has already
    /// happened, so a failed re-read is logged and not returned.
    fn publish(&self) {
        if self.feed.subscriber_count() == 0 {
            return;
        }
        match self.fetch_all() {
            Ok(snapshot) => self.feed.publish(&snapshot),
            Err(e) => tracing::warn!(error = %e, "attendance snapshot could not be published"),
        }
    }

    fn map_row(row: &Row) -> rusqlite::Result<AttendanceRecord> {
        Ok(AttendanceRecord {
            id: row.get(0)?,
            employee_name: row.get(1)?,
            department: row.get(2)?,
            date: row.get(3)?,
            check_in: row.get(4)?,
            check_out: row.get(5)?,
            total_hours: row.get(6)?,
            status: text_column(row, 7)?,
        })
    }
}
