use super::db::Db;
use super::text_column;
use crate::libs::feed::{Feed, Subscription};
use crate::libs::schedule::{month_start, WorkSchedule};
use anyhow::Result;
use chrono::Months;
use rusqlite::{params, Connection, Row};

const INSERT_SCHEDULE: &str = "INSERT INTO work_schedules (date, team, worker_name, status) VALUES (?1, ?2, ?3, ?4)";
const SELECT_SCHEDULES: &str = "SELECT id, date, team, worker_name, status FROM work_schedules";
const WHERE_RANGE: &str = "WHERE date >= ?1 AND date < ?2";
const ORDER_BY_DATE: &str = "ORDER BY date ASC, id ASC";
const COUNT_SCHEDULES: &str = "SELECT COUNT(*) FROM work_schedules";

pub struct WorkSchedules {
    conn: Connection,
    feed: Feed<WorkSchedule>,
}

impl WorkSchedules {
    pub fn new(db: Db) -> Self {
        Self {
            conn: db.conn,
            feed: Feed::new(),
        }
    }

    pub fn insert(&mut self, schedule: &WorkSchedule) -> Result<i64> {
        Self::insert_on(&self.conn, schedule)?;
        let id = self.conn.last_insert_rowid();
        self.publish();
        Ok(id)
    }

    pub fn fetch_all(&self) -> Result<Vec<WorkSchedule>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_SCHEDULES, ORDER_BY_DATE))?;
        let schedules = stmt.query_map([], Self::map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(schedules)
    }

    /// Stored schedules dated within `year`/`month`.
    pub fn fetch_month(&self, year: i32, month: u32) -> Result<Vec<WorkSchedule>> {
        let first = month_start(year, month)?;
        let next = first.checked_add_months(Months::new(1)).unwrap_or(first);

        let mut stmt = self
            .conn
            .prepare(&format!("{} {} {}", SELECT_SCHEDULES, WHERE_RANGE, ORDER_BY_DATE))?;
        let schedules = stmt
            .query_map(params![first, next], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(schedules)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_SCHEDULES, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Writes `schedules` in one transaction if the table is empty.
    ///
    /// Returns how many rows were written; 0 when data already existed.
    pub fn seed_if_empty(&mut self, schedules: &[WorkSchedule]) -> Result<usize> {
        if self.count()? > 0 {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        for schedule in schedules {
            Self::insert_on(&tx, schedule)?;
        }
        tx.commit()?;
        tracing::debug!(count = schedules.len(), "work schedules seeded");

        self.publish();
        Ok(schedules.len())
    }

    pub fn subscribe<F>(&self, listener: F) -> Result<Subscription>
    where
        F: Fn(&[WorkSchedule]) + Send + Sync + 'static,
    {
        let current = self.fetch_all()?;
        Ok(self.feed.subscribe(&current, listener))
    }

    fn insert_on(conn: &Connection, schedule: &WorkSchedule) -> Result<()> {
        conn.execute(
            INSERT_SCHEDULE,
            params![
                schedule.date,
                schedule.team.as_str(),
                schedule.worker_name,
                schedule.status.as_str(),
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
            Err(e) => tracing::warn!(error = %e, "schedule snapshot could not be published"),
        }
    }

    fn map_row(row: &Row) -> rusqlite::Result<WorkSchedule> {
        Ok(WorkSchedule {
            id: row.get(0)?,
            date: row.get(1)?,
            team: text_column(row, 2)?,
            worker_name: row.get(3)?,
            status: text_column(row, 4)?,
        })
    }
}
