//! Database layer for shiftdesk.
//!
//! Every collection the application works with lives in one SQLite file.
//! Each module here wraps a single table behind a small store type; stores
//! for the live collections (work logs, attendance, schedules) also own a
//! [`Feed`](crate::libs::feed::Feed) and publish a full snapshot after every
//! successful write.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftdesk::db::{db::Db, work_logs::WorkLogs};
//! use shiftdesk::libs::worklog::WorkLogFilter;
//!
//! let mut logs = WorkLogs::new(Db::new()?);
//! let all = logs.fetch(WorkLogFilter::All)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::variant::UnknownVariant;
use rusqlite::types::Type;
use rusqlite::Row;
use std::str::FromStr;

/// Connection handling and schema setup.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Clock-ins, clock-outs and edits, newest first.
pub mod activity_logs;

/// Attendance lines imported from outside; append and read only.
pub mod attendance;

/// Roster of employees.
pub mod employees;

/// Audit trail of sent handovers.
pub mod handovers;

/// Facility and personal notifications.
pub mod notifications;

/// Day-by-day duty assignments.
pub mod schedules;

/// Daily work-log entries.
pub mod work_logs;

/// Reads a text column holding one of the [`text_enum!`](crate::text_enum) types.
pub(crate) fn text_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = UnknownVariant>,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
