//! Database schema migration management and versioning.
//!
//! Every table shiftdesk uses is created by a numbered migration. Pending
//! migrations run in order inside one transaction when a database is opened,
//! and each applied version is recorded in the `migrations` table.
//!
//! ## Usage
//!
//! ```rust
//! use shiftdesk::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert!(get_db_version(&conn)? > 0);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// Tracks every applied migration with its version, name and timestamp.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all schema migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: daily work-log entries, read back ordered by time of day
        self.add_migration(1, "create_work_logs", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS work_logs (
                    id INTEGER PRIMARY KEY,
                    date DATE NOT NULL,
                    time TEXT NOT NULL,
                    kind TEXT NOT NULL,
                    category TEXT NOT NULL,
                    details TEXT NOT NULL,
                    location TEXT NOT NULL,
                    priority TEXT NOT NULL DEFAULT 'Normal',
                    status TEXT NOT NULL DEFAULT 'Pending',
                    photo_url TEXT,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_work_logs_date_time ON work_logs(date, time)", [])?;
            Ok(())
        });

        // Version 2: attendance lines imported from the time clock
        self.add_migration(2, "create_attendance_records", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS attendance_records (
                    id INTEGER PRIMARY KEY,
                    employee_name TEXT NOT NULL,
                    department TEXT NOT NULL DEFAULT '',
                    date TEXT NOT NULL,
                    check_in TEXT NOT NULL DEFAULT '',
                    check_out TEXT NOT NULL DEFAULT '',
                    total_hours TEXT NOT NULL DEFAULT '',
                    status TEXT NOT NULL DEFAULT 'Normal'
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance_records(date)", [])?;
            Ok(())
        });

        // Version 3: one duty assignment per day
        self.add_migration(3, "create_work_schedules", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS work_schedules (
                    id INTEGER PRIMARY KEY,
                    date DATE NOT NULL,
                    team TEXT NOT NULL,
                    worker_name TEXT NOT NULL,
                    status TEXT NOT NULL DEFAULT 'Scheduled'
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_work_schedules_date ON work_schedules(date)", [])?;
            Ok(())
        });

        // Version 4: employee roster
        self.add_migration(4, "create_employees", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS employees (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    role TEXT NOT NULL,
                    team TEXT NOT NULL,
                    status TEXT NOT NULL DEFAULT 'Off-Duty',
                    monthly_hours INTEGER NOT NULL DEFAULT 0,
                    total_hours INTEGER NOT NULL DEFAULT 0,
                    email TEXT NOT NULL DEFAULT '',
                    phone TEXT NOT NULL DEFAULT '',
                    department TEXT,
                    join_date DATE
                )",
                [],
            )?;
            Ok(())
        });

        // Version 5: notifications, optionally addressed to one worker
        self.add_migration(5, "create_notifications", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS notifications (
                    id INTEGER PRIMARY KEY,
                    title TEXT NOT NULL,
                    message TEXT NOT NULL,
                    kind TEXT NOT NULL DEFAULT 'info',
                    category TEXT NOT NULL DEFAULT '',
                    recipient TEXT,
                    is_read BOOLEAN NOT NULL DEFAULT FALSE,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_notifications_read ON notifications(is_read)", [])?;
            Ok(())
        });

        // Version 6: audit trail of sent handovers; items are work-log ids as JSON
        self.add_migration(6, "create_handovers", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS handovers (
                    id INTEGER PRIMARY KEY,
                    items TEXT NOT NULL DEFAULT '[]',
                    note TEXT NOT NULL DEFAULT '',
                    recipient TEXT NOT NULL,
                    sent_at TIMESTAMP NOT NULL
                )",
                [],
            )?;
            Ok(())
        });

        // Version 7: who clocked in, clocked out or changed something
        self.add_migration(7, "create_activity_logs", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS activity_logs (
                    id INTEGER PRIMARY KEY,
                    user TEXT NOT NULL,
                    action TEXT NOT NULL,
                    kind TEXT NOT NULL DEFAULT 'edit',
                    timestamp TIMESTAMP NOT NULL
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_activity_logs_timestamp ON activity_logs(timestamp)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the database's current version.
    ///
    /// All pending migrations share one transaction; a failure rolls the
    /// whole batch back.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
