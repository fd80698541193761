#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use shiftdesk::db::db::Db;
    use shiftdesk::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn raw_connection(&self) -> Connection {
            Connection::open(self.temp_dir.path().join("raw.db")).unwrap()
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_open_runs_all_migrations(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.temp_dir.path().join("shiftdesk.db")).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());

        for table in ["work_logs", "attendance_records", "work_schedules", "employees", "notifications", "handovers", "activity_logs"] {
            let count: i64 = db
                .conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "table {table} missing");
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_history_is_recorded_in_order(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.raw_connection();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len() as u32, manager.latest_version());
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert_eq!(history[0].1, "create_work_logs");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_idempotent(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.raw_connection();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len() as u32, manager.latest_version());
        assert!(manager.is_migration_applied(&conn, 1).unwrap());
        assert!(!manager.is_migration_applied(&conn, manager.latest_version() + 1).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_keeps_data(ctx: &mut MigrationTestContext) {
        let path = ctx.temp_dir.path().join("shiftdesk.db");
        {
            let db = Db::open(&path).unwrap();
            db.conn
                .execute("INSERT INTO handovers (items, note, recipient, sent_at) VALUES ('[]', 'n', 'Kim', '2025-03-14 18:00:00')", [])
                .unwrap();
        }

        let db = Db::open(&path).unwrap();
        let count: i64 = db.conn.query_row("SELECT COUNT(*) FROM handovers", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }
}
