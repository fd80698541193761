#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use parking_lot::Mutex;
    use shiftdesk::db::db::Db;
    use shiftdesk::db::work_logs::WorkLogs;
    use shiftdesk::libs::daily_log::{DailyLog, WorkLogStore};
    use shiftdesk::libs::feed::Feed;
    use shiftdesk::libs::worklog::{LogStatus, WorkLogEntry, WorkLogForm};
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FeedTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for FeedTestContext {
        fn setup() -> Self {
            FeedTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn form(time: &str, details: &str) -> WorkLogForm {
        WorkLogForm {
            time: time.to_string(),
            location: "Floor 3 (3F)".to_string(),
            details: details.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_subscriber_gets_current_contents_immediately() {
        let feed: Feed<u32> = Feed::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let sub = feed.subscribe(&[4, 5], move |items: &[u32]| sink.lock().push(items.to_vec()));

        assert_eq!(*seen.lock(), vec![vec![4, 5]]);
        assert_eq!(feed.subscriber_count(), 1);
        sub.cancel();
    }

    #[test]
    fn test_cancel_stops_delivery() {
        let feed: Feed<u32> = Feed::new();
        let deliveries = Arc::new(Mutex::new(0));
        let counter = deliveries.clone();

        let sub = feed.subscribe(&[], move |_: &[u32]| *counter.lock() += 1);
        feed.publish(&[1]);
        sub.cancel();
        feed.publish(&[1, 2]);

        assert_eq!(*deliveries.lock(), 2);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[test]
    fn test_each_subscriber_gets_the_full_snapshot() {
        let feed: Feed<&'static str> = Feed::new();
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));
        let (a, b) = (first.clone(), second.clone());

        let sub_a = feed.subscribe(&[], move |items: &[&'static str]| *a.lock() = items.to_vec());
        let sub_b = feed.subscribe(&[], move |items: &[&'static str]| *b.lock() = items.to_vec());
        feed.publish(&["x", "y"]);
        feed.publish(&["y"]);

        assert_eq!(*first.lock(), vec!["y"]);
        assert_eq!(*second.lock(), vec!["y"]);
        sub_a.cancel();
        sub_b.cancel();
    }

    #[test]
    fn test_cancel_after_feed_dropped_is_harmless() {
        let feed: Feed<u32> = Feed::new();
        let sub = feed.subscribe(&[], |_: &[u32]| {});
        drop(feed);
        sub.cancel();
    }

    #[test_context(FeedTestContext)]
    #[test]
    fn test_store_publishes_after_every_write(ctx: &mut FeedTestContext) {
        let mut store = WorkLogs::new(Db::open(&ctx.temp_dir.path().join("feed.db")).unwrap());
        let snapshots: Arc<Mutex<Vec<Vec<WorkLogEntry>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = snapshots.clone();

        let sub = store
            .subscribe(Box::new(move |entries: &[WorkLogEntry]| sink.lock().push(entries.to_vec())))
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        let late = store.append(&form("18:00", "Late").validate(date).unwrap()).unwrap();
        store.append(&form("06:00", "Early").validate(date).unwrap()).unwrap();
        store.update_status(late, LogStatus::Completed).unwrap();
        store.delete(late).unwrap();

        let snapshots = snapshots.lock();
        assert_eq!(snapshots.len(), 5);
        assert!(snapshots[0].is_empty());
        let order: Vec<&str> = snapshots[2].iter().map(|e| e.details.as_str()).collect();
        assert_eq!(order, vec!["Early", "Late"]);
        assert_eq!(snapshots[3][1].status, LogStatus::Completed);
        assert_eq!(snapshots[4].len(), 1);
        sub.cancel();
    }

    #[test_context(FeedTestContext)]
    #[test]
    fn test_cancelled_store_subscription_stays_quiet(ctx: &mut FeedTestContext) {
        let mut store = WorkLogs::new(Db::open(&ctx.temp_dir.path().join("feed.db")).unwrap());
        let deliveries = Arc::new(Mutex::new(0));
        let counter = deliveries.clone();

        let sub = store.subscribe(Box::new(move |_: &[WorkLogEntry]| *counter.lock() += 1)).unwrap();
        sub.cancel();

        let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        store.append(&form("09:00", "Unseen").validate(date).unwrap()).unwrap();

        assert_eq!(*deliveries.lock(), 1);
    }

    #[test_context(FeedTestContext)]
    #[test]
    fn test_write_stands_when_snapshot_cannot_be_read(ctx: &mut FeedTestContext) {
        let path = ctx.temp_dir.path().join("feed.db");
        let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        let mut log = DailyLog::open(WorkLogs::new(Db::open(&path).unwrap()), date).unwrap();

        // A status nobody can decode makes every full re-read fail
        let other = Db::open(&path).unwrap();
        other
            .conn
            .execute(
                "INSERT INTO work_logs (date, time, kind, category, details, location, priority, status)
                 VALUES ('2025-05-02', '07:00', 'Pest', '', 'Broken', 'Basement 1 (B1)', 'Normal', 'Archived')",
                [],
            )
            .unwrap();

        let mut input = form("09:00", "Kept");
        let id = log.create(&mut input).unwrap();
        assert!(input.details.is_empty());
        log.complete(id).unwrap();

        let count: i64 = other
            .conn
            .query_row("SELECT COUNT(*) FROM work_logs", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
        let status: String = other
            .conn
            .query_row("SELECT status FROM work_logs WHERE id = ?1", [id], |row| row.get(0))
            .unwrap();
        assert_eq!(status, "Completed");
    }
}
