#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use shiftdesk::db::activity_logs::ActivityLogs;
    use shiftdesk::db::db::Db;
    use shiftdesk::db::employees::Employees;
    use shiftdesk::db::work_logs::WorkLogs;
    use shiftdesk::libs::activity::{starter_activity, ActivityKind, ActivityLog, RECENT_ACTIVITY_LIMIT};
    use shiftdesk::libs::daily_log::DailyLog;
    use shiftdesk::libs::employee::{starter_roster, Employee};
    use shiftdesk::libs::schedule::{Team, TeamRoster};
    use shiftdesk::libs::worklog::WorkLogForm;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ActivityTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
        trail: ActivityLogs,
    }

    impl TestContext for ActivityTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("activity.db");
            let trail = ActivityLogs::new(Db::open(&path).unwrap());
            ActivityTestContext {
                _temp_dir: temp_dir,
                path,
                trail,
            }
        }
    }

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn roster() -> TeamRoster {
        TeamRoster {
            team_a: "Kim".to_string(),
            team_b: "Lee".to_string(),
        }
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_recent_is_newest_first_and_limited(ctx: &mut ActivityTestContext) {
        for minute in 0..7 {
            ctx.trail
                .record(&ActivityLog::new("Kim", &format!("step {minute}"), ActivityKind::Edit, at(14, 7, minute)))
                .unwrap();
        }
        // recorded late but happened earliest
        ctx.trail
            .record(&ActivityLog::new("Lee", "Clocked out", ActivityKind::Logout, at(13, 19, 0)))
            .unwrap();

        let recent = ctx.trail.recent(RECENT_ACTIVITY_LIMIT).unwrap();
        let actions: Vec<&str> = recent.iter().map(|a| a.action.as_str()).collect();
        assert_eq!(actions, vec!["step 6", "step 5", "step 4", "step 3", "step 2"]);
        assert!(recent.iter().all(|a| a.id.is_some()));

        let all = ctx.trail.recent(100).unwrap();
        assert_eq!(all.len(), 8);
        assert_eq!(all[7].kind, ActivityKind::Logout);
        assert_eq!(all[7].timestamp, at(13, 19, 0));
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_work_log_changes_are_recorded(ctx: &mut ActivityTestContext) {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let store = WorkLogs::new(Db::open(&ctx.path).unwrap()).with_actor("Kim");
        let mut log = DailyLog::open(store, date).unwrap();

        let mut rejected = WorkLogForm::default();
        assert!(log.create(&mut rejected).is_err());
        assert_eq!(ctx.trail.count().unwrap(), 0);

        let mut form = WorkLogForm {
            time: "09:00".to_string(),
            location: "Floor 2 (2F)".to_string(),
            details: "Bait check".to_string(),
            ..Default::default()
        };
        let id = log.create(&mut form).unwrap();
        log.complete(id).unwrap();
        log.delete(id).unwrap();

        let trail = ctx.trail.recent(10).unwrap();
        let actions: Vec<String> = trail.iter().map(|a| a.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                format!("Deleted work log #{id}"),
                format!("Set work log #{id} to Completed"),
                format!("Added work log #{id} at Floor 2 (2F)"),
            ]
        );
        assert!(trail.iter().all(|a| a.user == "Kim" && a.kind == ActivityKind::Edit));
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_employee_edits_are_recorded(ctx: &mut ActivityTestContext) {
        let mut employees = Employees::new(Db::open(&ctx.path).unwrap()).with_actor("Lee");

        assert!(employees.create(&Employee::new("", "", Team::A)).is_err());
        assert_eq!(ctx.trail.count().unwrap(), 0);

        let starters = starter_roster(&roster(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        employees.seed_if_empty(&starters).unwrap();
        assert_eq!(ctx.trail.count().unwrap(), 0);

        let mut kim = employees.get_all().unwrap().remove(0);
        kim.role = "Shift lead".to_string();
        employees.update(&kim).unwrap();
        let id = kim.id.unwrap();
        employees.delete(id).unwrap();

        let actions: Vec<String> = ctx.trail.recent(10).unwrap().into_iter().map(|a| a.action).collect();
        assert_eq!(actions, vec![format!("Removed employee #{id}"), "Updated employee Kim".to_string()]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_seed_once(ctx: &mut ActivityTestContext) {
        // the 14th is even, so team A clocks in
        let starters = starter_activity(&roster(), at(14, 7, 22));
        assert_eq!(starters.len(), 1);
        assert_eq!(starters[0].user, "Kim");
        assert_eq!(starters[0].kind, ActivityKind::Login);

        assert_eq!(ctx.trail.seed_if_empty(&starters).unwrap(), 1);
        assert_eq!(ctx.trail.seed_if_empty(&starters).unwrap(), 0);
        assert_eq!(ctx.trail.count().unwrap(), 1);
    }

    #[test]
    fn test_kind_text() {
        assert_eq!(ActivityKind::Logout.to_string(), "logout");
        assert_eq!("LOGIN".parse::<ActivityKind>().unwrap(), ActivityKind::Login);
        assert!("vacation".parse::<ActivityKind>().is_err());
    }
}
