#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};
    use parking_lot::Mutex;
    use shiftdesk::db::db::Db;
    use shiftdesk::db::schedules::WorkSchedules;
    use shiftdesk::libs::schedule::{
        plan_month, receiving_shift, shift_for_day, CalendarGrid, ScheduleError, ScheduleStatus, ShiftSource, ShiftTiming, Team,
        TeamRoster, WorkSchedule, YearMonth,
    };
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ScheduleTestContext {
        temp_dir: TempDir,
        roster: TeamRoster,
    }

    impl TestContext for ScheduleTestContext {
        fn setup() -> Self {
            ScheduleTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                roster: TeamRoster {
                    team_a: "Kim".to_string(),
                    team_b: "Lee".to_string(),
                },
            }
        }
    }

    impl ScheduleTestContext {
        fn store(&self) -> WorkSchedules {
            WorkSchedules::new(Db::open(&self.temp_dir.path().join("schedules.db")).unwrap())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_starting_sunday_has_five_rows() {
        // February 2015: 28 days, starts on a Sunday
        let grid = CalendarGrid::build(2015, 2, &[], &TeamRoster::default()).unwrap();

        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.leading_cells(), 0);
        assert_eq!(grid.weeks[0][0].date, date(2015, 2, 1));
        assert_eq!(grid.cells().filter(|c| c.in_month).count(), 28);
        assert_eq!(grid.weeks[4][0].date, date(2015, 3, 1));
        assert!(!grid.weeks[4][0].in_month);
    }

    #[test]
    fn test_31_day_month_starting_saturday_has_six_rows() {
        // March 2025 starts on a Saturday
        assert_eq!(date(2025, 3, 1).weekday(), Weekday::Sat);
        let grid = CalendarGrid::build(2025, 3, &[], &TeamRoster::default()).unwrap();

        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.leading_cells(), 6);
        assert_eq!(grid.weeks[0][0].date, date(2025, 2, 23));
        assert_eq!(grid.weeks[0][6].date, date(2025, 3, 1));
        assert_eq!(grid.weeks[5][6].date, date(2025, 4, 5));
    }

    #[test]
    fn test_30_day_month_starting_saturday_fits_six_rows_exactly() {
        // November 2025: Saturday start, 6 + 30 = 36 cells
        let grid = CalendarGrid::build(2025, 11, &[], &TeamRoster::default()).unwrap();
        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.cells().filter(|c| c.in_month).count(), 30);
    }

    #[test]
    fn test_only_in_month_cells_carry_shifts() {
        let grid = CalendarGrid::build(2025, 3, &[], &TeamRoster::default()).unwrap();
        for cell in grid.cells() {
            assert_eq!(cell.shift.is_some(), cell.in_month);
        }
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let err = CalendarGrid::build(2025, 13, &[], &TeamRoster::default()).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidMonth { year: 2025, month: 13 });
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_derived_shift_alternates_by_day(ctx: &mut ScheduleTestContext) {
        let even = shift_for_day(date(2025, 3, 14), &[], &ctx.roster);
        assert_eq!(even.team, Team::A);
        assert_eq!(even.worker, "Kim");
        assert_eq!(even.source, ShiftSource::Derived);

        let odd = shift_for_day(date(2025, 3, 15), &[], &ctx.roster);
        assert_eq!(odd.team, Team::B);
        assert_eq!(odd.worker, "Lee");
    }

    #[test]
    fn test_default_roster_uses_team_letters() {
        let shift = shift_for_day(date(2025, 3, 2), &[], &TeamRoster::default());
        assert_eq!(shift.worker, "A");
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_calendar_and_dashboard_agree(ctx: &mut ScheduleTestContext) {
        let grid = CalendarGrid::build(2025, 3, &[], &ctx.roster).unwrap();
        for cell in grid.cells().filter(|c| c.in_month) {
            let dashboard = shift_for_day(cell.date, &[], &ctx.roster);
            assert_eq!(cell.shift.as_ref(), Some(&dashboard));
        }
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_persisted_schedule_wins(ctx: &mut ScheduleTestContext) {
        let mut store = ctx.store();
        store
            .insert(&WorkSchedule {
                id: 0,
                date: date(2025, 3, 14),
                team: Team::B,
                worker_name: "Choi".to_string(),
                status: ScheduleStatus::Scheduled,
            })
            .unwrap();
        let schedules = store.fetch_month(2025, 3).unwrap();

        let shift = shift_for_day(date(2025, 3, 14), &schedules, &ctx.roster);
        assert_eq!(shift.team, Team::B);
        assert_eq!(shift.worker, "Choi");
        assert_eq!(shift.source, ShiftSource::Persisted);

        let grid = CalendarGrid::build(2025, 3, &schedules, &ctx.roster).unwrap();
        let cell = grid.cells().find(|c| c.in_month && c.day() == 14).unwrap();
        assert_eq!(cell.shift.as_ref().unwrap().worker, "Choi");
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_receiving_shift_is_next_day(ctx: &mut ScheduleTestContext) {
        let shift = receiving_shift(date(2025, 3, 31), &[], &ctx.roster);
        assert_eq!(shift.date, date(2025, 4, 1));
        assert_eq!(shift.worker, "Lee");
    }

    #[test]
    fn test_shift_timing() {
        let today = date(2025, 3, 14);
        let roster = TeamRoster::default();
        assert_eq!(shift_for_day(date(2025, 3, 13), &[], &roster).timing(today), ShiftTiming::Past);
        assert_eq!(shift_for_day(today, &[], &roster).timing(today), ShiftTiming::Current);
        assert_eq!(shift_for_day(date(2025, 3, 15), &[], &roster).timing(today), ShiftTiming::Future);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_plan_month_statuses(ctx: &mut ScheduleTestContext) {
        let plan = plan_month(2025, 2, &ctx.roster, date(2025, 2, 10)).unwrap();

        assert_eq!(plan.len(), 28);
        assert_eq!(plan[8].status, ScheduleStatus::Completed);
        assert_eq!(plan[9].status, ScheduleStatus::InProgress);
        assert_eq!(plan[10].status, ScheduleStatus::Scheduled);
        assert!(plan.iter().all(|s| s.team == Team::on_duty(s.date)));
        assert_eq!(plan[1].worker_name, "Kim");
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_seed_only_when_empty(ctx: &mut ScheduleTestContext) {
        let mut store = ctx.store();
        let seen = Arc::new(Mutex::new(0usize));
        let sink = seen.clone();
        let sub = store.subscribe(move |all: &[WorkSchedule]| *sink.lock() = all.len()).unwrap();

        let plan = plan_month(2025, 4, &ctx.roster, date(2025, 4, 1)).unwrap();
        assert_eq!(store.seed_if_empty(&plan).unwrap(), 30);
        assert_eq!(*seen.lock(), 30);

        assert_eq!(store.seed_if_empty(&plan).unwrap(), 0);
        assert_eq!(store.count().unwrap(), 30);
        assert_eq!(store.fetch_month(2025, 4).unwrap().len(), 30);
        assert!(store.fetch_month(2025, 5).unwrap().is_empty());
        sub.cancel();
    }

    #[test]
    fn test_year_month_parsing() {
        let month: YearMonth = "2025-03".parse().unwrap();
        assert_eq!(month, YearMonth { year: 2025, month: 3 });
        assert_eq!(month.to_string(), "2025-03");
        assert!(month.contains_date_str("2025-03-31"));
        assert!(!month.contains_date_str("2025-04-01"));
        assert_eq!(month.first_day().unwrap(), date(2025, 3, 1));

        assert_eq!(
            "March".parse::<YearMonth>().unwrap_err(),
            ScheduleError::UnreadableMonth("March".to_string())
        );
        assert!(matches!("2025-00".parse::<YearMonth>(), Err(ScheduleError::InvalidMonth { .. })));
    }
}
