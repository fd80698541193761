#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftdesk::db::db::Db;
    use shiftdesk::db::employees::Employees;
    use shiftdesk::libs::employee::{starter_roster, DutyBoard, DutyStatus, Employee};
    use shiftdesk::libs::schedule::{Team, TeamRoster};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EmployeeTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for EmployeeTestContext {
        fn setup() -> Self {
            EmployeeTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl EmployeeTestContext {
        fn employees(&self) -> Employees {
            Employees::new(Db::open(&self.temp_dir.path().join("employees.db")).unwrap())
        }
    }

    fn valid(name: &str, team: Team) -> Employee {
        let mut employee = Employee::new(name, "Field technician", team);
        employee.email = format!("{}@facility.example", name.to_lowercase());
        employee.phone = "010-1234-5678".to_string();
        employee.join_date = NaiveDate::from_ymd_opt(2024, 1, 2);
        employee
    }

    #[test]
    fn test_validation_reports_every_problem() {
        let mut employee = Employee::new("", "", Team::A);
        employee.email = "not-an-email".to_string();
        employee.phone = "0101234".to_string();

        let err = employee.validate().unwrap_err();
        for field in ["name", "role", "phone", "email", "join_date"] {
            assert!(err.has_field(field), "missing problem for {field}");
        }
        assert_eq!(err.problems.len(), 5);
        assert!(err.to_string().contains("phone must look like 010-1234-5678"));
    }

    #[test]
    fn test_phone_formats() {
        let mut employee = valid("Kim", Team::A);
        for phone in ["02-123-4567", "010-1234-5678", "031-123-4567"] {
            employee.phone = phone.to_string();
            assert!(employee.validate().is_ok(), "{phone} should be accepted");
        }
        for phone in ["01012345678", "010-12-5678", "a10-1234-5678"] {
            employee.phone = phone.to_string();
            assert!(employee.validate().is_err(), "{phone} should be rejected");
        }
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_create_rejects_invalid_employee(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.employees();
        let mut employee = valid("Kim", Team::A);
        employee.email.clear();

        assert!(employees.create(&employee).is_err());
        assert!(employees.get_all().unwrap().is_empty());
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_crud(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.employees();

        let id = employees.create(&valid("Park", Team::B)).unwrap();
        employees.create(&valid("Choi", Team::A)).unwrap();

        let names: Vec<String> = employees.get_all().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Choi", "Park"]);

        let mut park = employees.get(id).unwrap().unwrap();
        assert_eq!(park.team, Team::B);
        assert_eq!(park.status, DutyStatus::OffDuty);
        park.status = DutyStatus::OnDuty;
        park.department = Some("Pest".to_string());
        employees.update(&park).unwrap();

        let reloaded = employees.get(id).unwrap().unwrap();
        assert_eq!(reloaded.status, DutyStatus::OnDuty);
        assert_eq!(reloaded.department.as_deref(), Some("Pest"));

        employees.delete(id).unwrap();
        assert!(employees.get(id).unwrap().is_none());
        assert!(employees.delete(id).is_err());
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_update_needs_a_stored_id(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.employees();
        let mut employee = valid("Kim", Team::A);

        assert!(employees.update(&employee).is_err());

        employee.id = Some(99);
        let err = employees.update(&employee).unwrap_err();
        assert!(err.to_string().contains("99"));
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_monthly_hours_by_name(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.employees();
        let id = employees.create(&valid("Kim", Team::A)).unwrap();

        assert!(employees.set_monthly_hours("Kim", 162).unwrap());
        assert!(!employees.set_monthly_hours("Nobody", 10).unwrap());
        assert_eq!(employees.get(id).unwrap().unwrap().monthly_hours, 162);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_seed_starter_roster_once(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.employees();
        let roster = TeamRoster {
            team_a: "Kim".to_string(),
            team_b: "Lee".to_string(),
        };
        // the 14th is even, so team A is on duty
        let starters = starter_roster(&roster, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        for starter in &starters {
            assert!(starter.validate().is_ok(), "{} should be editable as seeded", starter.name);
        }

        assert_eq!(employees.seed_if_empty(&starters).unwrap(), 2);
        assert_eq!(employees.seed_if_empty(&starters).unwrap(), 0);

        let board = DutyBoard::from_roster(&employees.get_all().unwrap());
        let on_duty: Vec<&str> = board.current.iter().map(|e| e.name.as_str()).collect();
        let off_duty: Vec<&str> = board.next.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(on_duty, vec!["Kim"]);
        assert_eq!(off_duty, vec!["Lee"]);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_seeded_employee_can_be_edited(ctx: &mut EmployeeTestContext) {
        let mut employees = ctx.employees();
        let roster = TeamRoster {
            team_a: "A".to_string(),
            team_b: "Night Crew".to_string(),
        };
        employees
            .seed_if_empty(&starter_roster(&roster, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()))
            .unwrap();

        for mut employee in employees.get_all().unwrap() {
            employee.role = "Shift lead".to_string();
            employees.update(&employee).unwrap();
        }
        let emails: Vec<String> = employees.get_all().unwrap().into_iter().map(|e| e.email).collect();
        assert_eq!(emails, vec!["a@shiftdesk.local", "nightcrew@shiftdesk.local"]);
    }
}
