//! Roster entries and their validation.

use crate::libs::schedule::{Team, TeamRoster};
use crate::text_enum;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

text_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum DutyStatus: "duty status" {
        OnDuty => "On-Duty",
        OffDuty => "Off-Duty",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<i64>,
    pub name: String,
    pub role: String,
    pub team: Team,
    pub status: DutyStatus,
    pub monthly_hours: u32,
    pub total_hours: u32,
    pub email: String,
    pub phone: String,
    pub department: Option<String>,
    pub join_date: Option<NaiveDate>,
}

impl Employee {
    pub fn new(name: &str, role: &str, team: Team) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            role: role.to_string(),
            team,
            status: DutyStatus::OffDuty,
            monthly_hours: 0,
            total_hours: 0,
            email: String::new(),
            phone: String::new(),
            department: None,
            join_date: None,
        }
    }

    /// Checks every field and reports all problems at once.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push(FieldProblem::new("name", "name is required"));
        }
        if self.role.trim().is_empty() {
            problems.push(FieldProblem::new("role", "role is required"));
        }

        if self.phone.trim().is_empty() {
            problems.push(FieldProblem::new("phone", "phone is required"));
        } else if !phone_re().is_match(&self.phone) {
            problems.push(FieldProblem::new("phone", "phone must look like 010-1234-5678"));
        }

        if self.email.trim().is_empty() {
            problems.push(FieldProblem::new("email", "email is required"));
        } else if !email_re().is_match(&self.email) {
            problems.push(FieldProblem::new("email", "email address is not valid"));
        }

        if self.join_date.is_none() {
            problems.push(FieldProblem::new("join_date", "join date is required"));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(EmployeeValidationError { problems })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProblem {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldProblem {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .problems.iter().map(|p| p.message).collect::<Vec<_>>().join("; "))]
pub struct EmployeeValidationError {
    pub problems: Vec<FieldProblem>,
}

impl EmployeeValidationError {
    pub fn has_field(&self, field: &str) -> bool {
        self.problems.iter().any(|p| p.field == field)
    }
}

static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^\d{2,3}-\d{3,4}-\d{4}$").expect("static phone pattern"))
}

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

/// Who is working now and who takes over next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DutyBoard {
    pub current: Vec<Employee>,
    pub next: Vec<Employee>,
}

impl DutyBoard {
    pub fn from_roster(employees: &[Employee]) -> Self {
        let (current, next) = employees.iter().cloned().partition(|e| e.status == DutyStatus::OnDuty);
        Self { current, next }
    }
}

/// One employee per team, named after the roster, for a fresh database.
///
/// The team the alternating rule puts on duty `today` starts `On-Duty`.
/// Contact fields get placeholders that pass [`Employee::validate`], so a
/// seeded record can be edited without touching them.
pub fn starter_roster(roster: &TeamRoster, today: NaiveDate) -> Vec<Employee> {
    Team::ALL
        .iter()
        .enumerate()
        .map(|(i, &team)| {
            let mut employee = Employee::new(roster.worker(team), "Field technician", team);
            if Team::on_duty(today) == team {
                employee.status = DutyStatus::OnDuty;
            }
            employee.email = placeholder_email(&employee.name, team);
            employee.phone = format!("010-0000-{:04}", i + 1);
            employee.department = Some("Facility".to_string());
            employee.join_date = Some(today);
            employee
        })
        .collect()
}

fn placeholder_email(name: &str, team: Team) -> String {
    let local: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if local.is_empty() {
        format!("team-{}@shiftdesk.local", team.as_str().to_ascii_lowercase())
    } else {
        format!("{local}@shiftdesk.local")
    }
}
