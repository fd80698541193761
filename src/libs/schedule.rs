//! Duty schedules and the monthly calendar.
//!
//! Two teams, `A` and `B`, alternate full days of coverage. A persisted
//! [`WorkSchedule`] for a date always wins; without one the team is derived
//! from the day of the month (even days go to team A). Every screen that
//! shows who is on duty goes through [`shift_for_day`], so the dashboard and
//! the schedule screen cannot disagree about the same date.
//!
//! [`CalendarGrid`] lays a month out in weeks starting on Sunday, padded with
//! the tail of the previous month and the head of the next one.

use crate::text_enum;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

text_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Team: "team" {
        A => "A",
        B => "B",
    }
}

impl Team {
    /// The team the alternating rule puts on duty on `date`.
    pub fn on_duty(date: NaiveDate) -> Team {
        if date.day() % 2 == 0 {
            Team::A
        } else {
            Team::B
        }
    }
}

text_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum ScheduleStatus: "schedule status" {
        Scheduled => "Scheduled",
        InProgress => "InProgress",
        Completed => "Completed",
    }
}

text_enum! {
    /// Where a shift sits relative to today.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum ShiftTiming: "shift timing" {
        Past => "past",
        Current => "current",
        Future => "future",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftSource {
    Persisted,
    Derived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub id: i64,
    pub date: NaiveDate,
    pub team: Team,
    pub worker_name: String,
    pub status: ScheduleStatus,
}

/// Worker names used when a date has no stored schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub team_a: String,
    pub team_b: String,
}

impl Default for TeamRoster {
    fn default() -> Self {
        Self {
            team_a: "A".to_string(),
            team_b: "B".to_string(),
        }
    }
}

impl TeamRoster {
    pub fn worker(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub date: NaiveDate,
    pub team: Team,
    pub worker: String,
    pub source: ShiftSource,
}

impl Shift {
    pub fn timing(&self, today: NaiveDate) -> ShiftTiming {
        match self.date.cmp(&today) {
            std::cmp::Ordering::Less => ShiftTiming::Past,
            std::cmp::Ordering::Equal => ShiftTiming::Current,
            std::cmp::Ordering::Greater => ShiftTiming::Future,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("{year}-{month:02} is not a valid month")]
    InvalidMonth { year: i32, month: u32 },
    #[error("'{0}' is not a month, expected YYYY-MM")]
    UnreadableMonth(String),
}

/// A calendar month, written `YYYY-MM` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ScheduleError> {
        month_start(year, month)?;
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Result<NaiveDate, ScheduleError> {
        month_start(self.year, self.month)
    }

    /// Whether a `YYYY-MM-DD` date string falls in this month.
    pub fn contains_date_str(&self, date: &str) -> bool {
        date.starts_with(&self.to_string())
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unreadable = || ScheduleError::UnreadableMonth(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(unreadable)?;
        let year: i32 = year.parse().map_err(|_| unreadable())?;
        let month: u32 = month.parse().map_err(|_| unreadable())?;
        Self::new(year, month)
    }
}

/// Who is on duty on `date`: the stored schedule if any, else the
/// alternating-day rule.
pub fn shift_for_day(date: NaiveDate, schedules: &[WorkSchedule], roster: &TeamRoster) -> Shift {
    match schedules.iter().find(|s| s.date == date) {
        Some(stored) => Shift {
            date,
            team: stored.team,
            worker: stored.worker_name.clone(),
            source: ShiftSource::Persisted,
        },
        None => {
            let team = Team::on_duty(date);
            Shift {
                date,
                team,
                worker: roster.worker(team).to_string(),
                source: ShiftSource::Derived,
            }
        }
    }
}

/// The shift that receives a handover written on `date`: the next day's.
pub fn receiving_shift(date: NaiveDate, schedules: &[WorkSchedule], roster: &TeamRoster) -> Shift {
    let next = date.succ_opt().unwrap_or(date);
    shift_for_day(next, schedules, roster)
}

/// First day of `year`/`month`.
pub fn month_start(year: i32, month: u32) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ScheduleError::InvalidMonth { year, month })
}

pub fn days_in_month(first: NaiveDate) -> u32 {
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        // Only reachable at the very end of chrono's range
        None => 31,
    }
}

/// Schedules for a whole month following the alternating rule.
///
/// Days before `today` are `Completed`, `today` is `InProgress` and later
/// days are `Scheduled`. Ids are left at 0 for the store to assign.
pub fn plan_month(year: i32, month: u32, roster: &TeamRoster, today: NaiveDate) -> Result<Vec<WorkSchedule>, ScheduleError> {
    let first = month_start(year, month)?;
    Ok((0..days_in_month(first))
        .filter_map(|offset| first.checked_add_days(Days::new(offset as u64)))
        .map(|date| {
            let team = Team::on_duty(date);
            WorkSchedule {
                id: 0,
                date,
                team,
                worker_name: roster.worker(team).to_string(),
                status: match date.cmp(&today) {
                    std::cmp::Ordering::Less => ScheduleStatus::Completed,
                    std::cmp::Ordering::Equal => ScheduleStatus::InProgress,
                    std::cmp::Ordering::Greater => ScheduleStatus::Scheduled,
                },
            }
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_month: bool,
    /// Present for in-month cells only
    pub shift: Option<Shift>,
}

impl CalendarCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[CalendarCell; 7]>,
}

impl CalendarGrid {
    /// Builds the 5- or 6-week grid for `year`/`month`.
    pub fn build(year: i32, month: u32, schedules: &[WorkSchedule], roster: &TeamRoster) -> Result<Self, ScheduleError> {
        let first = month_start(year, month)?;
        let leading = first.weekday().num_days_from_sunday() as u64;
        let days = days_in_month(first) as u64;
        let rows: u64 = if leading + days > 35 { 6 } else { 5 };

        let grid_start = first
            .checked_sub_days(Days::new(leading))
            .ok_or(ScheduleError::InvalidMonth { year, month })?;

        let mut cells = Vec::with_capacity((rows * 7) as usize);
        for offset in 0..rows * 7 {
            let date = grid_start
                .checked_add_days(Days::new(offset))
                .ok_or(ScheduleError::InvalidMonth { year, month })?;
            let in_month = date.year() == year && date.month() == month;
            cells.push(CalendarCell {
                date,
                in_month,
                shift: in_month.then(|| shift_for_day(date, schedules, roster)),
            });
        }

        let mut weeks = Vec::with_capacity(rows as usize);
        let mut iter = cells.into_iter();
        for _ in 0..rows {
            let week: Vec<CalendarCell> = iter.by_ref().take(7).collect();
            let week: [CalendarCell; 7] = week.try_into().map_err(|_| ScheduleError::InvalidMonth { year, month })?;
            weeks.push(week);
        }

        Ok(Self { year, month, weeks })
    }

    /// Number of padding cells before day 1.
    pub fn leading_cells(&self) -> usize {
        self.weeks
            .first()
            .map(|week| week.iter().take_while(|c| !c.in_month).count())
            .unwrap_or(0)
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flat_map(|week| week.iter())
    }
}
