//! Attendance records and the report computed from them.
//!
//! Attendance lines are produced outside shiftdesk (a time clock, an HR
//! export) and only read here. [`AttendanceAggregator`] turns any collection
//! of them into the figures of the attendance report: headline counters, a
//! Monday-to-Sunday hours chart and the share of records per department.
//! The aggregator is a pure function of its input; callers re-run it whenever
//! the collection changes.
//!
//! ## Overtime
//!
//! A standard shift is 540 minutes (9 hours). Any minutes beyond that count
//! as overtime, whether or not the record was flagged `Overtime`, so long
//! unflagged shifts are not missed.

use crate::libs::duration::parse_minutes;
use crate::text_enum;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

pub const STANDARD_SHIFT_MINUTES: u64 = 540;
pub const NO_DEPARTMENT_DATA: &str = "No data";

text_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum AttendanceStatus: "attendance status" {
        Normal => "Normal",
        Late => "Late",
        Overtime => "Overtime",
        Leave => "Leave",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub id: i64,
    pub employee_name: String,
    #[serde(default)]
    pub department: String,
    /// `YYYY-MM-DD`; kept as text because upstream data is not always clean
    pub date: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    /// Duration text such as `"9h 18m"`
    #[serde(default)]
    pub total_hours: String,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn minutes(&self) -> u64 {
        parse_minutes(&self.total_hours)
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceStats {
    pub total_hours: u64,
    pub late_count: usize,
    pub overtime_hours: u64,
    pub leave_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayHours {
    pub day: String,
    pub hours: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRatio {
    pub name: String,
    pub ratio: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceReport {
    pub stats: AttendanceStats,
    pub weekly: Vec<WeekdayHours>,
    pub departments: Vec<DepartmentRatio>,
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy)]
pub struct AttendanceAggregator {
    standard_shift_minutes: u64,
}

impl Default for AttendanceAggregator {
    fn default() -> Self {
        Self {
            standard_shift_minutes: STANDARD_SHIFT_MINUTES,
        }
    }
}

impl AttendanceAggregator {
    pub fn new(standard_shift_minutes: u64) -> Self {
        Self { standard_shift_minutes }
    }

    /// Computes the full report. Record order does not matter.
    pub fn aggregate(&self, records: &[AttendanceRecord]) -> AttendanceReport {
        AttendanceReport {
            stats: self.stats(records),
            weekly: self.weekly_hours(records),
            departments: department_ratios(records),
        }
    }

    pub fn stats(&self, records: &[AttendanceRecord]) -> AttendanceStats {
        let mut total_minutes = 0u64;
        let mut overtime_minutes = 0u64;
        let mut late_count = 0;
        let mut leave_count = 0;

        for record in records {
            let minutes = record.minutes();
            total_minutes = total_minutes.saturating_add(minutes);

            match record.status {
                AttendanceStatus::Late => late_count += 1,
                AttendanceStatus::Leave => leave_count += 1,
                _ => {}
            }

            if record.status == AttendanceStatus::Overtime || minutes > self.standard_shift_minutes {
                overtime_minutes = overtime_minutes.saturating_add(minutes.saturating_sub(self.standard_shift_minutes));
            }
        }

        AttendanceStats {
            total_hours: total_minutes / 60,
            late_count,
            overtime_hours: overtime_minutes / 60,
            leave_count,
        }
    }

    /// Hours worked per weekday, Monday first. Records with an unreadable
    /// date are left out of this chart only.
    pub fn weekly_hours(&self, records: &[AttendanceRecord]) -> Vec<WeekdayHours> {
        let mut hours = [0f64; 7];
        for record in records {
            if let Some(date) = record.parsed_date() {
                hours[date.weekday().num_days_from_monday() as usize] += record.minutes() as f64 / 60.0;
            }
        }

        WEEK.iter()
            .zip(hours)
            .map(|(day, h)| WeekdayHours {
                day: day.to_string(),
                hours: h.round() as u64,
            })
            .collect()
    }
}

/// Share of records per department, in order of first appearance.
///
/// Records without a department still count towards the total. An input
/// with no departments at all yields a single `"No data"` bucket at 0.
pub fn department_ratios(records: &[AttendanceRecord]) -> Vec<DepartmentRatio> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in records.iter().filter(|r| !r.department.is_empty()) {
        match counts.iter_mut().find(|(name, _)| *name == record.department) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.department.as_str(), 1)),
        }
    }

    if counts.is_empty() {
        return vec![DepartmentRatio {
            name: NO_DEPARTMENT_DATA.to_string(),
            ratio: 0,
        }];
    }

    let total = records.len() as f64;
    counts
        .into_iter()
        .map(|(name, count)| DepartmentRatio {
            name: name.to_string(),
            ratio: (count as f64 / total * 100.0).round() as u32,
        })
        .collect()
}

/// Whole hours worked per employee during `year`/`month`, sorted by name.
pub fn monthly_hours_by_employee(records: &[AttendanceRecord], year: i32, month: u32) -> Vec<(String, u64)> {
    let prefix = format!("{year:04}-{month:02}");
    let mut minutes: HashMap<&str, u64> = HashMap::new();
    for record in records {
        if record.employee_name.is_empty() || !record.date.starts_with(&prefix) {
            continue;
        }
        let total = minutes.entry(record.employee_name.as_str()).or_default();
        *total = total.saturating_add(record.minutes());
    }

    let mut hours: Vec<(String, u64)> = minutes
        .into_iter()
        .map(|(name, mins)| (name.to_string(), (mins as f64 / 60.0).round() as u64))
        .collect();
    hours.sort();
    hours
}

/// Reads attendance lines from CSV with a header row.
///
/// Columns are matched by name: `employee_name`, `date` and `status` are
/// required; `department`, `check_in`, `check_out` and `total_hours` may be
/// missing. Any `id` column is ignored since the store assigns ids.
pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Vec<AttendanceRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for (line, result) in rdr.deserialize::<AttendanceRecord>().enumerate() {
        let mut record = result.map_err(|e| anyhow::anyhow!("attendance line {}: {}", line + 1, e))?;
        record.id = 0;
        records.push(record);
    }
    Ok(records)
}
