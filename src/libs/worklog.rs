//! Work-log entries and the rules that govern them.
//!
//! A work-log entry is one reported unit of field work (pest control or a
//! facility task) for a day. Entries are owned by the work-log store; this
//! module only describes their shape, the status state machine, the creation
//! form and the read-only projections used by the daily log and handover
//! screens.
//!
//! ## Status lifecycle
//!
//! ```text
//! Pending ──▶ In Progress ──▶ Completed
//!    └────────────────────────────▲
//! ```
//!
//! Transitions only move forward. Nothing leaves `Completed`.

use crate::libs::config::FacilityConfig;
use crate::text_enum;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

text_enum! {
    /// What kind of work the entry records.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum TaskKind: "task kind" {
        Pest => "Pest",
        Facility => "Facility",
    }
}

text_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub enum Priority: "priority" {
        Normal => "Normal",
        Important => "Important",
        Urgent => "Urgent",
    }
}

text_enum! {
    /// Progress of a single entry. Variant order is lifecycle order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub enum LogStatus: "status" {
        Pending => "Pending",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

impl LogStatus {
    /// Whether moving from `self` to `next` is allowed.
    ///
    /// Forward moves only; staying put is not a transition.
    pub fn can_advance_to(self, next: LogStatus) -> bool {
        self < next
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkLogError {
    #[error("work details are required")]
    MissingDetails,
    #[error("a location is required")]
    MissingLocation,
    #[error("work log #{0} not found")]
    NotFound(i64),
    #[error("cannot move work log from '{from}' to '{to}'")]
    InvalidTransition { from: LogStatus, to: LogStatus },
}

/// Validated status change for an entry currently at `from`.
///
/// Returns `Ok(None)` when the entry is already at `to`, so repeated clicks
/// do not produce a write.
pub fn transition(from: LogStatus, to: LogStatus) -> Result<Option<LogStatus>, WorkLogError> {
    if from == to {
        return Ok(None);
    }
    if from.can_advance_to(to) {
        Ok(Some(to))
    } else {
        Err(WorkLogError::InvalidTransition { from, to })
    }
}

/// A stored work-log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLogEntry {
    pub id: i64,
    pub date: NaiveDate,
    /// Time of day as entered, normally `HH:MM`
    pub time: String,
    pub kind: TaskKind,
    pub category: String,
    pub details: String,
    pub location: String,
    pub priority: Priority,
    pub status: LogStatus,
    pub photo_url: Option<String>,
}

impl WorkLogEntry {
    pub fn has_photo(&self) -> bool {
        self.photo_url.is_some()
    }

    /// Entries that still need the next shift's attention.
    ///
    /// Urgent entries stay visible even after completion so they are never
    /// silently dropped from a handover.
    pub fn needs_handover(&self) -> bool {
        self.status != LogStatus::Completed || self.priority == Priority::Urgent
    }
}

/// Row selection for reading work logs back from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkLogFilter {
    All,
    Date(NaiveDate),
}

/// A validated entry ready to be appended to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkLog {
    pub date: NaiveDate,
    pub time: String,
    pub kind: TaskKind,
    pub category: String,
    pub details: String,
    pub location: String,
    pub priority: Priority,
    pub status: LogStatus,
    pub photo_url: Option<String>,
}

/// The "new work record" input form.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkLogForm {
    pub kind: TaskKind,
    pub time: String,
    pub location: String,
    pub category: String,
    pub priority: Priority,
    pub details: String,
    pub photo_url: Option<String>,
}

impl Default for WorkLogForm {
    fn default() -> Self {
        Self {
            kind: TaskKind::Pest,
            time: Local::now().format("%H:%M").to_string(),
            location: String::new(),
            category: DEFAULT_CATEGORIES[0].to_string(),
            priority: Priority::Normal,
            details: String::new(),
            photo_url: None,
        }
    }
}

impl WorkLogForm {
    /// Checks required fields and builds the entry for `date`.
    ///
    /// The status is always `Pending` regardless of anything the caller did.
    pub fn validate(&self, date: NaiveDate) -> Result<NewWorkLog, WorkLogError> {
        if self.details.trim().is_empty() {
            return Err(WorkLogError::MissingDetails);
        }
        if self.location.trim().is_empty() {
            return Err(WorkLogError::MissingLocation);
        }

        Ok(NewWorkLog {
            date,
            time: self.time.clone(),
            kind: self.kind,
            category: self.category.clone(),
            details: self.details.trim().to_string(),
            location: self.location.clone(),
            priority: self.priority,
            status: LogStatus::Pending,
            photo_url: self.photo_url.clone().filter(|url| !url.is_empty()),
        })
    }

    /// Clears the form back to its defaults after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Counters shown above the daily log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailyLogStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub urgent: usize,
}

impl DailyLogStats {
    pub fn from_entries(entries: &[WorkLogEntry]) -> Self {
        Self {
            total: entries.len(),
            pending: entries.iter().filter(|e| e.status == LogStatus::Pending).count(),
            completed: entries.iter().filter(|e| e.status == LogStatus::Completed).count(),
            urgent: entries.iter().filter(|e| e.priority == Priority::Urgent).count(),
        }
    }
}

/// The handover-eligible subset of `entries`, in their original order.
pub fn derive_pending(entries: &[WorkLogEntry]) -> Vec<WorkLogEntry> {
    entries.iter().filter(|e| e.needs_handover()).cloned().collect()
}

pub const DEFAULT_CATEGORIES: &[&str] = &["Routine inspection", "Emergency pest control", "Facility repair", "Customer request"];

/// Building levels offered in the location picker, lowest basement first.
pub fn location_options(facility: &FacilityConfig) -> Vec<String> {
    let basements = (1..=facility.basement_levels)
        .rev()
        .map(|level| format!("Basement {level} (B{level})"));
    let floors = (1..=facility.above_ground_levels).map(|level| format!("Floor {level} ({level}F)"));
    basements.chain(floors).collect()
}
