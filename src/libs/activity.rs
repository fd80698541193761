//! Activity trail: clock-ins, clock-outs and edits, newest first.
//!
//! Work-log and roster stores append an `edit` entry after each successful
//! write. Clock-ins and clock-outs come from `shiftdesk activity in|out` and
//! from a sent handover, which clocks the outgoing worker out.

use crate::libs::config::Config;
use crate::libs::schedule::{Team, TeamRoster};
use crate::text_enum;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Entries shown by default.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Actor recorded when nobody more specific is known.
pub const DEFAULT_ACTOR: &str = "shiftdesk";

text_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum ActivityKind: "activity kind" {
        Login => "login",
        Logout => "logout",
        Edit => "edit",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: Option<i64>,
    pub user: String,
    pub action: String,
    pub kind: ActivityKind,
    pub timestamp: NaiveDateTime,
}

impl ActivityLog {
    pub fn new(user: &str, action: &str, kind: ActivityKind, timestamp: NaiveDateTime) -> Self {
        Self {
            id: None,
            user: user.to_string(),
            action: action.to_string(),
            kind,
            timestamp,
        }
    }

    /// An entry stamped with the local time.
    pub fn now(user: &str, action: &str, kind: ActivityKind) -> Self {
        Self::new(user, action, kind, Local::now().naive_local())
    }
}

/// The worker the alternating rule puts on duty at `at`.
pub fn on_duty_actor(roster: &TeamRoster, at: NaiveDateTime) -> String {
    roster.worker(Team::on_duty(at.date())).to_string()
}

/// The worker on duty right now, per the configured roster.
pub fn current_actor() -> anyhow::Result<String> {
    Ok(on_duty_actor(&Config::read()?.shift().roster(), Local::now().naive_local()))
}

/// Trail for a fresh database: the on-duty worker clocked in at `at`.
pub fn starter_activity(roster: &TeamRoster, at: NaiveDateTime) -> Vec<ActivityLog> {
    vec![ActivityLog::new(&on_duty_actor(roster, at), "Clocked in", ActivityKind::Login, at)]
}
