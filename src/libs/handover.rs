//! End-of-shift handover composition.
//!
//! A [`HandoverDraft`] is a short-lived value owned by whoever is composing a
//! handover: a selection of pending work-log entries plus a free-text note.
//! Submitting it produces a [`HandoverReceipt`]; the draft itself never touches
//! the work-log store. What happens to the receipt (audit record, delivery to
//! the receiving shift) is decided by the caller.

use crate::libs::notification::{Notification, NotificationKind};
use crate::libs::worklog::{Priority, WorkLogEntry};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandoverError {
    #[error("select at least one item or write a note before sending")]
    NothingToSend,
    #[error("this handover has already been sent")]
    AlreadySent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandoverDraft {
    selected: Vec<i64>,
    note: String,
    sent: bool,
}

/// What was handed over, to whom and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoverReceipt {
    pub items: Vec<i64>,
    pub note: String,
    pub recipient: String,
    pub sent_at: NaiveDateTime,
}

impl HandoverDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` to the selection, or removes it if already selected.
    pub fn toggle(&mut self, id: i64) {
        match self.selected.iter().position(|&s| s == id) {
            Some(idx) => {
                self.selected.remove(idx);
            }
            None => self.selected.push(id),
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in the order they were picked.
    pub fn selected(&self) -> &[i64] {
        &self.selected
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// Drops selections that are no longer handover-eligible in the latest
    /// snapshot of pending entries.
    pub fn retain_pending(&mut self, pending: &[WorkLogEntry]) {
        self.selected.retain(|id| pending.iter().any(|e| e.id == *id));
    }

    /// Marks the draft as sent and returns the receipt.
    ///
    /// Fails without changing anything when there is neither a selection nor
    /// a note, or when the draft was already sent.
    pub fn submit(&mut self, recipient: &str, sent_at: NaiveDateTime) -> Result<HandoverReceipt, HandoverError> {
        if self.sent {
            return Err(HandoverError::AlreadySent);
        }
        if self.selected.is_empty() && self.note.is_empty() {
            return Err(HandoverError::NothingToSend);
        }

        self.sent = true;
        Ok(HandoverReceipt {
            items: self.selected.clone(),
            note: self.note.clone(),
            recipient: recipient.to_string(),
            sent_at,
        })
    }

    /// Back to an empty, unsent draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl HandoverReceipt {
    /// The inbox notification that delivers this handover to its recipient.
    ///
    /// `entries` is used to describe the handed-over items; ids with no
    /// matching entry are listed by number only.
    pub fn to_notification(&self, entries: &[WorkLogEntry]) -> Notification {
        let mut lines: Vec<String> = self
            .items
            .iter()
            .map(|id| match entries.iter().find(|e| e.id == *id) {
                Some(entry) => format!("[{}] {} - {} ({})", entry.priority, entry.location, entry.details, entry.status),
                None => format!("#{id}"),
            })
            .collect();
        if !self.note.is_empty() {
            lines.push(format!("Note: {}", self.note));
        }

        let kind = if entries
            .iter()
            .any(|e| self.items.contains(&e.id) && e.priority == Priority::Urgent)
        {
            NotificationKind::Alert
        } else {
            NotificationKind::Info
        };

        Notification::new(
            &format!("Shift handover ({} item(s))", self.items.len()),
            &lines.join("\n"),
            kind,
            HANDOVER_CATEGORY,
        )
        .to(&self.recipient)
    }
}

pub const HANDOVER_CATEGORY: &str = "handover";
