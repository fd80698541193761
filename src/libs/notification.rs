use crate::text_enum;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

text_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum NotificationKind: "notification kind" {
        Alert => "alert",
        Info => "info",
        Success => "success",
        Warning => "warning",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Option<i64>,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub category: String,
    /// Addressee; `None` for facility-wide notices
    pub recipient: Option<String>,
    pub is_read: bool,
    pub created_at: Option<NaiveDateTime>,
}

impl Notification {
    pub fn new(title: &str, message: &str, kind: NotificationKind, category: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            message: message.to_string(),
            kind,
            category: category.to_string(),
            recipient: None,
            is_read: false,
            created_at: None,
        }
    }

    pub fn to(mut self, recipient: &str) -> Self {
        self.recipient = Some(recipient.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationFilter {
    All,
    Unread,
}
