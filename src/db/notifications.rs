use super::db::Db;
use super::text_column;
use crate::libs::messages::Message;
use crate::libs::notification::{Notification, NotificationFilter};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, Row};

const INSERT_NOTIFICATION: &str = "INSERT INTO notifications (title, message, kind, category, recipient, is_read, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const SELECT_NOTIFICATIONS: &str = "SELECT id, title, message, kind, category, recipient, is_read, created_at FROM notifications";
const WHERE_UNREAD: &str = "WHERE is_read = FALSE";
const ORDER_BY_NEWEST: &str = "ORDER BY created_at DESC, id DESC";
const MARK_READ: &str = "UPDATE notifications SET is_read = TRUE WHERE id = ?1";
const MARK_ALL_READ: &str = "UPDATE notifications SET is_read = TRUE WHERE is_read = FALSE";
const DELETE_NOTIFICATION: &str = "DELETE FROM notifications WHERE id = ?1";

pub struct Notifications {
    conn: Connection,
}

impl Notifications {
    pub fn new(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn create(&mut self, notification: &Notification) -> Result<i64> {
        self.conn.execute(
            INSERT_NOTIFICATION,
            params![
                notification.title,
                notification.message,
                notification.kind.as_str(),
                notification.category,
                notification.recipient,
                notification.is_read,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Notifications, newest first.
    pub fn fetch(&self, filter: NotificationFilter) -> Result<Vec<Notification>> {
        let sql = match filter {
            NotificationFilter::All => format!("{} {}", SELECT_NOTIFICATIONS, ORDER_BY_NEWEST),
            NotificationFilter::Unread => format!("{} {} {}", SELECT_NOTIFICATIONS, WHERE_UNREAD, ORDER_BY_NEWEST),
        };
        let mut stmt = self.conn.prepare(&sql)?;
        let notifications = stmt.query_map([], Self::map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notifications)
    }

    pub fn unread_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notifications WHERE is_read = FALSE", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn mark_read(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(MARK_READ, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::NotificationNotFound(id)));
        }
        Ok(())
    }

    /// Marks everything read; returns how many changed.
    pub fn mark_all_read(&mut self) -> Result<usize> {
        Ok(self.conn.execute(MARK_ALL_READ, [])?)
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_NOTIFICATION, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::NotificationNotFound(id)));
        }
        Ok(())
    }

    fn map_row(row: &Row) -> rusqlite::Result<Notification> {
        Ok(Notification {
            id: row.get(0)?,
            title: row.get(1)?,
            message: row.get(2)?,
            kind: text_column(row, 3)?,
            category: row.get(4)?,
            recipient: row.get(5)?,
            is_read: row.get(6)?,
            created_at: row.get(7)?,
        })
    }
}
