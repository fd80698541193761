use super::db::Db;
use crate::libs::handover::HandoverReceipt;
use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

const INSERT_HANDOVER: &str = "INSERT INTO handovers (items, note, recipient, sent_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_HANDOVERS: &str = "SELECT items, note, recipient, sent_at FROM handovers ORDER BY sent_at DESC, id DESC";

/// Audit trail of sent handovers.
pub struct Handovers {
    conn: Connection,
}

impl Handovers {
    pub fn new(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn record(&mut self, receipt: &HandoverReceipt) -> Result<i64> {
        let items = serde_json::to_string(&receipt.items)?;
        self.conn
            .execute(INSERT_HANDOVER, params![items, receipt.note, receipt.recipient, receipt.sent_at])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Sent handovers, most recent first.
    pub fn fetch_all(&self) -> Result<Vec<HandoverReceipt>> {
        let mut stmt = self.conn.prepare(SELECT_HANDOVERS)?;
        let receipts = stmt.query_map([], Self::map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(receipts)
    }

    fn map_row(row: &Row) -> rusqlite::Result<HandoverReceipt> {
        let items: String = row.get(0)?;
        let items = serde_json::from_str(&items)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;
        Ok(HandoverReceipt {
            items,
            note: row.get(1)?,
            recipient: row.get(2)?,
            sent_at: row.get(3)?,
        })
    }
}
