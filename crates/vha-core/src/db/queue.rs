//! Sync queue database operations.
//!
//! The queue is an append-only FIFO log, independent of the entity
//! collections. Entries are never reordered or deduplicated, and they are
//! removed only by `clear_queue` after a fully successful drain, never one
//! at a time.

use rusqlite::params;

use super::{Database, DbResult};
use crate::models::{QueueEntry, QueueOperation};

impl Database {
    /// Append an operation to the queue tail, returning its sequence id.
    pub fn enqueue(&self, op: &QueueOperation) -> DbResult<i64> {
        let payload = serde_json::to_string(op)?;
        self.conn.execute(
            "INSERT INTO sync_queue (op_type, payload) VALUES (?1, ?2)",
            params![op.op_type().to_string(), payload],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Read the full queue in FIFO order without removing anything.
    pub fn peek_queue(&self) -> DbResult<Vec<QueueEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT seq, payload FROM sync_queue ORDER BY seq")?;
        let rows = stmt.query_map([], |row| {
            let seq: i64 = row.get(0)?;
            let payload: String = row.get(1)?;
            Ok((seq, payload))
        })?;
        let mut entries = Vec::new();
        for row in rows {
            let (seq, payload) = row?;
            let op: QueueOperation = serde_json::from_str(&payload)?;
            entries.push(QueueEntry { seq, op });
        }
        Ok(entries)
    }

    /// Remove all queue entries.
    pub fn clear_queue(&self) -> DbResult<()> {
        self.conn.execute("DELETE FROM sync_queue", [])?;
        Ok(())
    }

    /// Number of pending queue entries.
    pub fn queue_len(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM sync_queue", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
