//! Order database operations.

use rusqlite::params;

use super::{Database, DbResult};
use crate::models::Order;

impl Database {
    /// Upsert an order keyed by its id.
    pub fn upsert_order(&self, order: &Order) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO orders (id, patient_id, medicine, status, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                status = excluded.status
            "#,
            params![
                order.id,
                order.patient_id,
                order.medicine,
                order.status,
                order.created_at,
            ],
        )?;
        Ok(())
    }

    /// List all orders.
    pub fn list_orders(&self) -> DbResult<Vec<Order>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, patient_id, medicine, status, created_at FROM orders")?;
        let rows = stmt.query_map([], |row| {
            Ok(Order {
                id: row.get(0)?,
                patient_id: row.get(1)?,
                medicine: row.get(2)?,
                status: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;
        let mut orders = Vec::new();
        for row in rows {
            orders.push(row?);
        }
        Ok(orders)
    }
}
