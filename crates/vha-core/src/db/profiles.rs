//! Profile database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::Profile;

impl Database {
    /// Upsert a profile keyed by its id.
    pub fn upsert_profile(&self, profile: &Profile) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO profiles (id, name, phone, village, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                phone = excluded.phone,
                village = excluded.village
            "#,
            params![
                profile.id,
                profile.name,
                profile.phone,
                profile.village,
                profile.created_at,
            ],
        )?;
        Ok(())
    }

    /// Get a profile by id.
    pub fn get_profile(&self, id: &str) -> DbResult<Option<Profile>> {
        self.conn
            .query_row(
                "SELECT id, name, phone, village, created_at FROM profiles WHERE id = ?",
                [id],
                |row| {
                    Ok(Profile {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        phone: row.get(2)?,
                        village: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all profiles.
    pub fn list_profiles(&self) -> DbResult<Vec<Profile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, phone, village, created_at FROM profiles")?;
        let rows = stmt.query_map([], |row| {
            Ok(Profile {
                id: row.get(0)?,
                name: row.get(1)?,
                phone: row.get(2)?,
                village: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;
        let mut profiles = Vec::new();
        for row in rows {
            profiles.push(row?);
        }
        Ok(profiles)
    }
}
