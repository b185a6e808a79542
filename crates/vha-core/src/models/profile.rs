//! Patient profile model.

use serde::{Deserialize, Serialize};

/// A patient profile, immutable after creation.
///
/// The id is generated on-device so retries against the remote store are
/// naturally idempotent: resubmitting the same profile upserts the same row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Client-generated UUID, never assigned by the server
    pub id: String,
    /// Patient name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Home village
    pub village: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl Profile {
    /// Create a new profile with a fresh id and timestamp.
    pub fn new(name: String, phone: String, village: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            phone,
            village,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
