//! Medicine order model.

use serde::{Deserialize, Serialize};

/// A medicine order, immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Client-generated UUID
    pub id: String,
    /// Referenced patient profile id
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// Ordered medicine description
    pub medicine: String,
    /// Order status
    pub status: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl Order {
    /// Create a new order for a patient.
    pub fn new(patient_id: String, medicine: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            medicine,
            status: "ordered".into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
