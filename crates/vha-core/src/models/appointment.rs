//! Appointment model.

use serde::{Deserialize, Serialize};

use crate::triage::{classify, Triage};

/// A consult appointment with its triage verdict.
///
/// The triage is computed exactly once, from the symptom snapshot taken at
/// creation, and never recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Client-generated UUID
    pub id: String,
    /// Referenced patient profile id (foreign reference, not ownership)
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// Symptom list as entered, order preserved
    pub symptoms: Vec<String>,
    /// Triage verdict computed at creation
    pub triage: Triage,
    /// Appointment status
    pub status: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl Appointment {
    /// Create a new appointment, triaging the given symptoms once.
    pub fn new(patient_id: String, symptoms: Vec<String>) -> Self {
        let triage = classify(&symptoms);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            symptoms,
            triage,
            status: "pending".into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
