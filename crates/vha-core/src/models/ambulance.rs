//! Ambulance request model.

use serde::{Deserialize, Serialize};

/// An ambulance request with best-known coordinates.
///
/// Coordinates are optional: when geolocation is unavailable or times out the
/// request is queued without them rather than blocking the emergency flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmbulanceRequest {
    /// Client-generated UUID
    pub id: String,
    /// Referenced patient profile id
    #[serde(rename = "profileId")]
    pub profile_id: String,
    /// Latitude, absent when geolocation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude, absent when geolocation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// Originating appointment, if the request came from an emergency consult
    #[serde(rename = "appointmentId", skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<String>,
    /// Request timestamp (RFC 3339)
    pub requested_at: String,
}

impl AmbulanceRequest {
    /// Create a coordinate-less request; the caller fills in coordinates when
    /// geolocation succeeds.
    pub fn new(profile_id: String, appointment_id: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            profile_id,
            lat: None,
            lng: None,
            appointment_id,
            requested_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Whether the request carries coordinates.
    pub fn has_location(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }
}
