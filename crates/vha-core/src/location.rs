//! Geolocation seam for ambulance requests.
//!
//! Acquisition is bounded by a timeout; any failure degrades to a
//! coordinate-less request instead of blocking the emergency flow.

use std::time::Duration;
use thiserror::Error;

/// Bound on geolocation acquisition.
pub const GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// A GPS fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Geolocation errors. All of them are recoverable: the caller falls back to
/// a location-less ambulance request.
#[derive(Error, Debug)]
pub enum LocationError {
    #[error("no geolocation provider available")]
    Unavailable,

    #[error("geolocation timed out after {0:?}")]
    Timeout(Duration),

    #[error("geolocation failed: {0}")]
    Failed(String),
}

/// Source of the device's current position.
pub trait LocationProvider {
    /// Acquire the current position, giving up after `timeout`.
    fn current_position(&self, timeout: Duration) -> Result<Coordinates, LocationError>;
}

/// Provider for hosts without GPS hardware.
pub struct NoProvider;

impl LocationProvider for NoProvider {
    fn current_position(&self, _timeout: Duration) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unavailable)
    }
}
