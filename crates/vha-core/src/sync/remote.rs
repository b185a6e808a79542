//! Remote submission interface.
//!
//! The remote store is a collaborator: one endpoint per operation type, each
//! upserting by the record's client-generated id so re-delivery after a
//! partial drain is harmless.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AmbulanceRequest, Appointment, Order, Profile};

/// Remote submission errors.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The server received the operation and rejected it
    #[error("remote rejected operation: {0}")]
    Rejected(String),

    /// The operation never reached the server
    #[error("transport failure: {0}")]
    Transport(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Server acknowledgment: `{ok: true, id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAck {
    pub ok: bool,
    /// Id of the upserted record; absent on endpoints that ack with a message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Best-effort dispatcher notification content.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchNotice {
    /// Emergency-level triage on a submitted appointment
    Emergency { patient_id: String },
    /// Ambulance requested, with best-known coordinates
    Ambulance {
        profile_id: String,
        lat: Option<f64>,
        lng: Option<f64>,
    },
}

impl DispatchNotice {
    /// Human-readable message for the dispatcher channel.
    pub fn message(&self) -> String {
        match self {
            DispatchNotice::Emergency { patient_id } => {
                format!("EMERGENCY for patient {}", patient_id)
            }
            DispatchNotice::Ambulance {
                profile_id,
                lat,
                lng,
            } => {
                let fmt = |c: &Option<f64>| {
                    c.map(|v| v.to_string()).unwrap_or_else(|| "unknown".into())
                };
                format!(
                    "Ambulance requested: {} at {}, {}",
                    profile_id,
                    fmt(lat),
                    fmt(lng)
                )
            }
        }
    }
}

/// Remote submission interface, one method per operation type.
///
/// All submissions must be idempotent upserts keyed by the payload id.
/// `notify_dispatch` is best-effort: the sync engine logs and ignores its
/// failures.
pub trait Remote {
    fn submit_profile(&mut self, profile: &Profile) -> RemoteResult<SubmitAck>;
    fn submit_appointment(&mut self, appointment: &Appointment) -> RemoteResult<SubmitAck>;
    fn submit_order(&mut self, order: &Order) -> RemoteResult<SubmitAck>;
    fn submit_ambulance_request(&mut self, request: &AmbulanceRequest) -> RemoteResult<SubmitAck>;
    fn notify_dispatch(&mut self, notice: &DispatchNotice) -> RemoteResult<()>;
}
