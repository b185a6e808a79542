//! Queued sync operations.

use serde::{Deserialize, Serialize};

use super::{AmbulanceRequest, Appointment, Order, Profile};

/// A pending remote-sync operation, tagged by kind.
///
/// The wire shape matches the remote endpoints: `{"type": "createProfile",
/// "payload": {...}}`. FIFO order of queued operations is significant and the
/// queue never deduplicates; idempotent remote upserts make replays safe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum QueueOperation {
    CreateProfile(Profile),
    CreateAppointment(Appointment),
    PlaceOrder(Order),
    AmbulanceRequest(AmbulanceRequest),
}

impl QueueOperation {
    /// The operation kind, used for routing and failure reporting.
    pub fn op_type(&self) -> OpType {
        match self {
            QueueOperation::CreateProfile(_) => OpType::CreateProfile,
            QueueOperation::CreateAppointment(_) => OpType::CreateAppointment,
            QueueOperation::PlaceOrder(_) => OpType::PlaceOrder,
            QueueOperation::AmbulanceRequest(_) => OpType::AmbulanceRequest,
        }
    }

    /// Id of the wrapped entity.
    pub fn payload_id(&self) -> &str {
        match self {
            QueueOperation::CreateProfile(p) => &p.id,
            QueueOperation::CreateAppointment(a) => &a.id,
            QueueOperation::PlaceOrder(o) => &o.id,
            QueueOperation::AmbulanceRequest(r) => &r.id,
        }
    }
}

/// Operation kind names, matching the queue's wire tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum OpType {
    CreateProfile,
    CreateAppointment,
    PlaceOrder,
    AmbulanceRequest,
}

impl std::fmt::Display for OpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OpType::CreateProfile => "createProfile",
            OpType::CreateAppointment => "createAppointment",
            OpType::PlaceOrder => "placeOrder",
            OpType::AmbulanceRequest => "ambulanceRequest",
        };
        f.write_str(name)
    }
}

/// A queue row: the operation plus its queue-local sequence id.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    /// Auto-assigned sequence id, strictly increasing in enqueue order
    pub seq: i64,
    /// The queued operation
    pub op: QueueOperation,
}
