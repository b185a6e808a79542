//! Sync engine: drains the operation queue against the remote store.
//!
//! The drain is all-or-nothing per invocation. Operations are submitted
//! strictly in FIFO order; the first failure aborts the run and leaves the
//! entire queue untouched, including entries that already succeeded in this
//! run. The queue is cleared only after every operation succeeds, so a retry
//! re-submits earlier operations, which is safe because the remote upserts
//! by id.
//! An explicit acknowledgment cursor would avoid the re-submission at the
//! cost of partial-queue bookkeeping; this engine deliberately keeps the
//! simpler contract.

mod remote;

pub use remote::*;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::connectivity::ConnectivityMonitor;
use crate::db::{Database, DbError};
use crate::models::{OpType, QueueOperation};

/// Sync engine errors. Remote rejections are not errors at this level; they
/// surface as [`SyncOutcome::Failed`] with the queue retained for retry.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("database error: {0}")]
    Database(#[from] DbError),
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Outcome of one `try_sync` invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// Still offline; nothing was attempted
    Offline,
    /// Queue was empty
    NothingToSync,
    /// Every queued operation was delivered and the queue was cleared
    Complete { synced: usize },
    /// A submission failed; the queue is intact and no later entry was tried
    Failed { op_type: OpType, reason: String },
}

/// Drain the operation queue against the remote store.
///
/// Offline and empty-queue cases short-circuit without touching the network.
pub fn try_sync(
    monitor: &ConnectivityMonitor,
    db: &Database,
    remote: &mut dyn Remote,
) -> SyncResult<SyncOutcome> {
    if !monitor.is_online() {
        debug!("still offline, skipping sync");
        return Ok(SyncOutcome::Offline);
    }

    let queue = db.peek_queue()?;
    if queue.is_empty() {
        debug!("nothing to sync");
        return Ok(SyncOutcome::NothingToSync);
    }

    info!(pending = queue.len(), "draining sync queue");
    for entry in &queue {
        if let Err(err) = submit_one(remote, &entry.op) {
            let op_type = entry.op.op_type();
            warn!(seq = entry.seq, %op_type, error = %err, "sync failed, queue retained");
            return Ok(SyncOutcome::Failed {
                op_type,
                reason: err.to_string(),
            });
        }
        debug!(seq = entry.seq, op_type = %entry.op.op_type(), "operation delivered");
    }

    db.clear_queue()?;
    info!(synced = queue.len(), "sync complete");
    Ok(SyncOutcome::Complete {
        synced: queue.len(),
    })
}

/// Submit a single operation, routed by its kind.
///
/// Emergency appointments and ambulance requests additionally fire a
/// best-effort dispatch notification after the record itself is accepted;
/// a notification failure never fails the submission.
fn submit_one(remote: &mut dyn Remote, op: &QueueOperation) -> RemoteResult<()> {
    match op {
        QueueOperation::CreateProfile(profile) => {
            remote.submit_profile(profile)?;
        }
        QueueOperation::CreateAppointment(appointment) => {
            remote.submit_appointment(appointment)?;
            if appointment.triage.level.is_emergency() {
                let notice = DispatchNotice::Emergency {
                    patient_id: appointment.patient_id.clone(),
                };
                notify_best_effort(remote, &notice);
            }
        }
        QueueOperation::PlaceOrder(order) => {
            remote.submit_order(order)?;
        }
        QueueOperation::AmbulanceRequest(request) => {
            remote.submit_ambulance_request(request)?;
            let notice = DispatchNotice::Ambulance {
                profile_id: request.profile_id.clone(),
                lat: request.lat,
                lng: request.lng,
            };
            notify_best_effort(remote, &notice);
        }
    }
    Ok(())
}

fn notify_best_effort(remote: &mut dyn Remote, notice: &DispatchNotice) {
    if let Err(err) = remote.notify_dispatch(notice) {
        warn!(error = %err, "dispatch notification failed, continuing");
    }
}
