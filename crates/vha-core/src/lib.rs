//! VHA Core Library
//!
//! Offline-first sync core for the village health assistant: the local SQLite
//! store is the on-device system of record, every user action is appended to
//! a durable FIFO queue, and the queue is drained against the remote store
//! when connectivity returns.
//!
//! # Architecture
//!
//! ```text
//! User action ──► Local Store write ──► Triage (consults only)
//!                                             │
//!                                   Sync Queue append (FIFO)
//!                                             │
//!                              online? ──► try_sync drain
//!                                             │
//!                      ┌──────────────────────┼──────────────────────┐
//!                      │ all delivered        │ first failure        │ offline
//!                      ▼                      ▼                      ▼
//!                 queue cleared      queue kept intact      queue kept intact
//!                                    (retried whole)        (retried on online
//!                                                            edge)
//! ```
//!
//! # Core Principle
//!
//! **No entity reaches the remote store without first being durable locally
//! and queued.** The queue is the only path to remote persistence, and it is
//! cleared only by a fully successful drain.
//!
//! # Modules
//!
//! - [`db`]: SQLite local store (profiles, appointments, orders, sync queue)
//! - [`models`]: Domain types (Profile, Appointment, Order, AmbulanceRequest)
//! - [`triage`]: Deterministic rule-based symptom classifier
//! - [`sync`]: Queue drain engine and the remote submission trait
//! - [`connectivity`]: Edge-triggered online/offline monitor
//! - [`location`]: Geolocation seam with bounded timeout

pub mod connectivity;
pub mod db;
pub mod location;
pub mod models;
pub mod sync;
pub mod triage;

// Re-export commonly used types
pub use connectivity::{Connectivity, ConnectivityEdge, ConnectivityMonitor};
pub use db::Database;
pub use location::{Coordinates, LocationProvider, NoProvider, GEOLOCATION_TIMEOUT};
pub use models::{AmbulanceRequest, Appointment, OpType, Order, Profile, QueueOperation};
pub use sync::{DispatchNotice, Remote, RemoteError, SubmitAck, SyncOutcome};
pub use triage::{classify, parse_symptoms, Triage, TriageLevel};

use tracing::warn;

// =========================================================================
// Top-Level Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum VhaError {
    #[error("database error: {0}")]
    Database(#[from] db::DbError),

    #[error("sync error: {0}")]
    Sync(#[from] sync::SyncError),

    #[error("unknown patient: {0}")]
    UnknownPatient(String),
}

// =========================================================================
// Main API Object
// =========================================================================

/// App facade composing the store, queue, monitor, remote, and locator.
///
/// Each user action runs its full sequence (store write, queue append,
/// opportunistic sync attempt) before the next is dispatched. Embeddings on
/// multi-threaded hosts wrap this in a mutex (one exclusive writer), which
/// preserves the same ordering guarantees.
pub struct VhaCore {
    db: Database,
    monitor: ConnectivityMonitor,
    remote: Box<dyn Remote>,
    locator: Box<dyn LocationProvider>,
}

impl VhaCore {
    /// Open or create the local store at `path`.
    pub fn open<P: AsRef<std::path::Path>>(
        path: P,
        online: bool,
        remote: Box<dyn Remote>,
        locator: Box<dyn LocationProvider>,
    ) -> Result<Self, VhaError> {
        Ok(Self {
            db: Database::open(path)?,
            monitor: ConnectivityMonitor::new(online),
            remote,
            locator,
        })
    }

    /// In-memory variant (for testing).
    pub fn open_in_memory(
        online: bool,
        remote: Box<dyn Remote>,
        locator: Box<dyn LocationProvider>,
    ) -> Result<Self, VhaError> {
        Ok(Self {
            db: Database::open_in_memory()?,
            monitor: ConnectivityMonitor::new(online),
            remote,
            locator,
        })
    }

    /// The underlying local store.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Whether the monitor currently reports online.
    pub fn is_online(&self) -> bool {
        self.monitor.is_online()
    }

    // =====================================================================
    // User Actions
    // =====================================================================

    /// Register a new patient.
    pub fn register_patient(
        &mut self,
        name: String,
        phone: String,
        village: String,
    ) -> Result<Profile, VhaError> {
        let profile = Profile::new(name, phone, village);
        self.db.upsert_profile(&profile)?;
        self.db
            .enqueue(&QueueOperation::CreateProfile(profile.clone()))?;
        self.sync_if_online();
        Ok(profile)
    }

    /// Submit a consult for a patient. Symptoms are triaged exactly once;
    /// an EMERGENCY verdict auto-triggers an ambulance request referencing
    /// the new appointment.
    pub fn submit_consult(
        &mut self,
        patient_id: &str,
        symptoms_text: &str,
    ) -> Result<Appointment, VhaError> {
        let profile = self.require_profile(patient_id)?;
        let symptoms = parse_symptoms(symptoms_text);
        let appointment = Appointment::new(profile.id.clone(), symptoms);

        self.db.upsert_appointment(&appointment)?;
        self.db
            .enqueue(&QueueOperation::CreateAppointment(appointment.clone()))?;

        if appointment.triage.level.is_emergency() {
            self.request_ambulance(&profile.id, Some(&appointment.id))?;
        }
        self.sync_if_online();
        Ok(appointment)
    }

    /// Place a medicine order for a patient.
    pub fn place_order(&mut self, patient_id: &str, medicine: String) -> Result<Order, VhaError> {
        let profile = self.require_profile(patient_id)?;
        let order = Order::new(profile.id, medicine);

        self.db.upsert_order(&order)?;
        self.db.enqueue(&QueueOperation::PlaceOrder(order.clone()))?;
        self.sync_if_online();
        Ok(order)
    }

    /// Request an ambulance for a patient. Geolocation is attempted with a
    /// bounded timeout; on failure the request is queued without coordinates
    /// rather than blocking.
    pub fn request_ambulance(
        &mut self,
        profile_id: &str,
        appointment_id: Option<&str>,
    ) -> Result<AmbulanceRequest, VhaError> {
        let profile = self.require_profile(profile_id)?;
        let mut request =
            AmbulanceRequest::new(profile.id, appointment_id.map(|id| id.to_string()));

        match self.locator.current_position(GEOLOCATION_TIMEOUT) {
            Ok(position) => {
                request.lat = Some(position.lat);
                request.lng = Some(position.lng);
            }
            Err(err) => {
                warn!(error = %err, "geolocation unavailable, queuing ambulance request without coordinates");
            }
        }

        self.db
            .enqueue(&QueueOperation::AmbulanceRequest(request.clone()))?;
        self.sync_if_online();
        Ok(request)
    }

    // =====================================================================
    // Sync & Connectivity
    // =====================================================================

    /// Attempt to drain the sync queue now.
    pub fn try_sync(&mut self) -> Result<SyncOutcome, VhaError> {
        Ok(sync::try_sync(
            &self.monitor,
            &self.db,
            self.remote.as_mut(),
        )?)
    }

    /// Feed a connectivity signal from the host. The offline→online edge
    /// triggers exactly one sync run; repeated same-state signals trigger
    /// nothing.
    pub fn set_online(&mut self, online: bool) -> Result<Option<SyncOutcome>, VhaError> {
        match self.monitor.set_online(online) {
            ConnectivityEdge::WentOnline => Ok(Some(self.try_sync()?)),
            _ => Ok(None),
        }
    }

    fn require_profile(&self, profile_id: &str) -> Result<Profile, VhaError> {
        self.db
            .get_profile(profile_id)?
            .ok_or_else(|| VhaError::UnknownPatient(profile_id.to_string()))
    }

    /// Opportunistic sync after a user action. Failures here are reported by
    /// the next explicit `try_sync`, not by the action that saved locally.
    fn sync_if_online(&mut self) {
        if !self.monitor.is_online() {
            return;
        }
        if let Err(err) = self.try_sync() {
            warn!(error = %err, "opportunistic sync attempt failed");
        }
    }
}
