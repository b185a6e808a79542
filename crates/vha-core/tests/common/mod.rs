//! Shared test doubles: an in-memory remote store and stub geolocation.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vha_core::location::{Coordinates, LocationError, LocationProvider};
use vha_core::models::{AmbulanceRequest, Appointment, OpType, Order, Profile};
use vha_core::sync::{DispatchNotice, Remote, RemoteError, RemoteResult, SubmitAck};

/// In-memory remote store with idempotent upsert-by-id semantics, plus
/// recording of every submission and notification in arrival order.
#[derive(Default)]
pub struct RemoteState {
    pub profiles: HashMap<String, Profile>,
    pub appointments: HashMap<String, Appointment>,
    pub orders: HashMap<String, Order>,
    pub ambulance_requests: HashMap<String, AmbulanceRequest>,
    /// Every submission attempt, in order, including rejected ones
    pub submissions: Vec<(OpType, String)>,
    pub notices: Vec<DispatchNotice>,
    /// Payload ids the server rejects
    pub fail_ids: HashSet<String>,
    /// Simulate dispatcher channel outage
    pub fail_notify: bool,
}

pub struct MockRemote {
    state: Arc<Mutex<RemoteState>>,
}

impl MockRemote {
    /// Returns the remote plus a handle for inspecting its state after the
    /// remote has been moved into the engine or facade.
    pub fn new() -> (Self, Arc<Mutex<RemoteState>>) {
        let state = Arc::new(Mutex::new(RemoteState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }

    fn accept(&self, op_type: OpType, id: &str) -> RemoteResult<SubmitAck> {
        let mut state = self.state.lock().unwrap();
        state.submissions.push((op_type, id.to_string()));
        if state.fail_ids.contains(id) {
            return Err(RemoteError::Rejected(format!("rejected {}", id)));
        }
        Ok(SubmitAck {
            ok: true,
            id: Some(id.to_string()),
        })
    }
}

impl Remote for MockRemote {
    fn submit_profile(&mut self, profile: &Profile) -> RemoteResult<SubmitAck> {
        let ack = self.accept(OpType::CreateProfile, &profile.id)?;
        self.state
            .lock()
            .unwrap()
            .profiles
            .insert(profile.id.clone(), profile.clone());
        Ok(ack)
    }

    fn submit_appointment(&mut self, appointment: &Appointment) -> RemoteResult<SubmitAck> {
        let ack = self.accept(OpType::CreateAppointment, &appointment.id)?;
        self.state
            .lock()
            .unwrap()
            .appointments
            .insert(appointment.id.clone(), appointment.clone());
        Ok(ack)
    }

    fn submit_order(&mut self, order: &Order) -> RemoteResult<SubmitAck> {
        let ack = self.accept(OpType::PlaceOrder, &order.id)?;
        self.state
            .lock()
            .unwrap()
            .orders
            .insert(order.id.clone(), order.clone());
        Ok(ack)
    }

    fn submit_ambulance_request(&mut self, request: &AmbulanceRequest) -> RemoteResult<SubmitAck> {
        let ack = self.accept(OpType::AmbulanceRequest, &request.id)?;
        self.state
            .lock()
            .unwrap()
            .ambulance_requests
            .insert(request.id.clone(), request.clone());
        Ok(ack)
    }

    fn notify_dispatch(&mut self, notice: &DispatchNotice) -> RemoteResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_notify {
            return Err(RemoteError::Transport("sms gateway unreachable".into()));
        }
        state.notices.push(notice.clone());
        Ok(())
    }
}

/// Geolocation stub.
pub enum StubLocator {
    Fix(Coordinates),
    TimesOut,
    NoHardware,
}

impl LocationProvider for StubLocator {
    fn current_position(&self, timeout: Duration) -> Result<Coordinates, LocationError> {
        match self {
            StubLocator::Fix(coordinates) => Ok(*coordinates),
            StubLocator::TimesOut => Err(LocationError::Timeout(timeout)),
            StubLocator::NoHardware => Err(LocationError::Unavailable),
        }
    }
}
