//! VHA Remote Client
//!
//! Blocking HTTP implementation of the core's [`Remote`] trait against the
//! collaborator's REST endpoints: one `POST` per operation type, each an
//! idempotent upsert keyed by the record id, plus the `GET /health` liveness
//! probe used for connectivity checks.
//!
//! Dispatcher notification (SMS to the ambulance dispatcher) is performed
//! server-side inside the `/appointments` and `/ambulance` handlers, so
//! `notify_dispatch` is a no-op here; the trait method exists so embedded
//! remotes (tests, direct integrations) can carry the side channel
//! themselves.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use vha_core::models::{AmbulanceRequest, Appointment, Order, Profile};
use vha_core::sync::{DispatchNotice, Remote, RemoteError, RemoteResult, SubmitAck};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error payload returned by the remote endpoints on rejection.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Liveness probe response.
#[derive(Debug, Deserialize)]
struct HealthBody {
    ok: bool,
}

/// HTTP client for the sync endpoints.
pub struct HttpRemote {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpRemote {
    /// Create a client for the given API base, e.g.
    /// `http://localhost:4000/api`.
    pub fn new(base_url: impl Into<String>) -> RemoteResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Full URL for a route.
    fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    fn post<T: serde::Serialize>(&self, route: &str, body: &T) -> RemoteResult<SubmitAck> {
        let url = self.url(route);
        debug!(%url, "submitting operation");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        if response.status().is_success() {
            response
                .json::<SubmitAck>()
                .map_err(|e| RemoteError::Transport(e.to_string()))
        } else {
            let status = response.status();
            let reason = response
                .json::<ErrorBody>()
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            Err(RemoteError::Rejected(reason))
        }
    }

    /// Probe `GET /health`; true when the server answers `{ok: true}`.
    pub fn probe(&self) -> bool {
        self.client
            .get(self.url("/health"))
            .send()
            .ok()
            .filter(|r| r.status().is_success())
            .and_then(|r| r.json::<HealthBody>().ok())
            .map(|b| b.ok)
            .unwrap_or(false)
    }
}

impl Remote for HttpRemote {
    fn submit_profile(&mut self, profile: &Profile) -> RemoteResult<SubmitAck> {
        self.post("/profiles", profile)
    }

    fn submit_appointment(&mut self, appointment: &Appointment) -> RemoteResult<SubmitAck> {
        self.post("/appointments", appointment)
    }

    fn submit_order(&mut self, order: &Order) -> RemoteResult<SubmitAck> {
        self.post("/orders", order)
    }

    fn submit_ambulance_request(&mut self, request: &AmbulanceRequest) -> RemoteResult<SubmitAck> {
        self.post("/ambulance", request)
    }

    fn notify_dispatch(&mut self, _notice: &DispatchNotice) -> RemoteResult<()> {
        // Server-side concern on these endpoints.
        Ok(())
    }
}
