//! Connectivity monitor.
//!
//! A two-state machine driven by the host environment's connectivity signal.
//! Transitions are edge-triggered: repeated reports of the same state produce
//! no edge, so two consecutive online signals cannot start two sync runs.

use tracing::info;

/// Connectivity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

/// Edge produced by a connectivity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEdge {
    /// No state change
    None,
    /// Offline -> Online; the caller should trigger exactly one sync run
    WentOnline,
    /// Online -> Offline
    WentOffline,
}

/// Tracks the last reported connectivity state.
#[derive(Debug)]
pub struct ConnectivityMonitor {
    state: Connectivity,
}

impl ConnectivityMonitor {
    /// Create a monitor with the given initial state.
    pub fn new(online: bool) -> Self {
        Self {
            state: if online {
                Connectivity::Online
            } else {
                Connectivity::Offline
            },
        }
    }

    /// Current state.
    pub fn state(&self) -> Connectivity {
        self.state
    }

    /// Whether the last reported state is online.
    pub fn is_online(&self) -> bool {
        self.state == Connectivity::Online
    }

    /// Feed a connectivity signal, returning the edge it produced.
    pub fn set_online(&mut self, online: bool) -> ConnectivityEdge {
        let next = if online {
            Connectivity::Online
        } else {
            Connectivity::Offline
        };
        if next == self.state {
            return ConnectivityEdge::None;
        }
        self.state = next;
        match next {
            Connectivity::Online => {
                info!("connectivity restored");
                ConnectivityEdge::WentOnline
            }
            Connectivity::Offline => {
                info!("connectivity lost, actions will be queued locally");
                ConnectivityEdge::WentOffline
            }
        }
    }
}
