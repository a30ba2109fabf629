//! Connection state management.
//!
//! This module provides [`BackendStatus`] and [`ConnectionState`], the
//! domain objects tracking reachability of the mini-rag-system backend as
//! observed by the one-shot startup probe.

/// Reachability of the backend as seen by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// Probe dispatched, no response yet. The initial state.
    #[default]
    Checking,
    /// Probe got a success response with a JSON body.
    Connected,
    /// Probe failed: transport error, non-success status, or a body that
    /// did not parse as JSON.
    Disconnected,
}

impl BackendStatus {
    /// The catalog key for this status' display text.
    pub fn translation_key(self) -> &'static str {
        match self {
            BackendStatus::Checking => "status.checking",
            BackendStatus::Connected => "status.connected",
            BackendStatus::Disconnected => "status.disconnected",
        }
    }

    /// Whether the probe has produced a final answer.
    pub fn is_resolved(self) -> bool {
        !matches!(self, BackendStatus::Checking)
    }
}

/// Connection state for the UI status indicator.
///
/// Starts in `Checking` and resolves exactly once per process lifetime;
/// there is no transition back to `Checking` short of a restart.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionState {
    status: BackendStatus,
}

impl ConnectionState {
    /// Create a new connection state in `Checking`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current backend status.
    pub fn status(&self) -> BackendStatus {
        self.status
    }

    /// Whether the backend answered the probe successfully.
    pub fn is_connected(&self) -> bool {
        matches!(self.status, BackendStatus::Connected)
    }

    /// Whether the probe is still outstanding.
    pub fn is_checking(&self) -> bool {
        matches!(self.status, BackendStatus::Checking)
    }

    /// Record the probe outcome.
    ///
    /// A `Checking` argument is ignored: once dispatched, the probe can
    /// only resolve to `Connected` or `Disconnected`.
    pub fn resolve(&mut self, status: BackendStatus) {
        if status.is_resolved() {
            self.status = status;
        }
    }

    /// The catalog key for the current status' display text.
    pub fn status_key(&self) -> &'static str {
        self.status.translation_key()
    }
}
