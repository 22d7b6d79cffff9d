use serde_json::Value;

/// Result of one completed send attempt. `Success` carries the service's body
/// verbatim, service-side error objects included. `Failure` is reserved for
/// exchanges that never produced a parseable body.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseOutcome {
    Success(Value),
    Failure(String),
}

/// Observable lifecycle of a request session. `Pending` is always entered
/// before the exchange starts, so observers never see a stale outcome while a
/// new call is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Pending,
    Succeeded(Value),
    Failed(String),
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        return *self == SessionState::Pending;
    }

    pub fn is_resolved(&self) -> bool {
        return matches!(self, SessionState::Succeeded(_) | SessionState::Failed(_));
    }
}
