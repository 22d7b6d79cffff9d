#[cfg(test)]
#[path = "comparator_test.rs"]
mod tests;

use crate::domain::models::CoreError;
use crate::domain::models::SessionState;
use crate::domain::services::RequestSession;

/// Drives two independent sessions against two different context prefixes for
/// one shared user input, so both exchanges carry a byte-identical trailing
/// user message and differ only in what precedes it.
///
/// The sessions share no mutable state. One failing never cancels or touches
/// the other.
pub struct Comparator {
    left: RequestSession,
    right: RequestSession,
}

impl Comparator {
    pub fn new(left: RequestSession, right: RequestSession) -> Comparator {
        return Comparator { left, right };
    }

    /// Starts both sessions concurrently. Empty input is rejected before
    /// either session is touched, both stay in their current state.
    pub async fn compare(&self, user_input: &str) -> Result<(), CoreError> {
        if user_input.trim().is_empty() {
            return Err(CoreError::Validation(
                "user input cannot be empty".to_string(),
            ));
        }

        let (left_res, right_res) =
            tokio::join!(self.left.start(user_input), self.right.start(user_input));
        left_res?;
        right_res?;

        return Ok(());
    }

    pub fn left(&self) -> &RequestSession {
        return &self.left;
    }

    pub fn right(&self) -> &RequestSession {
        return &self.right;
    }

    pub fn outcomes(&self) -> (SessionState, SessionState) {
        return (self.left.state(), self.right.state());
    }
}
