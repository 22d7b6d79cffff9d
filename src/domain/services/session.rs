#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

use crate::domain::models::CompletionRequest;
use crate::domain::models::CoreError;
use crate::domain::models::GenerationParameters;
use crate::domain::models::Message;
use crate::domain::models::ResponseOutcome;
use crate::domain::models::SessionState;
use crate::domain::services::RequestAssembler;
use crate::infrastructure::api::ChatClient;
use crate::infrastructure::api::CredentialStoreBox;

/// One reusable request lifecycle around a fixed context prefix.
///
/// State transitions are synchronous on both sides of the single await point:
/// `Pending` is recorded before the exchange starts, the outcome right after
/// it resolves. Overlapping starts are legal, each start takes a fresh id and
/// an outcome is only recorded while its id is still the latest, so an older
/// call resolving late can never overwrite a newer one.
pub struct RequestSession {
    client: ChatClient,
    credentials: CredentialStoreBox,
    context: Vec<Message>,
    model: String,
    params: Option<GenerationParameters>,
    state: Mutex<SessionState>,
    generation: AtomicU64,
}

impl RequestSession {
    pub fn new(
        client: ChatClient,
        credentials: CredentialStoreBox,
        context: Vec<Message>,
        model: &str,
        params: Option<GenerationParameters>,
    ) -> RequestSession {
        return RequestSession {
            client,
            credentials,
            context,
            model: model.to_string(),
            params,
            state: Mutex::new(SessionState::Idle),
            generation: AtomicU64::new(0),
        };
    }

    pub fn state(&self) -> SessionState {
        return self.state.lock().unwrap().clone();
    }

    /// The exact payload a subsequent [`RequestSession::start`] with the same
    /// input would send.
    pub fn preview(&self, user_input: &str) -> CompletionRequest {
        return RequestAssembler::assemble(&self.context, user_input, &self.model, self.params);
    }

    /// Fires one exchange. Empty input is rejected locally, the session lands
    /// in `Failed` without ever entering `Pending` and no request goes out.
    pub async fn start(&self, user_input: &str) -> Result<(), CoreError> {
        if user_input.trim().is_empty() {
            let err = CoreError::Validation("user input cannot be empty".to_string());
            *self.state.lock().unwrap() = SessionState::Failed(err.to_string());
            return Err(err);
        }

        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.lock().unwrap() = SessionState::Pending;

        let payload = self.preview(user_input);
        tracing::debug!(model = self.model, request_id = id, "sending completion request");

        let outcome = self.client.send(&payload, &self.credentials.get()).await;

        if self.generation.load(Ordering::SeqCst) != id {
            tracing::debug!(request_id = id, "discarding outcome of superseded request");
            return Ok(());
        }

        let mut state = self.state.lock().unwrap();
        match outcome {
            ResponseOutcome::Success(body) => {
                *state = SessionState::Succeeded(body);
            }
            ResponseOutcome::Failure(message) => {
                tracing::warn!(request_id = id, error = message, "completion request failed");
                *state = SessionState::Failed(message);
            }
        }

        return Ok(());
    }
}
