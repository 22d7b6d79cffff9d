#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::CoreError;
use super::Message;

pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 2.0);
pub const MAX_TOKENS_RANGE: (u32, u32) = (1, 2000);

/// Optional generation knobs. When a call site does not opt in, nothing is
/// sent, the service falls back to its own defaults.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    temperature: f64,
    max_tokens: u32,
}

impl GenerationParameters {
    pub fn new(temperature: f64, max_tokens: u32) -> Result<GenerationParameters, CoreError> {
        if !(TEMPERATURE_RANGE.0..=TEMPERATURE_RANGE.1).contains(&temperature) {
            return Err(CoreError::Validation(format!(
                "temperature {temperature} is outside of [{}, {}]",
                TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1
            )));
        }
        if !(MAX_TOKENS_RANGE.0..=MAX_TOKENS_RANGE.1).contains(&max_tokens) {
            return Err(CoreError::Validation(format!(
                "max_tokens {max_tokens} is outside of [{}, {}]",
                MAX_TOKENS_RANGE.0, MAX_TOKENS_RANGE.1
            )));
        }

        return Ok(GenerationParameters {
            temperature,
            max_tokens,
        });
    }

    pub fn temperature(&self) -> f64 {
        return self.temperature;
    }

    pub fn max_tokens(&self) -> u32 {
        return self.max_tokens;
    }
}

/// The full request body for one chat completion exchange. `temperature` and
/// `max_tokens` are left off the wire entirely when not supplied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}
