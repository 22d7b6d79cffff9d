#[cfg(test)]
#[path = "assembler_test.rs"]
mod tests;

use crate::domain::models::CompletionRequest;
use crate::domain::models::GenerationParameters;
use crate::domain::models::Message;
use crate::domain::models::Role;

pub struct RequestAssembler {}

impl RequestAssembler {
    /// Builds the request body: the context prefix in its original order,
    /// then exactly one trailing user message holding `user_input`. The
    /// stored prefix is never mutated.
    ///
    /// This is a total function so previews of partially typed input stay
    /// possible. Refusing to send an empty input is the caller's job, the
    /// session and comparator enforce it at their boundary.
    pub fn assemble(
        context: &[Message],
        user_input: &str,
        model: &str,
        params: Option<GenerationParameters>,
    ) -> CompletionRequest {
        let mut messages = context.to_vec();
        messages.push(Message::new(Role::User, user_input));

        return CompletionRequest {
            model: model.to_string(),
            messages,
            temperature: params.map(|p| return p.temperature()),
            max_tokens: params.map(|p| return p.max_tokens()),
        };
    }
}
