#[cfg(test)]
#[path = "context_builder_test.rs"]
mod tests;

use crate::domain::models::CoreError;
use crate::domain::models::Message;
use crate::domain::models::Role;

/// Mutable ordered sequence of messages backing the free-form context editor.
///
/// Order is chronology and is preserved exactly as composed. Duplicates are
/// legal, two identical system messages is a deliberate scenario, not a bug.
/// There is no size cap.
#[derive(Default)]
pub struct ContextBuilder {
    messages: Vec<Message>,
}

impl ContextBuilder {
    /// Appends a message and returns the new sequence length. Content that is
    /// empty after trimming is rejected before anything is stored.
    pub fn append(&mut self, role: Role, content: &str) -> Result<usize, CoreError> {
        if content.trim().is_empty() {
            return Err(CoreError::Validation(
                "message content cannot be empty".to_string(),
            ));
        }

        self.messages.push(Message::new(role, content));
        return Ok(self.messages.len());
    }

    /// Same as [`ContextBuilder::append`] but takes the role as text, the way
    /// it arrives from an input field.
    pub fn append_raw(&mut self, role: &str, content: &str) -> Result<usize, CoreError> {
        let parsed = Role::parse(role)?;
        return self.append(parsed, content);
    }

    /// Removes and returns the message at `index`, shifting later messages
    /// left. Relative order of the survivors is untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<Message, CoreError> {
        if index >= self.messages.len() {
            return Err(CoreError::Index {
                index,
                len: self.messages.len(),
            });
        }

        return Ok(self.messages.remove(index));
    }

    /// Owned copy of the current sequence. Mutating the builder afterwards
    /// never touches a snapshot already taken.
    pub fn snapshot(&self) -> Vec<Message> {
        return self.messages.clone();
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }
}
