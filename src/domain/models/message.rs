#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::CoreError;

/// Speaker classification of a message. The enumeration is closed, the remote
/// service accepts nothing else.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn parse(value: &str) -> Result<Role, CoreError> {
        let role = match value {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => {
                return Err(CoreError::Validation(format!(
                    "unknown role '{value}', expected one of: system, user, assistant"
                )));
            }
        };

        return Ok(role);
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };

        return write!(f, "{name}");
    }
}

/// One unit of conversation, exactly the shape the wire contract expects.
/// Messages are values, mutation always goes through creating a fresh one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Message {
        return Message {
            role,
            content: content.to_string(),
        };
    }

    pub fn system(content: &str) -> Message {
        return Message::new(Role::System, content);
    }

    pub fn user(content: &str) -> Message {
        return Message::new(Role::User, content);
    }

    pub fn assistant(content: &str) -> Message {
        return Message::new(Role::Assistant, content);
    }
}
