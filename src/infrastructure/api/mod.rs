mod chat;
mod credentials;

pub use chat::*;
pub use credentials::*;
