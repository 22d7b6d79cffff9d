mod error;
mod message;
mod outcome;
mod payload;
mod scenario;

pub use error::*;
pub use message::*;
pub use outcome::*;
pub use payload::*;
pub use scenario::*;
