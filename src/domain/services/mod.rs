mod assembler;
mod comparator;
mod context_builder;
mod scenarios;
mod session;

pub use assembler::*;
pub use comparator::*;
pub use context_builder::*;
pub use scenarios::*;
pub use session::*;
