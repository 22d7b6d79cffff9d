use thiserror::Error;

/// Errors raised by the core before or during a request lifecycle.
///
/// `Validation` and `Index` are local precondition failures and never involve
/// the network. `Transport` means the exchange itself could not be completed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("index {index} is out of bounds for length {len}")]
    Index { index: usize, len: usize },

    #[error("transport failed: {0}")]
    Transport(String),
}
