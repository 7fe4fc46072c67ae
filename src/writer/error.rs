//! Serialization error types.

use thiserror::Error;

/// Errors that can occur while writing a site catalog to XML.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output sink rejected a write. The output position is undefined
    /// afterwards, so callers must discard the partial result.
    #[error("failed to write to output sink: {0}")]
    Sink(#[from] std::io::Error),

    /// Element open/close calls fell out of balance: a close was issued at
    /// depth zero, a depart had no matching visit, or a session finished
    /// with elements still open.
    #[error("indent underflow: unbalanced element open/close nesting")]
    IndentUnderflow,
}
