use super::error::WriteError;

/// Nesting depth for one serialization session.
///
/// The depth moves by one in lockstep with element open/close calls and must
/// be back at zero when the session ends. Each session owns its own
/// `IndentLevel`, so independent sessions never interfere.
#[derive(Debug, Default)]
pub struct IndentLevel {
    depth: usize,
}

impl IndentLevel {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the indent prefix for the current depth, one tab per level.
    pub fn current(&self) -> String {
        "\t".repeat(self.depth)
    }

    pub fn increment(&mut self) {
        self.depth += 1;
    }

    /// Steps back out of a nesting level.
    ///
    /// A decrement at depth zero means a close was issued without a matching
    /// open. That is a contract violation and fails fast rather than
    /// clamping to zero.
    pub fn decrement(&mut self) -> Result<(), WriteError> {
        if self.depth == 0 {
            return Err(WriteError::IndentUnderflow);
        }
        self.depth -= 1;
        Ok(())
    }
}
