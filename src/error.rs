//! Client error types

use thiserror::Error;

/// Errors surfaced by the cache client
///
/// No operation retries; every error path stops the in-flight operation and
/// returns the underlying cause to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// The store could not be reached or the handshake failed
  #[error("connection failed: {0}")]
  Connect(String),

  /// The store rejected or failed a single command
  #[error("command failed: {0}")]
  Command(String),

  /// A reply could not be coerced to the requested shape
  #[error("unexpected reply: {0}")]
  Decode(String),

  /// A SCAN round trip failed while searching for a pattern
  #[error("error retrieving '{pattern}' keys: {reason}")]
  ScanAborted { pattern: String, reason: String },

  /// The scan round limit was exhausted before the store signalled completion
  #[error("scan for '{pattern}' still incomplete after {rounds} rounds")]
  ScanStalled { pattern: String, rounds: u64 },
}
