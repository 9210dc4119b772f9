use alloc::string::String;
use core::fmt;

/// Errors produced by fallible serializer implementations.
///
/// The shared [`MessageSerializer`] contract is infallible; this type only
/// standardizes how the crate's own fallible backends report rejection.
///
/// [`MessageSerializer`]: crate::MessageSerializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
  /// Backing format could not render the payload.
  SerializationFailed(String),
  /// Value lies outside the domain the serializer supports.
  UnsupportedValue(String),
}

impl fmt::Display for SerializationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::SerializationFailed(reason) => write!(f, "serialization failed: {reason}"),
      | Self::UnsupportedValue(reason) => write!(f, "unsupported value: {reason}"),
    }
  }
}
