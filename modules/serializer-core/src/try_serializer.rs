//! Fallible serializer extension.

use alloc::string::String;

use super::error::SerializationError;

/// Serializer that may reject a payload it cannot represent.
///
/// Kept separate from [`MessageSerializer`]: the shared contract stays
/// infallible, and backends with a real failure mode (for example JSON
/// rendering of arbitrary `Serialize` types) implement this trait instead.
///
/// [`MessageSerializer`]: crate::MessageSerializer
pub trait TryMessageSerializer<T>: Send + Sync {
  /// Produces the wire string for the provided payload.
  ///
  /// # Errors
  ///
  /// Returns an error if the payload cannot be rendered by this serializer.
  fn try_serialize(&self, value: T) -> Result<String, SerializationError>;
}
