//! Serializer contract consumed by transports.

use alloc::string::String;


/// Converts a typed payload into the string form sent over a network channel.
///
/// Implementations are expected to be stateless and pure: the same payload
/// yields the same string, and invocations from concurrent callers need no
/// coordination. The contract defines no failure mode; implementations that
/// can reject a payload implement [`TryMessageSerializer`] instead.
///
/// [`TryMessageSerializer`]: crate::TryMessageSerializer
pub trait MessageSerializer<T>: Send + Sync {
  /// Produces the wire string for the provided payload.
  fn serialize(&self, value: T) -> String;
}
