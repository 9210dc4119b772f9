//! JSON serializer backends for structured payloads.

use alloc::string::{String, ToString};
use core::marker::PhantomData;

use serde::Serialize;

use super::{error::SerializationError, try_serializer::TryMessageSerializer};


/// Renders a `Serialize` payload as its JSON string.
///
/// JSON rendering can fail (a `Serialize` impl may reject its own value), so
/// this backend implements [`TryMessageSerializer`] rather than the
/// infallible contract.
pub struct JsonSerializer<T> {
  _payload: PhantomData<fn(T)>,
}

impl<T> JsonSerializer<T> {
  /// Creates a JSON serializer for `T`.
  #[must_use]
  pub const fn new() -> Self {
    Self { _payload: PhantomData }
  }
}

impl<T> Default for JsonSerializer<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for JsonSerializer<T> {
  fn clone(&self) -> Self {
    Self::new()
  }
}

impl<T> TryMessageSerializer<T> for JsonSerializer<T>
where
  T: Serialize, {
  fn try_serialize(&self, value: T) -> Result<String, SerializationError> {
    serde_json::to_string(&value).map_err(|error| SerializationError::SerializationFailed(error.to_string()))
  }
}

/// JSON serializer for type-erased payloads.
///
/// Accepts `&dyn erased_serde::Serialize`, letting one serializer instance
/// cover a heterogeneous outbound queue.
#[derive(Copy, Clone, Debug, Default)]
pub struct ErasedJsonSerializer;

impl ErasedJsonSerializer {
  /// Creates the erased JSON serializer.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl<'a> TryMessageSerializer<&'a dyn erased_serde::Serialize> for ErasedJsonSerializer {
  fn try_serialize(&self, value: &'a dyn erased_serde::Serialize) -> Result<String, SerializationError> {
    serde_json::to_string(value).map_err(|error| SerializationError::SerializationFailed(error.to_string()))
  }
}
