//! Display-backed serializer for textual renderings.

use alloc::string::{String, ToString};
use core::{fmt, marker::PhantomData};

use super::serializer::MessageSerializer;


/// Serializes any `Display` payload through its textual rendering.
///
/// For integers this is the decimal string form.
pub struct DisplaySerializer<T> {
  _payload: PhantomData<fn(T)>,
}

impl<T> DisplaySerializer<T> {
  /// Creates a serializer for `T`.
  #[must_use]
  pub const fn new() -> Self {
    Self { _payload: PhantomData }
  }
}

impl<T> Default for DisplaySerializer<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for DisplaySerializer<T> {
  fn clone(&self) -> Self {
    Self::new()
  }
}

impl<T> MessageSerializer<T> for DisplaySerializer<T>
where
  T: fmt::Display, {
  fn serialize(&self, value: T) -> String {
    value.to_string()
  }
}
