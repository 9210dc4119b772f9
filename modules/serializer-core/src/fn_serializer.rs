//! Closure adapter satisfying the serializer contract.

use alloc::string::String;

use super::serializer::MessageSerializer;


/// Adapts a plain function or closure into a [`MessageSerializer`].
///
/// Lets callers supply a custom mapping without defining a dedicated type.
#[derive(Copy, Clone, Debug)]
pub struct FnSerializer<F> {
  mapping: F,
}

impl<F> FnSerializer<F> {
  /// Wraps the provided mapping.
  #[must_use]
  pub const fn new(mapping: F) -> Self {
    Self { mapping }
  }

  /// Returns the wrapped mapping.
  pub fn into_inner(self) -> F {
    self.mapping
  }
}

impl<T, F> MessageSerializer<T> for FnSerializer<F>
where
  F: Fn(T) -> String + Send + Sync, {
  fn serialize(&self, value: T) -> String {
    (self.mapping)(value)
  }
}
