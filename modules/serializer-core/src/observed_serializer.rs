//! Telemetry decorator wrapping serializers.

use alloc::string::String;

use super::{
  error::SerializationError, serializer::MessageSerializer, serializer_telemetry::SerializerTelemetry,
  try_serializer::TryMessageSerializer,
};


/// Wraps a serializer and reports each outcome to a [`SerializerTelemetry`].
///
/// The wrapped serializer keeps its contract: infallible serializers stay
/// infallible, fallible ones additionally report failures.
pub struct ObservedSerializer<S, O> {
  inner:     S,
  telemetry: O,
}

impl<S, O> ObservedSerializer<S, O> {
  /// Wraps `inner`, reporting outcomes to `telemetry`.
  #[must_use]
  pub const fn new(inner: S, telemetry: O) -> Self {
    Self { inner, telemetry }
  }

  /// Returns the telemetry handler.
  pub fn telemetry(&self) -> &O {
    &self.telemetry
  }

  /// Unwraps the decorated serializer.
  pub fn into_inner(self) -> S {
    self.inner
  }
}

impl<T, S, O> MessageSerializer<T> for ObservedSerializer<S, O>
where
  S: MessageSerializer<T>,
  O: SerializerTelemetry, {
  fn serialize(&self, value: T) -> String {
    let rendered = self.inner.serialize(value);
    self.telemetry.record_success(rendered.len());
    rendered
  }
}

impl<T, S, O> TryMessageSerializer<T> for ObservedSerializer<S, O>
where
  S: TryMessageSerializer<T>,
  O: SerializerTelemetry, {
  fn try_serialize(&self, value: T) -> Result<String, SerializationError> {
    match self.inner.try_serialize(value) {
      | Ok(rendered) => {
        self.telemetry.record_success(rendered.len());
        Ok(rendered)
      },
      | Err(error) => {
        self.telemetry.record_failure(&error);
        Err(error)
      },
    }
  }
}
