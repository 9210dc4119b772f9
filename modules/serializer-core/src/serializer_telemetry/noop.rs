//! No-op telemetry implementation used as a default placeholder.

use super::SerializerTelemetry;
use crate::error::SerializationError;

/// Telemetry handler that discards all events.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopSerializerTelemetry;

impl NoopSerializerTelemetry {
  /// Creates a new telemetry handler that performs no work.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl SerializerTelemetry for NoopSerializerTelemetry {
  fn record_success(&self, _size_bytes: usize) {}

  fn record_failure(&self, _error: &SerializationError) {}
}
