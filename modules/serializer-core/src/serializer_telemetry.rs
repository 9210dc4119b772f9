//! Telemetry hooks for serializer observability.

use portable_atomic::{AtomicU64, Ordering};

use super::error::SerializationError;

mod noop;


pub use noop::NoopSerializerTelemetry;

/// Records serialization outcomes for observability backends.
pub trait SerializerTelemetry: Send + Sync {
  /// Records that a payload finished serializing, with its rendered size.
  fn record_success(&self, size_bytes: usize);

  /// Records that serialization failed for a payload.
  fn record_failure(&self, error: &SerializationError);
}

/// Lock-free counters tracking serialization outcomes.
pub struct CountingSerializerTelemetry {
  success_total: AtomicU64,
  failure_total: AtomicU64,
  bytes_total:   AtomicU64,
}

impl CountingSerializerTelemetry {
  /// Creates a new counter set initialised to zero.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      success_total: AtomicU64::new(0),
      failure_total: AtomicU64::new(0),
      bytes_total:   AtomicU64::new(0),
    }
  }

  /// Returns the success counter.
  #[must_use]
  pub fn success_total(&self) -> u64 {
    self.success_total.load(Ordering::Relaxed)
  }

  /// Returns the failure counter.
  #[must_use]
  pub fn failure_total(&self) -> u64 {
    self.failure_total.load(Ordering::Relaxed)
  }

  /// Returns the total rendered bytes across successful serializations.
  #[must_use]
  pub fn bytes_total(&self) -> u64 {
    self.bytes_total.load(Ordering::Relaxed)
  }
}

impl Default for CountingSerializerTelemetry {
  fn default() -> Self {
    Self::new()
  }
}

impl SerializerTelemetry for CountingSerializerTelemetry {
  fn record_success(&self, size_bytes: usize) {
    self.success_total.fetch_add(1, Ordering::Relaxed);
    self.bytes_total.fetch_add(size_bytes as u64, Ordering::Relaxed);
  }

  fn record_failure(&self, _error: &SerializationError) {
    self.failure_total.fetch_add(1, Ordering::Relaxed);
  }
}
