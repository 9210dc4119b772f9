//! Serializer contract for outbound message payloads.
//!
//! Transports (HTTP clients, WebSocket sessions) accept any implementation of
//! [`MessageSerializer`] and invoke it on each outgoing payload before
//! transmission. The crate ships the built-in [`IDENTITY_SERIALIZER`] for
//! payloads that are already strings, adapters for closures and `Display`
//! types, and a fallible JSON backend for structured payloads.

#![no_std]

extern crate alloc;

/// Display-backed serializer for textual renderings.
mod display_serializer;
/// Error types for serialization failures.
mod error;
/// Closure adapter satisfying the serializer contract.
mod fn_serializer;
/// Built-in identity (no-op) serializer for string payloads.
mod identity_serializer;
/// JSON serializer backends for structured payloads.
mod json_serializer;
/// Telemetry decorator wrapping serializers.
mod observed_serializer;
/// Serializer contract consumed by transports.
mod serializer;
/// Telemetry hooks for serializer observability.
mod serializer_telemetry;
/// Fallible serializer extension.
mod try_serializer;

pub use display_serializer::DisplaySerializer;
pub use error::SerializationError;
pub use fn_serializer::FnSerializer;
pub use identity_serializer::{IDENTITY_SERIALIZER, IdentitySerializer};
pub use json_serializer::{ErasedJsonSerializer, JsonSerializer};
pub use observed_serializer::ObservedSerializer;
pub use serializer::MessageSerializer;
pub use serializer_telemetry::{CountingSerializerTelemetry, NoopSerializerTelemetry, SerializerTelemetry};
pub use try_serializer::TryMessageSerializer;
