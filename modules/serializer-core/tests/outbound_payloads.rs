#![cfg(not(target_os = "none"))]

extern crate alloc;

use alloc::{string::String, vec::Vec};

use serde::Serialize;
use wirecast_serializer_core_rs::{
  CountingSerializerTelemetry, DisplaySerializer, FnSerializer, IDENTITY_SERIALIZER, JsonSerializer,
  MessageSerializer, ObservedSerializer, SerializationError, SerializerTelemetry, TryMessageSerializer,
};

/// Minimal stand-in for a transport: serializes every outgoing payload and
/// queues the resulting frames.
struct OutboundChannel<'a, T> {
  serializer: &'a dyn MessageSerializer<T>,
  frames:     Vec<String>,
}

impl<'a, T> OutboundChannel<'a, T> {
  fn new(serializer: &'a dyn MessageSerializer<T>) -> Self {
    Self { serializer, frames: Vec::new() }
  }

  fn send(&mut self, payload: T) {
    let frame = self.serializer.serialize(payload);
    self.frames.push(frame);
  }
}

#[test]
fn channel_sends_string_payloads_through_identity() {
  let identity: &dyn MessageSerializer<String> = &IDENTITY_SERIALIZER;
  let mut channel = OutboundChannel::new(identity);
  channel.send(String::from("test string"));
  channel.send(String::new());
  assert_eq!(channel.frames, ["test string", ""]);
}

#[test]
fn channel_accepts_any_conversion_strategy() {
  let decimal = DisplaySerializer::<i32>::new();
  let mut channel = OutboundChannel::new(&decimal);
  channel.send(123);
  channel.send(-42);
  assert_eq!(channel.frames, ["123", "-42"]);

  let braced = FnSerializer::new(|value: i32| alloc::format!("[{value}]"));
  let mut channel = OutboundChannel::new(&braced);
  channel.send(0);
  assert_eq!(channel.frames, ["[0]"]);
}

#[derive(Serialize)]
struct ChatMessage {
  room: &'static str,
  body: String,
}

#[test]
fn observed_json_pipeline_reports_frame_sizes() {
  let serializer = ObservedSerializer::new(JsonSerializer::<ChatMessage>::new(), CountingSerializerTelemetry::new());

  let first = serializer
    .try_serialize(ChatMessage { room: "lobby", body: String::from("hi") })
    .expect("first frame");
  let second = serializer
    .try_serialize(ChatMessage { room: "lobby", body: String::from("bye") })
    .expect("second frame");

  assert_eq!(first, r#"{"room":"lobby","body":"hi"}"#);
  assert_eq!(serializer.telemetry().success_total(), 2);
  assert_eq!(serializer.telemetry().bytes_total(), (first.len() + second.len()) as u64);
}

#[test]
fn counters_stay_exact_under_concurrent_recording() {
  const THREADS: u64 = 8;
  const ROUNDS: u64 = 1_000;
  const FRAME_BYTES: u64 = 16;

  let telemetry = CountingSerializerTelemetry::new();

  std::thread::scope(|scope| {
    for _ in 0..THREADS {
      scope.spawn(|| {
        for _ in 0..ROUNDS {
          telemetry.record_success(FRAME_BYTES as usize);
          telemetry.record_failure(&SerializationError::SerializationFailed(String::from("refused")));
        }
      });
    }
  });

  assert_eq!(telemetry.success_total(), THREADS * ROUNDS);
  assert_eq!(telemetry.failure_total(), THREADS * ROUNDS);
  assert_eq!(telemetry.bytes_total(), THREADS * ROUNDS * FRAME_BYTES);
}
