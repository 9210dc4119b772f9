//! Built-in identity (no-op) serializer for string payloads.

use alloc::string::String;

use super::serializer::MessageSerializer;


/// Serializer whose output equals its input, for payloads already in string
/// form.
///
/// Total over every string value, including the empty string. Applying it
/// repeatedly yields the original text.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct IdentitySerializer;

impl IdentitySerializer {
  /// Creates the identity serializer.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

/// Shared identity serializer instance, alive for the life of the process.
pub const IDENTITY_SERIALIZER: IdentitySerializer = IdentitySerializer::new();

impl MessageSerializer<String> for IdentitySerializer {
  fn serialize(&self, value: String) -> String {
    value
  }
}

impl<'a> MessageSerializer<&'a str> for IdentitySerializer {
  fn serialize(&self, value: &'a str) -> String {
    String::from(value)
  }
}
