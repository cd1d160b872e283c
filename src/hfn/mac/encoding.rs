// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: encoding.rs
// Author: hmacfn maintainers

//! Byte encodings for MAC inputs.
//!
//! Keys are taken as UTF-8 so every character survives. Messages are
//! restricted to the 7-bit ASCII range; what happens to anything above
//! U+007F is governed by [`MessagePolicy`].

use super::registry::{MacError, MacErrorKind};
use zeroize::Zeroizing;

/// Byte written in place of a message character outside the ASCII range.
pub const REPLACEMENT_BYTE: u8 = b'?';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessagePolicy {
	/// Each non-ASCII character becomes a single [`REPLACEMENT_BYTE`].
	#[default]
	Replace,
	/// Non-ASCII characters are rejected with an encoding error.
	Strict,
}

impl MessagePolicy {
	pub fn as_str(&self) -> &'static str {
		match self {
			MessagePolicy::Replace => "replace",
			MessagePolicy::Strict => "strict",
		}
	}
}

pub fn encode_key(key: &str) -> Zeroizing<Vec<u8>> {
	Zeroizing::new(key.as_bytes().to_vec())
}

pub fn encode_message(
	message: &str,
	policy: MessagePolicy,
) -> Result<Vec<u8>, MacError> {
	if message.is_ascii() {
		return Ok(message.as_bytes().to_vec());
	}
	match policy {
		MessagePolicy::Replace => Ok(message
			.chars()
			.map(|ch| {
				if ch.is_ascii() {
					ch as u8
				} else {
					REPLACEMENT_BYTE
				}
			})
			.collect()),
		MessagePolicy::Strict => {
			let (offset, ch) = message
				.char_indices()
				.find(|(_, ch)| !ch.is_ascii())
				.unwrap_or((0, char::REPLACEMENT_CHARACTER));
			Err(MacError::new(
				MacErrorKind::Encoding,
				format!(
					"message character {:?} (U+{:04X}) at byte {} is outside the ASCII range",
					ch, ch as u32, offset
				),
			))
		}
	}
}
