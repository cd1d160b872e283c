// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: executor.rs
// Author: hmacfn maintainers

//! Helpers for driving a MAC executor and rendering its tag.

use super::registry::MacExecutor;
use hex::encode;

pub fn consume_bytes(
	data: &[u8],
	mut executor: Box<dyn MacExecutor>,
) -> Vec<u8> {
	executor.update(data);
	executor.finalize()
}

/// Lowercase, two digits per byte, no separators.
pub fn digest_to_hex(bytes: &[u8]) -> String {
	encode(bytes)
}
