// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// Module: mac (keyed-hash message authentication codes)
// Author: hmacfn maintainers

//! Shared entry point for HMAC computation.
//! Submodules provide the registry, input encodings, the HMAC executors,
//! and hex rendering.

pub mod encoding;
pub mod executor;
pub mod hmac;
pub mod registry;

use encoding::{encode_key, encode_message, MessagePolicy};
use executor::{consume_bytes, digest_to_hex};
use registry::{MacAlgorithmMetadata, MacError};
use tracing::{debug, error};

pub use self::hmac::DEFAULT_ALGORITHM;

/// A successfully computed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacOutput {
	pub metadata: MacAlgorithmMetadata,
	pub hex: String,
}

/// Blank names select [`DEFAULT_ALGORITHM`].
pub fn resolve_algorithm_name(algorithm: &str) -> &str {
	let trimmed = algorithm.trim();
	if trimmed.is_empty() {
		DEFAULT_ALGORITHM
	} else {
		trimmed
	}
}

pub fn compute_mac(
	message: &str,
	key: &str,
	algorithm: &str,
	policy: MessagePolicy,
) -> Result<MacOutput, MacError> {
	let key_bytes = encode_key(key);
	let (executor, metadata) = registry::create_executor(
		resolve_algorithm_name(algorithm),
		&key_bytes,
	)?;
	let message_bytes = encode_message(message, policy)?;
	let digest = consume_bytes(&message_bytes, executor);
	Ok(MacOutput {
		metadata,
		hex: digest_to_hex(&digest),
	})
}

/// Computes the lowercase hex HMAC of `message` under `key`.
///
/// Never fails outward: any error is logged and yields an empty string, so
/// a single bad parameter cannot abort a larger test run. Use
/// [`compute_mac`] to see the failure.
pub fn compute(message: &str, key: &str, algorithm: &str) -> String {
	compute_with_policy(message, key, algorithm, MessagePolicy::default())
}

pub fn compute_with_policy(
	message: &str,
	key: &str,
	algorithm: &str,
	policy: MessagePolicy,
) -> String {
	match compute_mac(message, key, algorithm, policy) {
		Ok(output) => output.hex,
		Err(err) => {
			error!(kind = err.kind().as_str(), "{}", err);
			debug!(
				algorithm,
				policy = policy.as_str(),
				"HMAC computation failed: {:?}",
				err
			);
			String::new()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::registry::MacErrorKind;
	use super::*;

	#[test]
	fn blank_algorithm_falls_back_to_default() {
		assert_eq!(resolve_algorithm_name(""), DEFAULT_ALGORITHM);
		assert_eq!(resolve_algorithm_name(" \t "), DEFAULT_ALGORITHM);
		assert_eq!(resolve_algorithm_name(" HmacMD5 "), "HmacMD5");
	}

	#[test]
	fn compute_mac_reports_metadata() {
		let output =
			compute_mac("hello", "secret", "", MessagePolicy::Replace)
				.unwrap();
		assert_eq!(output.metadata.identifier, DEFAULT_ALGORITHM);
		assert_eq!(output.hex.len(), output.metadata.hex_len());
	}

	#[test]
	fn strict_policy_fails_but_compute_collapses_to_empty() {
		let err = compute_mac(
			"caf\u{e9}",
			"secret",
			"HmacSHA1",
			MessagePolicy::Strict,
		)
		.unwrap_err();
		assert_eq!(err.kind(), MacErrorKind::Encoding);
		assert_eq!(
			compute_with_policy(
				"caf\u{e9}",
				"secret",
				"HmacSHA1",
				MessagePolicy::Strict
			),
			""
		);
	}

	#[test]
	fn unknown_algorithm_is_checked_before_message_encoding() {
		let err = compute_mac(
			"caf\u{e9}",
			"secret",
			"HmacWhirlpool",
			MessagePolicy::Strict,
		)
		.unwrap_err();
		assert_eq!(err.kind(), MacErrorKind::UnsupportedAlgorithm);
	}
}
