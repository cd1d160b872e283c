// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: config.rs
// Author: hmacfn maintainers

//! Static function metadata and per-call configuration.

use crate::hfn::mac::encoding::MessagePolicy;
use crate::hfn::mac::DEFAULT_ALGORITHM;

/// Name a script uses to call the function.
pub const REFERENCE_KEY: &str = "__HMAC";

pub const MIN_PARAM_COUNT: usize = 2;
pub const MAX_PARAM_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentDescription {
	pub name: &'static str,
	pub required: bool,
	pub description: &'static str,
}

pub const ARGUMENT_DESCRIPTIONS: &[ArgumentDescription] = &[
	ArgumentDescription {
		name: "plaintext",
		required: true,
		description: "Message to authenticate",
	},
	ArgumentDescription {
		name: "key",
		required: true,
		description: "Shared secret",
	},
	ArgumentDescription {
		name: "algorithm",
		required: false,
		description: "HmacMD5|HmacSHA1|HmacSHA256|HmacSHA512 (default HmacSHA256)",
	},
	ArgumentDescription {
		name: "variable_name",
		required: false,
		description: "Variable that receives the result",
	},
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HmacConfig {
	/// Used when the algorithm argument is missing or blank.
	pub default_algorithm: String,
	pub message_policy: MessagePolicy,
}

impl Default for HmacConfig {
	fn default() -> Self {
		Self {
			default_algorithm: DEFAULT_ALGORITHM.to_string(),
			message_policy: MessagePolicy::default(),
		}
	}
}

impl HmacConfig {
	pub fn with_default_algorithm(
		mut self,
		algorithm: impl Into<String>,
	) -> Self {
		self.default_algorithm = algorithm.into();
		self
	}

	pub fn with_message_policy(mut self, policy: MessagePolicy) -> Self {
		self.message_policy = policy;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn descriptions_cover_every_position() {
		assert_eq!(ARGUMENT_DESCRIPTIONS.len(), MAX_PARAM_COUNT);
		let required = ARGUMENT_DESCRIPTIONS
			.iter()
			.filter(|arg| arg.required)
			.count();
		assert_eq!(required, MIN_PARAM_COUNT);
	}

	#[test]
	fn default_config_uses_sha256_and_replacement() {
		let config = HmacConfig::default();
		assert_eq!(config.default_algorithm, "HmacSHA256");
		assert_eq!(config.message_policy, MessagePolicy::Replace);
	}
}
