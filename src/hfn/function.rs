// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: function.rs
// Author: hmacfn maintainers

//! The `__HMAC(plaintext, key[, algorithm[, variable_name]])` script
//! function.

use crate::hfn::config::{
	ArgumentDescription, HmacConfig, ARGUMENT_DESCRIPTIONS,
	MAX_PARAM_COUNT, MIN_PARAM_COUNT, REFERENCE_KEY,
};
use crate::hfn::mac::compute_with_policy;
use crate::hfn::variables::VariableStore;
use std::fmt;
use tracing::debug;

const PLAINTEXT: usize = 0;
const KEY: usize = 1;
const ALGORITHM: usize = 2;
const VAR_NAME: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
	InvalidParameterCount {
		min: usize,
		max: usize,
		actual: usize,
	},
}

impl fmt::Display for FunctionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidParameterCount { min, max, actual } => write!(
				f,
				"{} called with wrong number of parameters: expected {} to {}, got {}",
				REFERENCE_KEY, min, max, actual
			),
		}
	}
}

impl std::error::Error for FunctionError {}

#[derive(Debug, Clone)]
pub struct HmacFunction {
	params: Vec<String>,
	config: HmacConfig,
}

impl HmacFunction {
	pub fn set_parameters(
		params: Vec<String>,
	) -> Result<Self, FunctionError> {
		Self::with_config(params, HmacConfig::default())
	}

	pub fn with_config(
		params: Vec<String>,
		config: HmacConfig,
	) -> Result<Self, FunctionError> {
		if !(MIN_PARAM_COUNT..=MAX_PARAM_COUNT).contains(&params.len())
		{
			return Err(FunctionError::InvalidParameterCount {
				min: MIN_PARAM_COUNT,
				max: MAX_PARAM_COUNT,
				actual: params.len(),
			});
		}
		Ok(Self { params, config })
	}

	pub fn reference_key() -> &'static str {
		REFERENCE_KEY
	}

	pub fn argument_descriptions() -> &'static [ArgumentDescription] {
		ARGUMENT_DESCRIPTIONS
	}

	pub fn config(&self) -> &HmacConfig {
		&self.config
	}

	/// Trimmed algorithm argument, or the configured default when blank.
	pub fn algorithm(&self) -> &str {
		self.params
			.get(ALGORITHM)
			.map(|value| value.trim())
			.filter(|value| !value.is_empty())
			.unwrap_or(self.config.default_algorithm.as_str())
	}

	/// Trimmed variable name, if one was given and is non-blank.
	pub fn variable_name(&self) -> Option<&str> {
		self.params
			.get(VAR_NAME)
			.map(|value| value.trim())
			.filter(|value| !value.is_empty())
	}

	/// Computes the tag and binds it into `vars` when a variable name
	/// was supplied. Failures bind and return the empty string.
	pub fn execute(
		&self,
		vars: Option<&mut dyn VariableStore>,
	) -> String {
		let value = compute_with_policy(
			&self.params[PLAINTEXT],
			&self.params[KEY],
			self.algorithm(),
			self.config.message_policy,
		);
		let name = self.variable_name();
		debug!(
			"{} name: {} value: {}",
			std::thread::current().name().unwrap_or("unnamed"),
			name.unwrap_or(""),
			value
		);
		if let (Some(name), Some(vars)) = (name, vars) {
			vars.put(name, &value);
		}
		value
	}
}
