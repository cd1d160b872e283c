// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: registry.rs
// Author: hmacfn maintainers

//! Registry definitions for MAC algorithms, including factory dispatch,
//! name resolution, and the error taxonomy shared by the function adapter
//! and the CLI.

use std::borrow::Cow;

use super::hmac;

pub trait MacExecutor: Send + 'static {
	fn update(&mut self, data: &[u8]);
	fn finalize(self: Box<Self>) -> Vec<u8>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacAlgorithmMetadata {
	/// Canonical name, e.g. `HmacSHA256`.
	pub identifier: &'static str,
	/// Lower-case dashed spelling, e.g. `hmac-sha256`.
	pub alias: &'static str,
	pub display_name: &'static str,
	/// Tag length in bytes.
	pub output_len: usize,
	pub legacy: bool,
}

impl MacAlgorithmMetadata {
	pub const fn new(
		identifier: &'static str,
		alias: &'static str,
		display_name: &'static str,
		output_len: usize,
		legacy: bool,
	) -> Self {
		Self {
			identifier,
			alias,
			display_name,
			output_len,
			legacy,
		}
	}

	pub const fn legacy(
		identifier: &'static str,
		alias: &'static str,
		display_name: &'static str,
		output_len: usize,
	) -> Self {
		Self::new(identifier, alias, display_name, output_len, true)
	}

	pub const fn current(
		identifier: &'static str,
		alias: &'static str,
		display_name: &'static str,
		output_len: usize,
	) -> Self {
		Self::new(identifier, alias, display_name, output_len, false)
	}

	pub fn is_legacy(&self) -> bool {
		self.legacy
	}

	/// Number of characters in the rendered hex tag.
	pub fn hex_len(&self) -> usize {
		self.output_len * 2
	}

	pub fn matches(&self, name: &str) -> bool {
		self.identifier.eq_ignore_ascii_case(name)
			|| self.alias.eq_ignore_ascii_case(name)
	}
}

pub type MacFactory =
	fn(&[u8]) -> Result<Box<dyn MacExecutor>, MacError>;

#[derive(Clone, Copy)]
pub struct MacAlgorithm {
	pub metadata: MacAlgorithmMetadata,
	pub factory: MacFactory,
}

impl MacAlgorithm {
	pub const fn new(
		metadata: MacAlgorithmMetadata,
		factory: MacFactory,
	) -> Self {
		Self { metadata, factory }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacErrorKind {
	UnsupportedAlgorithm,
	Encoding,
	KeyInitialization,
}

impl MacErrorKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			MacErrorKind::UnsupportedAlgorithm => {
				"unsupported-algorithm"
			}
			MacErrorKind::Encoding => "encoding",
			MacErrorKind::KeyInitialization => "key-initialization",
		}
	}
}

#[derive(Debug)]
pub struct MacError {
	kind: MacErrorKind,
	message: Cow<'static, str>,
}

impl MacError {
	pub fn new(
		kind: MacErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn unsupported(identifier: &str) -> Self {
		Self::new(
			MacErrorKind::UnsupportedAlgorithm,
			format!("unsupported MAC algorithm `{}`", identifier),
		)
	}

	pub fn kind(&self) -> MacErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for MacError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for MacError {}

pub fn algorithms() -> impl Iterator<Item = &'static MacAlgorithm> {
	hmac::catalog().iter()
}

pub fn metadata() -> Vec<MacAlgorithmMetadata> {
	algorithms().map(|alg| alg.metadata).collect()
}

pub fn find_algorithm(
	identifier: &str,
) -> Option<&'static MacAlgorithm> {
	algorithms().find(|alg| alg.metadata.matches(identifier))
}

pub fn create_executor(
	identifier: &str,
	key: &[u8],
) -> Result<(Box<dyn MacExecutor>, MacAlgorithmMetadata), MacError> {
	let algorithm = find_algorithm(identifier)
		.ok_or_else(|| MacError::unsupported(identifier))?;
	let executor = (algorithm.factory)(key)?;
	Ok((executor, algorithm.metadata))
}
