// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: lib.rs
// Author: hmacfn maintainers

//! Keyed-hash (HMAC) helper function for load-test scripts.
//!
//! The core lives in [`hfn::mac`]: resolve an algorithm by name, key it
//! with the UTF-8 bytes of the secret, run it over the ASCII bytes of the
//! message and render the tag as lowercase hex. [`hfn::function`] wraps
//! that in the positional-argument form a test script calls, binding the
//! result into an injected [`hfn::variables::VariableStore`].

pub mod hfn {
	pub mod app;
	pub mod config;
	pub mod function;
	pub mod mac;
	pub mod variables;
}

pub use hfn::mac::{compute, compute_mac};
