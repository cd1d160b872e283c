// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: main.rs
// Author: hmacfn maintainers

use hmacfn::hfn::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}
