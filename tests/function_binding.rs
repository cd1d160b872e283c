// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn

use hmacfn::compute;
use hmacfn::hfn::function::{FunctionError, HmacFunction};
use hmacfn::hfn::variables::ScriptVariables;
use std::collections::HashMap;
use std::thread;

fn function(values: &[&str]) -> HmacFunction {
	HmacFunction::set_parameters(
		values.iter().map(|value| value.to_string()).collect(),
	)
	.expect("valid parameter count")
}

#[test]
fn successful_call_binds_hex_under_name() {
	let mut vars = ScriptVariables::new();
	let value = function(&["hello", "secret", "HmacSHA1", "v1"])
		.execute(Some(&mut vars));
	assert_eq!(value.len(), 40);
	assert_eq!(vars.get("v1"), Some(value.as_str()));
}

#[test]
fn failing_call_binds_empty_string() {
	let mut vars = ScriptVariables::new();
	vars.set("v1", "stale");
	let value = function(&["hello", "secret", "bogus-algo", "v1"])
		.execute(Some(&mut vars));
	assert_eq!(value, "");
	assert_eq!(vars.get("v1"), Some(""));
}

#[test]
fn two_parameters_use_default_algorithm_and_bind_nothing() {
	let mut vars: HashMap<String, String> = HashMap::new();
	let value = function(&["hello", "secret"]).execute(Some(&mut vars));
	assert_eq!(value, compute("hello", "secret", "HmacSHA256"));
	assert!(vars.is_empty());
}

#[test]
fn missing_store_still_returns_value() {
	let value =
		function(&["hello", "secret", "HmacMD5", "v1"]).execute(None);
	assert_eq!(value.len(), 32);
}

#[test]
fn plaintext_and_key_are_not_trimmed() {
	let padded = function(&[" hello ", " secret ", " HmacSHA256 "])
		.execute(None);
	assert_eq!(padded, compute(" hello ", " secret ", "HmacSHA256"));
	assert_ne!(padded, compute("hello", "secret", "HmacSHA256"));
}

#[test]
fn parameter_count_is_checked_up_front() {
	let err = HmacFunction::set_parameters(vec!["only".to_string()])
		.unwrap_err();
	assert_eq!(
		err,
		FunctionError::InvalidParameterCount {
			min: 2,
			max: 4,
			actual: 1
		}
	);
	assert!(err.to_string().contains("__HMAC"));
}

#[test]
fn reference_key_and_descriptions_are_static() {
	assert_eq!(HmacFunction::reference_key(), "__HMAC");
	let names: Vec<_> = HmacFunction::argument_descriptions()
		.iter()
		.map(|arg| arg.name)
		.collect();
	assert_eq!(
		names,
		vec!["plaintext", "key", "algorithm", "variable_name"]
	);
}

#[test]
fn parallel_callers_with_isolated_stores_agree() {
	let expected = compute("payload", "secret", "HmacSHA256");
	let handles: Vec<_> = (0..8)
		.map(|i| {
			thread::Builder::new()
				.name(format!("vu-{}", i))
				.spawn(|| {
					let mut vars = ScriptVariables::new();
					let value =
						function(&["payload", "secret", "", "sig"])
							.execute(Some(&mut vars));
					(value, vars.get("sig").map(str::to_owned))
				})
				.expect("spawn virtual user")
		})
		.collect();
	for handle in handles {
		let (value, bound) = handle.join().expect("thread finished");
		assert_eq!(value, expected);
		assert_eq!(bound.as_deref(), Some(expected.as_str()));
	}
}
