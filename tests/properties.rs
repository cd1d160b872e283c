// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn

use hmacfn::compute;
use hmacfn::hfn::mac::registry;
use proptest::prelude::*;

fn algorithm() -> impl Strategy<Value = &'static str> {
	let names: Vec<&'static str> = registry::metadata()
		.into_iter()
		.map(|metadata| metadata.identifier)
		.collect();
	proptest::sample::select(names)
}

fn is_lower_hex(value: &str) -> bool {
	value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

proptest! {
	#[test]
	fn compute_is_deterministic(
		message in ".{0,64}",
		key in ".{0,64}",
		alg in algorithm(),
	) {
		prop_assert_eq!(
			compute(&message, &key, alg),
			compute(&message, &key, alg)
		);
	}

	#[test]
	fn output_is_fixed_width_lowercase_hex(
		message in ".{0,64}",
		key in ".{0,64}",
		alg in algorithm(),
	) {
		let value = compute(&message, &key, alg);
		let expected = registry::find_algorithm(alg)
			.map(|found| found.metadata.hex_len())
			.unwrap_or_default();
		prop_assert_eq!(value.len(), expected);
		prop_assert!(is_lower_hex(&value));
	}

	#[test]
	fn single_character_change_in_message_changes_tag(
		message in "[ -~]{1,48}",
		index in any::<prop::sample::Index>(),
		alg in algorithm(),
	) {
		let mut bytes = message.into_bytes();
		let pos = index.index(bytes.len());
		let original = String::from_utf8(bytes.clone()).unwrap();
		bytes[pos] = if bytes[pos] == b'a' { b'b' } else { b'a' };
		let flipped = String::from_utf8(bytes).unwrap();
		prop_assert_ne!(
			compute(&original, "secret", alg),
			compute(&flipped, "secret", alg)
		);
	}

	#[test]
	fn single_character_change_in_key_changes_tag(
		key in "[ -~]{1,48}",
		alg in algorithm(),
	) {
		let other = format!("{}x", &key[..key.len() - 1]);
		prop_assume!(other != key);
		prop_assert_ne!(
			compute("payload", &key, alg),
			compute("payload", &other, alg)
		);
	}

	#[test]
	fn unknown_names_never_panic(name in "[a-z]{1,12}") {
		prop_assume!(registry::find_algorithm(&name).is_none());
		prop_assert_eq!(compute("hello", "secret", &name), "");
	}
}
