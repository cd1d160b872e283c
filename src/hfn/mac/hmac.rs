// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hmacfn
// File: hmac.rs
// Author: hmacfn maintainers

//! HMAC executor implementations covering MD5 and SHA-1 (legacy) plus the
//! SHA-2 and SHA-3 families.

use super::registry::{
	MacAlgorithm, MacAlgorithmMetadata, MacError, MacErrorKind,
	MacExecutor,
};
use digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

type HmacMd5 = Hmac<Md5>;
type HmacSha1 = Hmac<Sha1>;
type HmacSha224 = Hmac<Sha224>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;
type HmacSha512_224 = Hmac<Sha512_224>;
type HmacSha512_256 = Hmac<Sha512_256>;
type HmacSha3_224 = Hmac<Sha3_224>;
type HmacSha3_256 = Hmac<Sha3_256>;
type HmacSha3_384 = Hmac<Sha3_384>;
type HmacSha3_512 = Hmac<Sha3_512>;

pub const DEFAULT_ALGORITHM: &str = "HmacSHA256";

pub fn catalog() -> &'static [MacAlgorithm] {
	const ALGORITHMS: &[MacAlgorithm] = &[
		MacAlgorithm::new(
			MacAlgorithmMetadata::legacy(
				"HmacMD5", "hmac-md5", "HMAC-MD5", 16,
			),
			create_hmac::<HmacMd5>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::legacy(
				"HmacSHA1",
				"hmac-sha1",
				"HMAC-SHA1",
				20,
			),
			create_hmac::<HmacSha1>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				"HmacSHA224",
				"hmac-sha224",
				"HMAC-SHA224",
				28,
			),
			create_hmac::<HmacSha224>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				DEFAULT_ALGORITHM,
				"hmac-sha256",
				"HMAC-SHA256",
				32,
			),
			create_hmac::<HmacSha256>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				"HmacSHA384",
				"hmac-sha384",
				"HMAC-SHA384",
				48,
			),
			create_hmac::<HmacSha384>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				"HmacSHA512",
				"hmac-sha512",
				"HMAC-SHA512",
				64,
			),
			create_hmac::<HmacSha512>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				"HmacSHA512/224",
				"hmac-sha512-224",
				"HMAC-SHA512/224",
				28,
			),
			create_hmac::<HmacSha512_224>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				"HmacSHA512/256",
				"hmac-sha512-256",
				"HMAC-SHA512/256",
				32,
			),
			create_hmac::<HmacSha512_256>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				"HmacSHA3-224",
				"hmac-sha3-224",
				"HMAC-SHA3-224",
				28,
			),
			create_hmac::<HmacSha3_224>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				"HmacSHA3-256",
				"hmac-sha3-256",
				"HMAC-SHA3-256",
				32,
			),
			create_hmac::<HmacSha3_256>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				"HmacSHA3-384",
				"hmac-sha3-384",
				"HMAC-SHA3-384",
				48,
			),
			create_hmac::<HmacSha3_384>,
		),
		MacAlgorithm::new(
			MacAlgorithmMetadata::current(
				"HmacSHA3-512",
				"hmac-sha3-512",
				"HMAC-SHA3-512",
				64,
			),
			create_hmac::<HmacSha3_512>,
		),
	];
	ALGORITHMS
}

struct HmacExecutor<M> {
	inner: M,
}

impl<M> MacExecutor for HmacExecutor<M>
where
	M: Mac + Send + 'static,
{
	fn update(&mut self, data: &[u8]) {
		Mac::update(&mut self.inner, data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		self.inner.finalize().into_bytes().to_vec()
	}
}

// A fresh context per call; nothing keyed is cached between invocations.
fn create_hmac<M>(key: &[u8]) -> Result<Box<dyn MacExecutor>, MacError>
where
	M: Mac + KeyInit + Send + 'static,
{
	let inner = <M as KeyInit>::new_from_slice(key).map_err(|err| {
		MacError::new(
			MacErrorKind::KeyInitialization,
			format!("failed to initialise HMAC key: {}", err),
		)
	})?;
	Ok(Box::new(HmacExecutor { inner }))
}
