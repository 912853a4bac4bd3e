// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Cryptographic primitives shared by the verification paths
//!
//! The digest primitive is blake2b with a 32-byte output and the
//! chain's fixed personalization. Every hash in this crate goes through
//! it, both the signing message and the blake160 identity fingerprints.

use blake2b_ref::{Blake2b, Blake2bBuilder};

pub mod bls12381;
pub mod secp256k1;

/// Personalization applied to every blake2b instance on this chain.
pub const HASH_PERSONALIZATION: &[u8; 16] = b"ckb-default-hash";

/// Output length of the digest primitive.
pub const HASH_LEN: usize = 32;

/// Length of a blake160 fingerprint: the leading 20 bytes of a digest.
pub const BLAKE160_LEN: usize = 20;

/// A fresh incremental hasher with the chain's personalization.
pub fn new_hasher() -> Blake2b {
    Blake2bBuilder::new(HASH_LEN)
        .personal(HASH_PERSONALIZATION)
        .build()
}

/// blake2b-256 of `data` under the chain personalization.
pub fn blake2b_256(data: &[u8]) -> [u8; HASH_LEN] {
    let mut hasher = new_hasher();
    hasher.update(data);
    let mut out = [0u8; HASH_LEN];
    hasher.finalize(&mut out);
    out
}

/// The leading 20 bytes of [`blake2b_256`], used as a compact identity
/// fingerprint.
pub fn blake160(data: &[u8]) -> [u8; BLAKE160_LEN] {
    let digest = blake2b_256(data);
    let mut out = [0u8; BLAKE160_LEN];
    out.copy_from_slice(&digest[..BLAKE160_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_matches_the_chain_constant() {
        // Well-known blake2b-256("") under the ckb-default-hash
        // personalization.
        assert_eq!(
            hex::encode(blake2b_256(&[])),
            "44f4c69744d5f8c55d642062949dcae49bc4e7ef43d388c5a12f42b5633d163e"
        );
    }

    #[test]
    fn blake160_is_the_digest_prefix() {
        let data = b"identity";
        assert_eq!(blake160(data), blake2b_256(data)[..20]);
    }

    #[test]
    fn incremental_and_one_shot_agree() {
        let mut hasher = new_hasher();
        hasher.update(b"split ");
        hasher.update(b"input");
        let mut out = [0u8; HASH_LEN];
        hasher.finalize(&mut out);
        assert_eq!(out, blake2b_256(b"split input"));
    }
}
