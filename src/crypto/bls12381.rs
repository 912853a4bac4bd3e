// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! BLS12-381 signature verification (min-pk)
//!
//! The signature material is 144 bytes: a 48-byte compressed G1 public
//! key immediately followed by a 96-byte compressed G2 signature.
//! Verification runs the one-shot core-verify of the `blst` library
//! with both subgroup checks enabled. `blst` also exposes the same
//! sequence as an explicit pairing interface; only the one-shot form is
//! used here.
//!
//! On success the blake160 of the compressed public key is compared
//! against the declared identity.

use blst::min_pk::{PublicKey, Signature};
use blst::BLST_ERROR;

use crate::crypto::blake160;
use crate::errors::IdentityError;

/// Hash-to-curve domain separation tag for the G2 ciphersuite. Shared
/// with every other implementation of the scheme; a mismatch rejects
/// all foreign signatures.
pub const DST: &[u8; 43] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Length of a compressed G1 public key.
pub const PUBKEY_LEN: usize = 48;

/// Length of a compressed G2 signature.
pub const SIGNATURE_LEN: usize = 96;

/// Length of the full lock-field material: public key then signature.
pub const MATERIAL_LEN: usize = PUBKEY_LEN + SIGNATURE_LEN;

/// Verify 144-byte min-pk material over `message` against a declared
/// pubkey hash.
pub fn verify_min_pk(
    pubkey_hash: &[u8; 20],
    material: &[u8],
    message: &[u8; 32],
) -> Result<(), IdentityError> {
    if material.len() < MATERIAL_LEN {
        return Err(IdentityError::ArgumentLength {
            required: MATERIAL_LEN,
            actual: material.len(),
        });
    }
    let pubkey_bytes = &material[..PUBKEY_LEN];
    let signature_bytes = &material[PUBKEY_LEN..MATERIAL_LEN];

    let pubkey = PublicKey::from_bytes(pubkey_bytes).map_err(|_| IdentityError::SignatureParse)?;
    let signature =
        Signature::from_bytes(signature_bytes).map_err(|_| IdentityError::SignatureParse)?;

    // Both group checks on: the signature's inside the verify call, the
    // public key's via `pk_validate`.
    match signature.verify(true, message, DST, &[], &pubkey, true) {
        BLST_ERROR::BLST_SUCCESS => {}
        _ => return Err(IdentityError::PairingVerifyFailed),
    }

    if &blake160(pubkey_bytes) != pubkey_hash {
        return Err(IdentityError::PubkeyHashMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use blst::min_pk::SecretKey;

    use super::*;

    fn test_key(seed: u8) -> SecretKey {
        SecretKey::key_gen(&[seed; 32], &[]).unwrap()
    }

    fn signed_material(key: &SecretKey, message: &[u8; 32], dst: &[u8]) -> Vec<u8> {
        let mut material = Vec::with_capacity(MATERIAL_LEN);
        material.extend_from_slice(&key.sk_to_pk().compress());
        material.extend_from_slice(&key.sign(message, dst, &[]).compress());
        material
    }

    fn key_hash(key: &SecretKey) -> [u8; 20] {
        blake160(&key.sk_to_pk().compress())
    }

    #[test]
    fn valid_material_verifies() {
        let key = test_key(1);
        let message = [9u8; 32];
        let material = signed_material(&key, &message, DST);
        assert!(verify_min_pk(&key_hash(&key), &material, &message).is_ok());
    }

    #[test]
    fn wrong_domain_tag_fails_verification() {
        let key = test_key(2);
        let message = [9u8; 32];
        let material = signed_material(&key, &message, b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_");
        assert_eq!(
            verify_min_pk(&key_hash(&key), &material, &message).unwrap_err(),
            IdentityError::PairingVerifyFailed
        );
    }

    #[test]
    fn wrong_message_fails_verification() {
        let key = test_key(3);
        let material = signed_material(&key, &[9u8; 32], DST);
        assert_eq!(
            verify_min_pk(&key_hash(&key), &material, &[10u8; 32]).unwrap_err(),
            IdentityError::PairingVerifyFailed
        );
    }

    #[test]
    fn foreign_pubkey_fails_the_hash_check() {
        let signer = test_key(4);
        let other = test_key(5);
        let message = [9u8; 32];
        let material = signed_material(&signer, &message, DST);
        assert_eq!(
            verify_min_pk(&key_hash(&other), &material, &message).unwrap_err(),
            IdentityError::PubkeyHashMismatch
        );
    }

    #[test]
    fn garbage_pubkey_is_a_parse_error() {
        let mut material = vec![0xffu8; MATERIAL_LEN];
        material[0] = 0x00;
        assert_eq!(
            verify_min_pk(&[0u8; 20], &material, &[0u8; 32]).unwrap_err(),
            IdentityError::SignatureParse
        );
    }

    #[test]
    fn short_material_reports_argument_length() {
        assert_eq!(
            verify_min_pk(&[0u8; 20], &[0u8; 65], &[0u8; 32]).unwrap_err(),
            IdentityError::ArgumentLength {
                required: MATERIAL_LEN,
                actual: 65
            }
        );
    }
}
