// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! secp256k1 recoverable-signature verification
//!
//! The signature material is 65 bytes: a 64-byte compact signature
//! followed by a one-byte recovery id. Verification recovers the public
//! key from the signature and the signing message, serializes it
//! compressed (33 bytes), and compares its blake160 against the
//! declared identity. A single deterministic attempt; no retries.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::crypto::blake160;
use crate::errors::IdentityError;

/// Length of the recoverable signature material.
pub const SIGNATURE_LEN: usize = 65;

/// Offset of the recovery id inside the material.
const RECID_INDEX: usize = 64;

/// Verify a 65-byte recoverable signature over `message` against a
/// declared pubkey hash.
pub fn verify_recoverable(
    pubkey_hash: &[u8; 20],
    material: &[u8],
    message: &[u8; 32],
) -> Result<(), IdentityError> {
    if material.len() < SIGNATURE_LEN {
        return Err(IdentityError::ArgumentLength {
            required: SIGNATURE_LEN,
            actual: material.len(),
        });
    }
    let signature =
        Signature::from_slice(&material[..RECID_INDEX]).map_err(|_| IdentityError::SignatureParse)?;
    let recovery_id =
        RecoveryId::from_byte(material[RECID_INDEX]).ok_or(IdentityError::SignatureParse)?;

    let recovered = VerifyingKey::recover_from_prehash(message, &signature, recovery_id)
        .map_err(|_| IdentityError::KeyRecoveryFailed)?;

    let compressed = recovered.to_encoded_point(true);
    if &blake160(compressed.as_bytes()) != pubkey_hash {
        return Err(IdentityError::PubkeyHashMismatch);
    }
    Ok(())
}
