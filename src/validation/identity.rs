// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Identity dispatch
//!
//! Ties the pieces together: given a parsed [`Identity`] and a host,
//! build the sighash-all message and check the authorization the
//! identity's flag calls for. The verifier is parameterized over the
//! signature scheme a pubkey-hash identity is checked under; the flag
//! byte itself is validated at parse time, so no invalid-flag branch
//! exists here.

use crate::crypto::{bls12381, secp256k1};
use crate::data_structures::{Identity, IdentityFlag};
use crate::errors::{IdentityError, IdentityResult};
use crate::host::TransactionSource;
use crate::validation::owner_lock::is_lock_hash_present;
use crate::validation::sighash::SighashAllDigest;

/// The signature scheme a pubkey-hash identity is verified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureScheme {
    /// 65-byte recoverable ECDSA, supplied by the caller.
    Secp256k1,
    /// 144-byte BLS min-pk material, carried in the witness lock field.
    Bls12381,
}

impl SignatureScheme {
    /// Bytes of signature material the witness lock field must hold.
    pub fn min_lock_field_len(&self) -> usize {
        match self {
            SignatureScheme::Secp256k1 => secp256k1::SIGNATURE_LEN,
            SignatureScheme::Bls12381 => bls12381::MATERIAL_LEN,
        }
    }
}

/// Verifies that a transaction is authorized by an identity.
pub struct IdentityVerifier {
    scheme: SignatureScheme,
    digest: SighashAllDigest,
}

impl IdentityVerifier {
    /// Create a verifier for the given signature scheme.
    pub fn new(scheme: SignatureScheme) -> Self {
        Self {
            scheme,
            digest: SighashAllDigest::new(),
        }
    }

    /// The scheme pubkey-hash identities are checked under.
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// Verify the transaction reachable through `host` against
    /// `identity`.
    ///
    /// For a pubkey-hash identity under secp256k1 the caller supplies
    /// the 65-byte recoverable `signature`; under BLS the material
    /// lives in the witness lock field and `signature` is ignored. An
    /// owner-lock identity uses no signature at all and skips the
    /// digest entirely.
    pub fn verify<H: TransactionSource>(
        &mut self,
        host: &H,
        identity: &Identity,
        signature: &[u8],
    ) -> IdentityResult<()> {
        match identity.flag {
            IdentityFlag::PubkeyHash => match self.scheme {
                SignatureScheme::Secp256k1 => {
                    let witness = self.digest.build(host, secp256k1::SIGNATURE_LEN)?;
                    secp256k1::verify_recoverable(&identity.hash, signature, &witness.message)
                }
                SignatureScheme::Bls12381 => {
                    let witness = self.digest.build(host, bls12381::MATERIAL_LEN)?;
                    bls12381::verify_min_pk(&identity.hash, &witness.lock_field, &witness.message)
                }
            },
            IdentityFlag::OwnerLock => {
                if is_lock_hash_present(host, &identity.hash) {
                    Ok(())
                } else {
                    Err(IdentityError::IdentityNotFound)
                }
            }
        }
    }
}
