// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Verification logic for identity lock scripts

pub mod identity;
pub mod owner_lock;
pub mod sighash;

pub use identity::{IdentityVerifier, SignatureScheme};
pub use owner_lock::is_lock_hash_present;
pub use sighash::{
    build_sighash_all, SighashAllDigest, SighashWitness, WitnessReader, WitnessStatus,
    CHUNK_LEN, MAX_WITNESS_LEN,
};
