// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Lightweight verification core for sighash-all identity lock scripts
//!
//! This crate decides whether a transaction is authorized by a declared
//! identity (a one-byte flag plus a 20-byte blake160 hash). It supports
//! three authorization paths: secp256k1 recoverable-signature recovery,
//! BLS12-381 pairing-based verification, and an owner-lock check that
//! scans the transaction's input cells for a matching lock hash.
//!
//! The transaction itself is reachable only through the
//! [`host::TransactionSource`] trait, which models the virtual machine's
//! syscall layer. Witnesses are streamed through the signing hash in
//! bounded chunks, so memory stays fixed no matter how large the
//! witness set grows.

pub mod crypto;
pub mod data_structures;
pub mod errors;
pub mod extraction;
pub mod hex_utils;
pub mod host;
pub mod validation;

pub use data_structures::{Identity, IdentityFlag};
pub use errors::{IdentityError, IdentityResult};
pub use extraction::{extract_lock_field, LockFieldSpan};
pub use host::{HostError, MemoryTransaction, TransactionSource, WitnessSource};
pub use validation::{
    build_sighash_all, is_lock_hash_present, IdentityVerifier, SighashAllDigest, SighashWitness,
    SignatureScheme,
};
