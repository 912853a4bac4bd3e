// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! The identity record a lock script declares in its arguments
//!
//! On the wire an identity is 21 bytes: a one-byte flag followed by a
//! 20-byte blake160 hash. What the hash fingerprints depends on the
//! flag (a public key for [`IdentityFlag::PubkeyHash`], a referenced
//! lock script for [`IdentityFlag::OwnerLock`]) but the storage layout
//! is identical.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::IdentityError;
use crate::hex_utils::{decode_fixed, HexError};

/// Wire length of an identity record: one flag byte plus a 20-byte hash.
pub const IDENTITY_LEN: usize = 21;

/// How the identity's 20-byte hash authorizes a transaction.
///
/// The two variants are the only flags this crate knows; unknown flag
/// bytes are rejected while parsing, so a constructed `Identity` can
/// always be dispatched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityFlag {
    /// The hash is the blake160 of a public key; authorization requires
    /// a valid signature over the transaction's signing message.
    PubkeyHash,
    /// The hash is the blake160 of a lock script; authorization requires
    /// some input cell of the transaction to carry that lock.
    OwnerLock,
}

impl IdentityFlag {
    /// Parse a wire flag byte.
    pub fn from_byte(byte: u8) -> Result<Self, IdentityError> {
        match byte {
            0 => Ok(IdentityFlag::PubkeyHash),
            1 => Ok(IdentityFlag::OwnerLock),
            other => Err(IdentityError::InvalidIdentityFlag(other)),
        }
    }

    /// The wire flag byte.
    pub fn as_byte(self) -> u8 {
        match self {
            IdentityFlag::PubkeyHash => 0,
            IdentityFlag::OwnerLock => 1,
        }
    }
}

/// A declared identity: flag plus blake160 hash.
///
/// Immutable input to verification; created once from the lock script's
/// arguments and consumed per verification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Authorization path selector.
    pub flag: IdentityFlag,
    /// blake160 fingerprint; its meaning depends on `flag`.
    #[serde(with = "crate::hex_utils::serde_hex")]
    pub hash: [u8; 20],
}

impl Identity {
    /// Create an identity from its parts.
    pub fn new(flag: IdentityFlag, hash: [u8; 20]) -> Self {
        Self { flag, hash }
    }

    /// Create a pubkey-hash identity.
    pub fn pubkey_hash(hash: [u8; 20]) -> Self {
        Self::new(IdentityFlag::PubkeyHash, hash)
    }

    /// Create an owner-lock identity.
    pub fn owner_lock(hash: [u8; 20]) -> Self {
        Self::new(IdentityFlag::OwnerLock, hash)
    }

    /// Parse the 21-byte wire form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdentityError> {
        if bytes.len() != IDENTITY_LEN {
            return Err(IdentityError::Encoding("identity record must be 21 bytes"));
        }
        let flag = IdentityFlag::from_byte(bytes[0])?;
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&bytes[1..]);
        Ok(Self { flag, hash })
    }

    /// The 21-byte wire form.
    pub fn to_bytes(&self) -> [u8; IDENTITY_LEN] {
        let mut out = [0u8; IDENTITY_LEN];
        out[0] = self.flag.as_byte();
        out[1..].copy_from_slice(&self.hash);
        out
    }

    /// Parse an identity from its 42-character hex wire form.
    pub fn from_hex(hex_str: &str) -> Result<Self, IdentityError> {
        let bytes: [u8; IDENTITY_LEN] = decode_fixed(hex_str).map_err(|e| match e {
            HexError::InvalidLength { .. } => {
                IdentityError::Encoding("identity record must be 21 bytes")
            }
            HexError::InvalidHex(_) => IdentityError::Encoding("identity record is not valid hex"),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Hex-encode the wire form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.flag {
            IdentityFlag::PubkeyHash => "pubkey-hash",
            IdentityFlag::OwnerLock => "owner-lock",
        };
        write!(f, "{}:{}", name, hex::encode(self.hash))
    }
}
