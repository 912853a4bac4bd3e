// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Lock-field extraction from the first group witness
//!
//! The first group witness starts with a fixed-layout prefix: bytes
//! [0, 16) belong to other schema fields and are not interpreted here,
//! bytes [16, 20) hold the little-endian u32 length of the lock field,
//! and the lock field itself starts at byte 20. This is the only piece
//! of schema parsing the core performs; no general-purpose codec is
//! involved.

use crate::errors::IdentityError;

/// Byte offset of the lock field inside the first group witness.
pub const LOCK_FIELD_OFFSET: usize = 20;

/// Byte offset of the lock field's little-endian u32 length.
const LENGTH_OFFSET: usize = 16;

/// Location of the lock field inside the first group witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockFieldSpan {
    /// Start of the lock field in witness bytes.
    pub offset: usize,
    /// Declared length of the lock field.
    pub len: usize,
}

impl LockFieldSpan {
    /// One past the last lock-field byte.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The span as a slice range.
    pub fn range(&self) -> core::ops::Range<usize> {
        self.offset..self.end()
    }
}

/// Locate the lock field inside the loaded prefix of the first group
/// witness.
///
/// `witness` is however much of the witness is held in memory (at most
/// the working-buffer size); the declared length must fit inside it.
pub fn extract_lock_field(witness: &[u8]) -> Result<LockFieldSpan, IdentityError> {
    if witness.len() < LOCK_FIELD_OFFSET {
        return Err(IdentityError::Encoding(
            "witness shorter than the 20-byte lock prefix",
        ));
    }
    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&witness[LENGTH_OFFSET..LOCK_FIELD_OFFSET]);
    let len = u32::from_le_bytes(len_bytes) as usize;
    if witness.len() < LOCK_FIELD_OFFSET + len {
        return Err(IdentityError::Encoding(
            "declared lock field extends past the witness",
        ));
    }
    Ok(LockFieldSpan {
        offset: LOCK_FIELD_OFFSET,
        len,
    })
}
