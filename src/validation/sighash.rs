// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! The sighash-all signing digest
//!
//! Both signature schemes sign the same 32-byte message, folded from:
//!
//! 1. the 32-byte transaction hash (no length prefix),
//! 2. the first group witness with its lock field zeroed, preceded by
//!    its 8-byte little-endian total length,
//! 3. every further witness of the same script group, each preceded by
//!    its own 8-byte length,
//! 4. every witness past the transaction's input count ("extra"
//!    witnesses), each preceded by its own 8-byte length.
//!
//! The lock field is zeroed because the signature cannot sign over
//! itself; this also lets the signer compute the message from a
//! transaction whose lock field still holds a placeholder. The first
//! witness's length prefix is fed by the digest builder, not by the
//! streaming reader; all later witnesses feed their own. The asymmetry
//! is part of the wire contract.
//!
//! Witnesses larger than the working buffer are streamed through the
//! hasher chunk by chunk, so memory use is independent of witness size
//! and count.

use blake2b_ref::Blake2b;

use crate::crypto::{new_hasher, HASH_LEN};
use crate::errors::IdentityError;
use crate::extraction::extract_lock_field;
use crate::host::{HostError, TransactionSource, WitnessSource};

/// Upper bound on the in-memory copy of the first group witness. The
/// lock field must fit inside this prefix.
pub const MAX_WITNESS_LEN: usize = 32 * 1024;

/// Chunk size for streaming witnesses through the hasher.
pub const CHUNK_LEN: usize = 32 * 1024;

/// Outcome of asking the reader to fold one witness index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessStatus {
    /// The witness existed and was folded into the hasher.
    Folded,
    /// The index is past the end of the witness sequence. Terminates
    /// enumeration; never an error.
    Exhausted,
}

/// Streams witnesses from the host into an incremental hasher without
/// ever holding more than one chunk in memory.
pub struct WitnessReader {
    chunk: Vec<u8>,
}

impl WitnessReader {
    /// Create a reader with an owned chunk buffer.
    pub fn new() -> Self {
        Self {
            chunk: vec![0u8; CHUNK_LEN],
        }
    }

    /// Fold the witness at `index` into `hasher`, reading from byte
    /// `start` onwards.
    ///
    /// When `prefix_length` is set, the witness's total length is fed
    /// as 8 little-endian bytes before its data. The caller leaves it
    /// unset only when resuming the first witness, whose length was
    /// already fed.
    pub fn fold<H: TransactionSource>(
        &mut self,
        host: &H,
        hasher: &mut Blake2b,
        start: usize,
        index: usize,
        source: WitnessSource,
        prefix_length: bool,
    ) -> Result<WitnessStatus, IdentityError> {
        let total = match host.load_witness(&mut self.chunk, start, index, source) {
            Ok(total) => total,
            Err(HostError::IndexOutOfBound) => return Ok(WitnessStatus::Exhausted),
            Err(err) => return Err(err.into()),
        };
        if prefix_length {
            hasher.update(&(total as u64).to_le_bytes());
        }
        let mut offset = total.min(CHUNK_LEN);
        hasher.update(&self.chunk[..offset]);
        while offset < total {
            let remaining = host
                .load_witness(&mut self.chunk, start + offset, index, source)
                .map_err(IdentityError::from)?;
            let read = remaining.min(CHUNK_LEN);
            hasher.update(&self.chunk[..read]);
            offset += read;
        }
        Ok(WitnessStatus::Folded)
    }
}

impl Default for WitnessReader {
    fn default() -> Self {
        Self::new()
    }
}

/// The signing message together with the signature material extracted
/// from the first group witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SighashWitness {
    /// The 32-byte message both signature schemes sign.
    pub message: [u8; HASH_LEN],
    /// Copy of the witness lock field, taken before the span was
    /// zeroed.
    pub lock_field: Vec<u8>,
}

/// Builds the canonical sighash-all signing message.
///
/// Owns the bounded working buffers and may be reused across
/// verification calls; the digest itself is recomputed fresh every
/// time, a pure function of the transaction reachable through the
/// host.
pub struct SighashAllDigest {
    first_witness: Vec<u8>,
    reader: WitnessReader,
}

impl SighashAllDigest {
    /// Create a builder with owned working buffers.
    pub fn new() -> Self {
        Self {
            first_witness: vec![0u8; MAX_WITNESS_LEN],
            reader: WitnessReader::new(),
        }
    }

    /// Build the signing message, requiring the witness lock field to
    /// hold at least `min_lock_field_len` bytes of signature material.
    pub fn build<H: TransactionSource>(
        &mut self,
        host: &H,
        min_lock_field_len: usize,
    ) -> Result<SighashWitness, IdentityError> {
        // The first group witness must exist; even end-of-range is a
        // host failure here.
        let witness_len = host
            .load_witness(&mut self.first_witness, 0, 0, WitnessSource::GroupInput)
            .map_err(IdentityError::from)?;
        let read_len = witness_len.min(MAX_WITNESS_LEN);

        let span = extract_lock_field(&self.first_witness[..read_len])?;
        if span.len < min_lock_field_len {
            return Err(IdentityError::ArgumentLength {
                required: min_lock_field_len,
                actual: span.len,
            });
        }
        let lock_field = self.first_witness[span.range()].to_vec();

        let tx_hash = host.load_tx_hash().map_err(IdentityError::from)?;

        let mut hasher = new_hasher();
        hasher.update(&tx_hash);

        // Blind the signature: zero the lock field before digesting.
        self.first_witness[span.range()].fill(0);
        hasher.update(&(witness_len as u64).to_le_bytes());
        hasher.update(&self.first_witness[..read_len]);

        // Remainder of an oversized first witness; its length was
        // already fed above.
        if read_len < witness_len {
            let status = self.reader.fold(
                host,
                &mut hasher,
                read_len,
                0,
                WitnessSource::GroupInput,
                false,
            )?;
            if status == WitnessStatus::Exhausted {
                return Err(HostError::IndexOutOfBound.into());
            }
        }

        // Every further witness in this script group.
        let mut index = 1;
        loop {
            match self
                .reader
                .fold(host, &mut hasher, 0, index, WitnessSource::GroupInput, true)?
            {
                WitnessStatus::Folded => index += 1,
                WitnessStatus::Exhausted => break,
            }
        }

        // Witnesses attached past the input list.
        let mut index = host.input_count().map_err(IdentityError::from)?;
        loop {
            match self
                .reader
                .fold(host, &mut hasher, 0, index, WitnessSource::Input, true)?
            {
                WitnessStatus::Folded => index += 1,
                WitnessStatus::Exhausted => break,
            }
        }

        let mut message = [0u8; HASH_LEN];
        hasher.finalize(&mut message);
        Ok(SighashWitness {
            message,
            lock_field,
        })
    }
}

impl Default for SighashAllDigest {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience over [`SighashAllDigest`].
pub fn build_sighash_all<H: TransactionSource>(
    host: &H,
    min_lock_field_len: usize,
) -> Result<SighashWitness, IdentityError> {
    SighashAllDigest::new().build(host, min_lock_field_len)
}
