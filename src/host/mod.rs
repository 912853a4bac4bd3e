// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Host interface consumed by the verification core
//!
//! The virtual machine exposes the transaction through a small set of
//! blocking syscalls; this module models them as a trait so the core
//! can run against the real VM shim or an in-memory transaction. Every
//! call is synchronous; the surrounding VM enforces an instruction
//! budget, not wall-clock time, and offers no concurrency primitives.

use thiserror::Error;

pub mod memory;

pub use memory::MemoryTransaction;

/// Which witness sequence an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessSource {
    /// Witnesses of the inputs this lock script instance is validating.
    GroupInput,
    /// Witnesses of the whole transaction, including any attached past
    /// the input count.
    Input,
}

/// Failures reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError {
    /// The requested index is past the end of the enumerated sequence.
    /// This is the designated loop terminator, never a verification
    /// failure.
    #[error("index out of bound")]
    IndexOutOfBound,

    /// Any other host failure, carrying the platform's error code.
    #[error("host platform error {0}")]
    Platform(i64),
}

impl HostError {
    /// The platform-level error code.
    pub fn code(self) -> i64 {
        match self {
            HostError::IndexOutOfBound => 1,
            HostError::Platform(code) => code,
        }
    }
}

/// Read access to the transaction under verification.
///
/// `load_witness` follows the host's partial-read convention: the
/// buffer receives at most `buf.len()` bytes starting at `offset`, and
/// the returned value is the total number of bytes available from
/// `offset`, which may exceed the buffer. Callers must clamp the
/// returned length to the buffer's capacity before touching the bytes.
pub trait TransactionSource {
    /// Read witness bytes at `offset` for the witness at `index` in
    /// `source`, returning the total bytes available from `offset`.
    fn load_witness(
        &self,
        buf: &mut [u8],
        offset: usize,
        index: usize,
        source: WitnessSource,
    ) -> Result<usize, HostError>;

    /// The 32-byte hash of the transaction under verification.
    fn load_tx_hash(&self) -> Result<[u8; 32], HostError>;

    /// The lock-script hash of the input cell at `index`.
    fn load_input_lock_hash(&self, index: usize) -> Result<[u8; 32], HostError>;

    /// The number of transaction inputs; witnesses at indices at or
    /// beyond this count are "extra" witnesses.
    fn input_count(&self) -> Result<usize, HostError>;
}
