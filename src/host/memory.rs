// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! In-memory transaction source
//!
//! Backs the [`TransactionSource`] trait with plain vectors. Used by
//! the test suite, and by the signing side of the protocol: because the
//! digest zeroes the witness lock field before hashing, an author can
//! build the transaction with a placeholder lock field, compute the
//! signing message here, and splice the signature in afterwards without
//! changing the message.

use super::{HostError, TransactionSource, WitnessSource};

/// A transaction held fully in memory.
///
/// Inputs must be added before extra witnesses, since input `i` owns
/// witness `i`.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransaction {
    tx_hash: [u8; 32],
    witnesses: Vec<Vec<u8>>,
    group_indices: Vec<usize>,
    input_lock_hashes: Vec<[u8; 32]>,
}

impl MemoryTransaction {
    /// Create an empty transaction with the given hash.
    pub fn new(tx_hash: [u8; 32]) -> Self {
        Self {
            tx_hash,
            ..Self::default()
        }
    }

    /// Append an input cell together with its witness. `in_group`
    /// marks the input as belonging to the script group under
    /// verification.
    pub fn with_input(mut self, lock_hash: [u8; 32], witness: Vec<u8>, in_group: bool) -> Self {
        debug_assert_eq!(
            self.witnesses.len(),
            self.input_lock_hashes.len(),
            "inputs must be added before extra witnesses"
        );
        let index = self.witnesses.len();
        self.input_lock_hashes.push(lock_hash);
        self.witnesses.push(witness);
        if in_group {
            self.group_indices.push(index);
        }
        self
    }

    /// Append a witness past the input count.
    pub fn with_extra_witness(mut self, witness: Vec<u8>) -> Self {
        self.witnesses.push(witness);
        self
    }

    /// Mutable access to the witness of the group input at
    /// `group_index`, for splicing a signature into a placeholder lock
    /// field.
    pub fn group_witness_mut(&mut self, group_index: usize) -> Option<&mut Vec<u8>> {
        let index = *self.group_indices.get(group_index)?;
        self.witnesses.get_mut(index)
    }
}

impl TransactionSource for MemoryTransaction {
    fn load_witness(
        &self,
        buf: &mut [u8],
        offset: usize,
        index: usize,
        source: WitnessSource,
    ) -> Result<usize, HostError> {
        let witness = match source {
            WitnessSource::GroupInput => {
                let absolute = *self
                    .group_indices
                    .get(index)
                    .ok_or(HostError::IndexOutOfBound)?;
                &self.witnesses[absolute]
            }
            WitnessSource::Input => self
                .witnesses
                .get(index)
                .ok_or(HostError::IndexOutOfBound)?,
        };
        let available = witness.len().saturating_sub(offset);
        let copied = available.min(buf.len());
        buf[..copied].copy_from_slice(&witness[offset..offset + copied]);
        Ok(available)
    }

    fn load_tx_hash(&self) -> Result<[u8; 32], HostError> {
        Ok(self.tx_hash)
    }

    fn load_input_lock_hash(&self, index: usize) -> Result<[u8; 32], HostError> {
        self.input_lock_hashes
            .get(index)
            .copied()
            .ok_or(HostError::IndexOutOfBound)
    }

    fn input_count(&self) -> Result<usize, HostError> {
        Ok(self.input_lock_hashes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_reads_report_total_available() {
        let tx =
            MemoryTransaction::new([0u8; 32]).with_input([1u8; 32], (0u8..100).collect(), true);

        let mut buf = [0u8; 16];
        let available = tx
            .load_witness(&mut buf, 0, 0, WitnessSource::GroupInput)
            .unwrap();
        assert_eq!(available, 100);
        assert_eq!(&buf[..4], &[0, 1, 2, 3]);

        let available = tx
            .load_witness(&mut buf, 96, 0, WitnessSource::GroupInput)
            .unwrap();
        assert_eq!(available, 4);
        assert_eq!(&buf[..4], &[96, 97, 98, 99]);
    }

    #[test]
    fn group_indexing_skips_foreign_inputs() {
        let tx = MemoryTransaction::new([0u8; 32])
            .with_input([1u8; 32], vec![0xaa], false)
            .with_input([2u8; 32], vec![0xbb], true);

        let mut buf = [0u8; 4];
        tx.load_witness(&mut buf, 0, 0, WitnessSource::GroupInput)
            .unwrap();
        assert_eq!(buf[0], 0xbb);

        assert_eq!(
            tx.load_witness(&mut buf, 0, 1, WitnessSource::GroupInput),
            Err(HostError::IndexOutOfBound)
        );
    }

    #[test]
    fn extra_witnesses_live_past_the_input_count() {
        let tx = MemoryTransaction::new([0u8; 32])
            .with_input([1u8; 32], vec![0xaa], true)
            .with_extra_witness(vec![0xcc]);

        assert_eq!(tx.input_count().unwrap(), 1);
        let mut buf = [0u8; 4];
        let available = tx.load_witness(&mut buf, 0, 1, WitnessSource::Input).unwrap();
        assert_eq!(available, 1);
        assert_eq!(buf[0], 0xcc);
    }
}
