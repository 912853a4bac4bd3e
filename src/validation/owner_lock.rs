// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Owner-lock presence check
//!
//! An owner-lock identity carries no signature at all. It is satisfied
//! when some input of the transaction is guarded by a lock script whose
//! hash starts with the identity's 20 bytes; that input's own
//! verification then vouches for the authorization.

use crate::host::{HostError, TransactionSource};

/// Scan every input's lock-script hash for a 20-byte prefix match.
///
/// Enumeration stops at the first match or at the end of the input
/// list. Host failures mid-scan are treated as absence rather than
/// surfaced, so a damaged input can never satisfy the check.
pub fn is_lock_hash_present<H: TransactionSource>(host: &H, target: &[u8; 20]) -> bool {
    let mut index = 0;
    loop {
        match host.load_input_lock_hash(index) {
            Ok(lock_hash) => {
                if lock_hash[..20] == target[..] {
                    return true;
                }
                index += 1;
            }
            Err(HostError::IndexOutOfBound) => return false,
            Err(_) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::host::MemoryTransaction;

    use super::*;

    fn prefix(hash: &[u8; 32]) -> [u8; 20] {
        let mut target = [0u8; 20];
        target.copy_from_slice(&hash[..20]);
        target
    }

    #[test]
    fn finds_a_matching_input_at_a_later_index() {
        let wanted = [0xaa; 32];
        let tx = MemoryTransaction::new([0; 32])
            .with_input([0x11; 32], vec![], true)
            .with_input([0x22; 32], vec![], false)
            .with_input(wanted, vec![], false);
        assert!(is_lock_hash_present(&tx, &prefix(&wanted)));
    }

    #[test]
    fn absent_hash_is_not_found() {
        let tx = MemoryTransaction::new([0; 32])
            .with_input([0x11; 32], vec![], true)
            .with_input([0x22; 32], vec![], false);
        assert!(!is_lock_hash_present(&tx, &[0xee; 20]));
    }

    #[test]
    fn empty_transaction_has_no_match() {
        let tx = MemoryTransaction::new([0; 32]);
        assert!(!is_lock_hash_present(&tx, &[0u8; 20]));
    }

    #[test]
    fn only_the_20_byte_prefix_matters() {
        let mut hash = [0xaa; 32];
        hash[31] = 0x00;
        let tx = MemoryTransaction::new([0; 32]).with_input(hash, vec![], true);
        let mut other = hash;
        other[31] = 0xff;
        assert!(is_lock_hash_present(&tx, &prefix(&other)));
    }
}
