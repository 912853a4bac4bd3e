// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Error types for identity lock verification
//!
//! Every component returns its first error unmodified to its caller;
//! there is no local recovery and no retrying, since encoding and
//! cryptographic failures are unrecoverable within a single
//! verification attempt. "Index out of bound" from the host is not an
//! error anywhere in this crate: it is the designated termination
//! signal for witness and cell enumeration.

use thiserror::Error;

/// Main error type for identity lock verification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The witness lock field is shorter than the signature material the
    /// active scheme requires.
    #[error("lock field too short: need at least {required} bytes, witness declares {actual}")]
    ArgumentLength { required: usize, actual: usize },

    /// The first group witness does not carry a well-formed lock-field
    /// header.
    #[error("malformed witness: {0}")]
    Encoding(&'static str),

    /// A host call failed for a reason other than end-of-range.
    #[error("host call failed with code {0}")]
    HostIo(i64),

    /// The signature material could not be parsed into the scheme's
    /// signature type.
    #[error("signature material could not be parsed")]
    SignatureParse,

    /// No public key could be recovered from the recoverable signature
    /// and the signing message.
    #[error("public key recovery failed")]
    KeyRecoveryFailed,

    /// The pairing equation did not hold for the supplied public key,
    /// signature, and signing message.
    #[error("pairing verification failed")]
    PairingVerifyFailed,

    /// The verified public key does not hash to the declared identity.
    #[error("public key does not hash to the declared identity")]
    PubkeyHashMismatch,

    /// The owner-lock scan exhausted every input cell without a match.
    #[error("no input cell carries the declared lock hash")]
    IdentityNotFound,

    /// The identity record carries a flag byte this crate does not know.
    #[error("unknown identity flag {0}")]
    InvalidIdentityFlag(u8),
}

impl IdentityError {
    /// The script-level exit code surfaced to the host.
    ///
    /// These values are an external contract shared with other
    /// implementations of the scheme and must stay stable. Any non-zero
    /// code causes the enclosing transaction to be rejected.
    pub fn exit_code(&self) -> i8 {
        match self {
            IdentityError::ArgumentLength { .. } => -1,
            IdentityError::Encoding(_) => -2,
            IdentityError::HostIo(_) => -3,
            IdentityError::KeyRecoveryFailed => -11,
            IdentityError::SignatureParse => -14,
            IdentityError::PubkeyHashMismatch => -31,
            IdentityError::IdentityNotFound => 70,
            IdentityError::PairingVerifyFailed => 72,
            IdentityError::InvalidIdentityFlag(_) => 73,
        }
    }
}

/// Result type for identity lock verification
pub type IdentityResult<T> = Result<T, IdentityError>;

impl From<crate::host::HostError> for IdentityError {
    fn from(err: crate::host::HostError) -> Self {
        IdentityError::HostIo(err.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(
            IdentityError::ArgumentLength {
                required: 65,
                actual: 0
            }
            .exit_code(),
            -1
        );
        assert_eq!(IdentityError::Encoding("short").exit_code(), -2);
        assert_eq!(IdentityError::HostIo(2).exit_code(), -3);
        assert_eq!(IdentityError::KeyRecoveryFailed.exit_code(), -11);
        assert_eq!(IdentityError::SignatureParse.exit_code(), -14);
        assert_eq!(IdentityError::PubkeyHashMismatch.exit_code(), -31);
        assert_eq!(IdentityError::IdentityNotFound.exit_code(), 70);
        assert_eq!(IdentityError::PairingVerifyFailed.exit_code(), 72);
        assert_eq!(IdentityError::InvalidIdentityFlag(9).exit_code(), 73);
    }

    #[test]
    fn display_names_the_failure() {
        let err = IdentityError::ArgumentLength {
            required: 144,
            actual: 65,
        };
        assert_eq!(
            err.to_string(),
            "lock field too short: need at least 144 bytes, witness declares 65"
        );
    }
}
