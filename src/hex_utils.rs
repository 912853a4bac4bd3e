// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Hex parsing and formatting helpers
//!
//! Identities and test fixtures are exchanged as hex strings; this
//! module keeps the fixed-size decoding and the serde glue in one
//! place.

use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

/// Errors raised while decoding hex strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Decode a hex string into a fixed-size byte array.
pub fn decode_fixed<const N: usize>(hex_str: &str) -> Result<[u8; N], HexError> {
    let bytes = hex::decode(hex_str).map_err(|e| HexError::InvalidHex(e.to_string()))?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| HexError::InvalidLength {
        expected: N,
        actual,
    })
}

/// Serde helpers that render fixed byte arrays as hex strings
pub mod serde_hex {
    use super::*;

    pub fn serialize<S, const N: usize>(bytes: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        decode_fixed::<N>(&hex_str).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_fixed_round_trip() {
        let bytes: [u8; 4] = decode_fixed("deadbeef").unwrap();
        assert_eq!(bytes, [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex::encode(bytes), "deadbeef");
    }

    #[test]
    fn decode_fixed_rejects_wrong_length() {
        let err = decode_fixed::<4>("deadbe").unwrap_err();
        assert_eq!(
            err,
            HexError::InvalidLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn decode_fixed_rejects_bad_digits() {
        assert!(matches!(
            decode_fixed::<2>("zzzz"),
            Err(HexError::InvalidHex(_))
        ));
    }
}
