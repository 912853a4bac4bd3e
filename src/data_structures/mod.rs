// Copyright 2025 The Identity Lock Project
// SPDX-License-Identifier: MIT

//! Core data types for identity lock verification

pub mod identity;

pub use identity::{Identity, IdentityFlag, IDENTITY_LEN};
