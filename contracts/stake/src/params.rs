// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Deployment-time parameters of a validator instance.
//!
//! The parameters are fixed when the validator is deployed and never change
//! afterwards. They can be given programmatically or loaded from a TOML file
//! of the form:
//!
//! ```toml
//! operator_key = "<32 bytes, hex>"
//!
//! [penalty_address]
//! script = "<28 bytes, hex>"
//! ```

use std::path::Path;
use std::{fs, io};

use serde::{Deserialize, Serialize};
use stake_escrow_core::ledger::Address;
use stake_escrow_core::signatures::OperatorPublicKey;

/// Errors loading [`ValidatorParams`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO Errors
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
    /// The configuration is not valid TOML, or misses fields
    #[error("Parse Error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The operator key is not a valid Ed25519 key
    #[error("Invalid operator key")]
    InvalidOperatorKey,
}

/// The parameters a validator instance is deployed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorParams {
    /// Key of the operator whose certificates the validator trusts.
    pub operator_key: OperatorPublicKey,
    /// Where the shortfall of an under-certified withdrawal must be paid.
    pub penalty_address: Address,
}

impl ValidatorParams {
    /// Create new parameters.
    #[must_use]
    pub fn new(
        operator_key: OperatorPublicKey,
        penalty_address: Address,
    ) -> Self {
        Self {
            operator_key,
            penalty_address,
        }
    }

    /// Parse parameters from a TOML string.
    ///
    /// # Errors
    /// If the string doesn't parse or the operator key is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(toml)?;
        if !params.operator_key.is_valid() {
            return Err(ConfigError::InvalidOperatorKey);
        }
        Ok(params)
    }

    /// Load parameters from the TOML file at `path`.
    ///
    /// # Errors
    /// If the file can't be read, doesn't parse, or the operator key is
    /// malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let toml = fs::read_to_string(path)?;
        Self::from_toml_str(&toml)
    }
}
