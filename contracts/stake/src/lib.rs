// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Validator deciding whether a transaction may move a stake escrow through
//! its lifecycle.
//!
//! An escrow starts `Active`. It may be resized upwards while active,
//! retired into a cool-down, and withdrawn once the cool-down has elapsed.
//! Every step must be signed by the staking party and authorized by a
//! single-use certificate signed by the operator.

#![deny(missing_docs)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod certificate;
mod error;
mod params;
mod penalty;
mod state;

pub use certificate::verify_certificate;
pub use error::Error;
pub use params::{ConfigError, ValidatorParams};
pub use penalty::check_penalty;
pub use state::{validate_staking, StakingValidator};

/// Result type of the validator.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Logs a failed clause of a predicate, returning the clause unchanged.
pub(crate) fn check(holds: bool, clause: &'static str) -> bool {
    if !holds {
        tracing::debug!(event = "clause_failed", clause);
    }
    holds
}
