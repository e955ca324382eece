// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

/// A point in time, in POSIX milliseconds.
pub type Timestamp = u64;

/// The time window within which a transaction may be included in the ledger.
///
/// Both bounds are inclusive, and a missing bound leaves that side of the
/// range open. Since a validator has no access to a clock, the validity
/// range is its only notion of "now": a condition on the current time holds
/// only if it holds for every instant of the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValidityRange {
    /// First instant at which the transaction is valid.
    pub lower: Option<Timestamp>,
    /// Last instant at which the transaction is valid.
    pub upper: Option<Timestamp>,
}

impl ValidityRange {
    /// The range of all instants from `lower` onward.
    #[must_use]
    pub const fn since(lower: Timestamp) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// The range of all instants up to `upper`.
    #[must_use]
    pub const fn until(upper: Timestamp) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// The range of all instants from `lower` to `upper`.
    #[must_use]
    pub const fn between(lower: Timestamp, upper: Timestamp) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Returns true if the whole range lies no later than `instant`.
    ///
    /// An open upper bound is never before anything.
    #[must_use]
    pub fn is_before(&self, instant: Timestamp) -> bool {
        self.upper.is_some_and(|upper| upper <= instant)
    }

    /// Returns true if the whole range lies strictly after `instant`.
    ///
    /// An open lower bound is never after anything.
    #[must_use]
    pub fn is_after(&self, instant: Timestamp) -> bool {
        self.lower.is_some_and(|lower| lower > instant)
    }
}
