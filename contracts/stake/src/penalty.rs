// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use stake_escrow_core::ledger::{Address, Output, TokenId};

use crate::check;

/// Checks that a withdrawal routes its shortfall to the penalty address.
///
/// When the certificate entitles the provider to less than they deposited,
/// some output must pay at least the difference, in the staked `token`, to
/// `penalty_address`. Paying more is allowed.
///
/// When the entitlement matches the deposit no penalty is owed and the
/// outputs are not inspected. An entitlement above the deposit makes the
/// required payment non-positive, so any output paying the penalty address
/// a positive amount satisfies the rule.
#[must_use]
pub fn check_penalty(
    outputs: &[Output],
    input_qty: u64,
    cert_qty: u64,
    token: &TokenId,
    penalty_address: &Address,
) -> bool {
    if input_qty == cert_qty {
        return true;
    }

    let shortfall = i128::from(input_qty) - i128::from(cert_qty);

    let paid = outputs
        .iter()
        .filter(|output| &output.address == penalty_address)
        .map(|output| output.value.quantity_of(token))
        .any(|paid| paid > 0 && i128::from(paid) >= shortfall);

    check(paid, "penalty not paid")
}
