// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use stake_escrow_core::ledger::TransactionInfo;
use stake_escrow_core::stake::StakingCertificate;

use crate::check;

/// Checks that a presented certificate may be used by `tx`.
///
/// The certificate's bound output must be consumed by the transaction, so
/// that it can't be presented again, and the whole validity range of the
/// transaction must lie no later than the certificate's expiry.
#[must_use]
pub fn verify_certificate(
    cert: &StakingCertificate,
    tx: &TransactionInfo,
) -> bool {
    check(tx.spends(&cert.cert_utxo), "certificate output not consumed")
        && check(
            tx.validity.is_before(cert.expires_in),
            "certificate expired",
        )
}
