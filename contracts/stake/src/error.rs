// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use stake_escrow_core::Error as CoreError;

/// Structural violations aborting validation outright.
///
/// A transaction failing any of these is rejected regardless of the action
/// it requests. Predicate violations are not errors: they make the
/// validator evaluate to `false` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The staking party did not sign the transaction
    #[error("Transaction not signed by the stake provider")]
    NotSignedByProvider,
    /// The output being validated is not among the transaction inputs
    #[error("Own input not found")]
    OwnInputNotFound,
    /// More than one escrow output is being consumed
    #[error("Expected exactly one escrow input, found {0}")]
    EscrowInputCount(usize),
    /// The operator's signature doesn't verify
    #[error("Invalid operator signature")]
    InvalidOperatorSignature,
    /// No escrow output carries a datum with the signed hash
    #[error("Certificate datum not found")]
    CertificateNotFound,
    /// The signed datum carries no certificate
    #[error("Signed datum carries no certificate")]
    MissingCertificate,
    /// A transition needs exactly one continuing escrow output
    #[error("Expected exactly one continuing escrow output, found {0}")]
    ContinuingOutputCount(usize),
    /// The continuing escrow output has no witnessed datum
    #[error("Continuing output datum not found")]
    MissingOutputDatum,
    /// The certificate doesn't fix the lock of the resulting escrow output
    #[error("Certificate carries no lock for the escrow output")]
    MissingLockUntil,
    /// A datum couldn't be decoded
    #[error("Decoding Error: {0}")]
    Decoding(CoreError),
    /// The transaction doesn't satisfy the requested transition
    #[error("Transaction rejected")]
    Rejected,
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Self::Decoding(err)
    }
}
