// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use stake_escrow_core::hash::Hash;
use stake_escrow_core::ledger::{
    Address, Input, Output, ScriptContext, TransactionInfo,
};
use stake_escrow_core::signatures::OperatorPublicKey;
use stake_escrow_core::stake::{
    StakeDatum, StakeState, StakingCertificate, StakingRedeemer,
};
use tracing::{debug, warn};

use crate::{
    check, check_penalty, verify_certificate, Error, Result, ValidatorParams,
};

/// Validates the lifecycle of a stake escrow.
///
/// Given the datum of the escrow output being spent, the requested action
/// and the transaction spending it, the validator decides whether the
/// transaction is a legal transition:
///
/// - `Retire` moves an `Active` stake whose lock has elapsed into
///   `Retiring`, preserving its value.
/// - `Resize` increases an `Active` stake to exactly the certified value.
/// - `Withdraw` releases a `Retiring` stake once its cool-down has elapsed,
///   routing any uncertified part of the deposit to the penalty address.
///
/// Every action must be signed by the staking party and carry a certificate
/// signed by the operator, presented in the datum of an output returning to
/// the escrow.
#[derive(Debug, Clone)]
pub struct StakingValidator {
    params: ValidatorParams,
}

impl StakingValidator {
    /// Create a validator deployed with the given parameters.
    #[must_use]
    pub fn new(params: ValidatorParams) -> Self {
        Self { params }
    }

    /// The parameters the validator was deployed with.
    #[must_use]
    pub fn params(&self) -> &ValidatorParams {
        &self.params
    }

    /// Decides whether the transaction in `ctx` may spend the escrow output
    /// carrying `datum` with the given `redeemer`.
    ///
    /// Returns `Ok(true)` if the transition is legal and `Ok(false)` if any
    /// of its clauses doesn't hold.
    ///
    /// # Errors
    /// When the transaction is structurally unfit for any transition: not
    /// signed by the provider, consuming no or several escrow outputs, not
    /// authorized by the operator, missing the certificate, or carrying
    /// the wrong number of continuing outputs.
    pub fn validate(
        &self,
        datum: &StakeDatum,
        redeemer: &StakingRedeemer,
        ctx: &ScriptContext,
    ) -> Result<bool> {
        let _span =
            tracing::debug_span!("staking", action = redeemer.action())
                .entered();

        let result = self.evaluate(datum, redeemer, ctx);

        match &result {
            Ok(accepted) => debug!(event = "validated", accepted),
            Err(err) => warn!(event = "aborted", %err),
        }

        result
    }

    /// Like [`StakingValidator::validate`], but rejecting transactions that
    /// fail a clause with [`Error::Rejected`].
    ///
    /// # Errors
    /// When the transaction is not a legal transition, for any reason.
    pub fn ensure_valid(
        &self,
        datum: &StakeDatum,
        redeemer: &StakingRedeemer,
        ctx: &ScriptContext,
    ) -> Result<()> {
        if self.validate(datum, redeemer, ctx)? {
            Ok(())
        } else {
            Err(Error::Rejected)
        }
    }

    fn evaluate(
        &self,
        datum: &StakeDatum,
        redeemer: &StakingRedeemer,
        ctx: &ScriptContext,
    ) -> Result<bool> {
        let tx = &ctx.tx;

        if !tx.is_signed_by(&datum.provider_key) {
            return Err(Error::NotSignedByProvider);
        }

        let own_input = ctx.own_input().ok_or(Error::OwnInputNotFound)?;
        let escrow = own_input.output.address;

        let escrow_inputs = tx.inputs_at(&escrow).len();
        if escrow_inputs != 1 {
            return Err(Error::EscrowInputCount(escrow_inputs));
        }

        if !self
            .params
            .operator_key
            .verify(redeemer.message(), redeemer.signature())
        {
            return Err(Error::InvalidOperatorSignature);
        }

        let continuing = tx.outputs_at(&escrow);
        let cert = signed_certificate(tx, &continuing, redeemer.message())?;

        if !verify_certificate(&cert, tx) {
            return Ok(false);
        }

        let transition = Transition {
            datum,
            own_input,
            continuing,
            cert,
            tx,
        };

        match redeemer {
            StakingRedeemer::Retire { message, .. } => {
                transition.retire(message)
            }
            StakingRedeemer::Withdraw { .. } => {
                Ok(transition.withdraw(&self.params.penalty_address))
            }
            StakingRedeemer::Resize { message, .. } => {
                transition.resize(message)
            }
        }
    }
}

/// Validates a stake escrow transition for a validator deployed with the
/// given `operator_key` and `penalty_address`.
///
/// See [`StakingValidator::validate`].
///
/// # Errors
/// When the transaction is structurally unfit for any transition.
pub fn validate_staking(
    operator_key: &OperatorPublicKey,
    penalty_address: &Address,
    datum: &StakeDatum,
    redeemer: &StakingRedeemer,
    ctx: &ScriptContext,
) -> Result<bool> {
    let params = ValidatorParams::new(*operator_key, *penalty_address);
    StakingValidator::new(params).validate(datum, redeemer, ctx)
}

/// Recovers the certificate from the datum with the signed hash, which must
/// be attached to one of the outputs returning to the escrow.
fn signed_certificate(
    tx: &TransactionInfo,
    continuing: &[&Output],
    message: &Hash,
) -> Result<StakingCertificate> {
    let bytes = tx
        .find_datum(continuing, message)
        .ok_or(Error::CertificateNotFound)?;
    let datum = StakeDatum::from_slice(bytes)?;
    datum.cert.ok_or(Error::MissingCertificate)
}

/// Everything a transition rule inspects, once the request has been
/// authenticated and the certificate verified.
struct Transition<'a> {
    datum: &'a StakeDatum,
    own_input: &'a Input,
    continuing: Vec<&'a Output>,
    cert: StakingCertificate,
    tx: &'a TransactionInfo,
}

impl Transition<'_> {
    /// Active to Retiring, once the lock has elapsed.
    fn retire(&self, message: &Hash) -> Result<bool> {
        let (output, new_datum) = self.continuing_output()?;
        let lock_until = self
            .cert
            .stk_utxo_lock_until
            .ok_or(Error::MissingLockUntil)?;

        let staked = self.input_quantity();
        let kept = output.value.quantity_of(&self.datum.token);

        Ok(check(kept == staked, "stake value not preserved")
            && check(
                self.tx.validity.is_after(self.datum.locked_until),
                "stake still locked",
            )
            && check(
                output.datum_hash.as_ref() == Some(message),
                "continuing datum not signed",
            )
            && check(
                lock_until == new_datum.locked_until,
                "lock differs from certificate",
            )
            && self.keeps_identity(&new_datum)
            && check(self.datum.state == StakeState::Active, "stake not active")
            && check(
                new_datum.state == StakeState::Retiring,
                "stake not retiring",
            ))
    }

    /// Retiring to released, once the cool-down has elapsed.
    fn withdraw(&self, penalty_address: &Address) -> bool {
        let staked = self.input_quantity();
        let certified = self.cert.quantity_of(&self.datum.token);

        check(
            self.datum.state == StakeState::Retiring,
            "stake not retiring",
        ) && check(
            self.tx.validity.is_after(self.datum.locked_until),
            "stake still cooling down",
        ) && check_penalty(
            &self.tx.outputs,
            staked,
            certified,
            &self.datum.token,
            penalty_address,
        )
    }

    /// Active to Active, increasing the stake to the certified value.
    fn resize(&self, message: &Hash) -> Result<bool> {
        let (output, new_datum) = self.continuing_output()?;
        let lock_until = self
            .cert
            .stk_utxo_lock_until
            .ok_or(Error::MissingLockUntil)?;

        let staked = self.input_quantity();
        let resized = output.value.quantity_of(&self.datum.token);
        let certified = self.cert.quantity_of(&self.datum.token);

        Ok(check(resized > staked, "stake not increased")
            && check(resized == certified, "stake differs from certificate")
            && check(
                output.datum_hash.as_ref() == Some(message),
                "continuing datum not signed",
            )
            && check(
                lock_until == new_datum.locked_until,
                "lock differs from certificate",
            )
            && self.keeps_identity(&new_datum)
            && check(self.datum.state == StakeState::Active, "stake not active")
            && check(
                new_datum.state == StakeState::Active,
                "resized stake not active",
            ))
    }

    /// The single output returning to the escrow, with its decoded datum.
    fn continuing_output(&self) -> Result<(&Output, StakeDatum)> {
        let [output] = self.continuing.as_slice() else {
            return Err(Error::ContinuingOutputCount(self.continuing.len()));
        };

        let output = *output;
        let bytes = self.tx.datum_of(output).ok_or(Error::MissingOutputDatum)?;
        let datum = StakeDatum::from_slice(bytes)?;

        Ok((output, datum))
    }

    fn input_quantity(&self) -> u64 {
        self.own_input.output.value.quantity_of(&self.datum.token)
    }

    fn keeps_identity(&self, new_datum: &StakeDatum) -> bool {
        check(
            new_datum.provider_key == self.datum.provider_key,
            "provider changed",
        ) && check(new_datum.token == self.datum.token, "token changed")
    }
}
