// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::StdRng;
use rand::RngCore;
use stake_escrow_core::hash::Hash;
use stake_escrow_core::ledger::{
    Address, AssetName, KeyHash, OutputRef, PolicyId, ScriptHash, Timestamp,
    TokenId, Value,
};
use stake_escrow_core::signatures::{OperatorPublicKey, OperatorSignature};
use stake_escrow_core::stake::{
    StakeDatum, StakeState, StakingCertificate, StakingRedeemer,
};
use stake_escrow_validator::{StakingValidator, ValidatorParams};

pub const ESCROW: Address = Address::Script(ScriptHash([0xe5; 28]));
pub const PENALTY: Address = Address::Script(ScriptHash([0x9e; 28]));

pub const STAKE_UTXO: OutputRef = OutputRef::new([0x51; 32], 0);
pub const CERT_UTXO: OutputRef = OutputRef::new([0xce; 32], 0);

/// The parties of a stake escrow and the validator guarding it.
pub struct Staking {
    pub operator: SigningKey,
    pub provider: KeyHash,
    pub token: TokenId,
    pub validator: StakingValidator,
}

impl Staking {
    pub fn new(rng: &mut StdRng) -> Self {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        let operator = SigningKey::from_bytes(&seed);

        let mut provider = [0u8; 28];
        rng.fill_bytes(&mut provider);

        let token = TokenId::new(
            PolicyId([0x11; 28]),
            AssetName::new(*b"STAKE").expect("asset name should be valid"),
        );

        let params = ValidatorParams::new(
            OperatorPublicKey::from(operator.verifying_key()),
            PENALTY,
        );

        Self {
            operator,
            provider: KeyHash(provider),
            token,
            validator: StakingValidator::new(params),
        }
    }

    pub fn datum(
        &self,
        state: StakeState,
        locked_until: Timestamp,
    ) -> StakeDatum {
        StakeDatum {
            provider_key: self.provider,
            token: self.token.clone(),
            locked_until,
            state,
            cert: None,
        }
    }

    pub fn cert(
        &self,
        expires_in: Timestamp,
        stk_utxo_lock_until: Option<Timestamp>,
        quantity: u64,
    ) -> StakingCertificate {
        StakingCertificate {
            cert_utxo: CERT_UTXO,
            expires_in,
            stk_utxo_lock_until,
            value: self.stake(quantity),
        }
    }

    pub fn stake(&self, quantity: u64) -> Value {
        Value::single(self.token.clone(), quantity)
    }

    /// Signs the hash of `datum` the way the operator issues certificates.
    pub fn sign(&self, datum: &StakeDatum) -> (Hash, OperatorSignature) {
        let message = datum.hash();
        let signature = self.operator.sign(&message);
        (message, signature.into())
    }

    pub fn retire(&self, datum: &StakeDatum) -> StakingRedeemer {
        let (message, signature) = self.sign(datum);
        StakingRedeemer::Retire { message, signature }
    }

    pub fn withdraw(&self, datum: &StakeDatum) -> StakingRedeemer {
        let (message, signature) = self.sign(datum);
        StakingRedeemer::Withdraw { message, signature }
    }

    pub fn resize(&self, datum: &StakeDatum) -> StakingRedeemer {
        let (message, signature) = self.sign(datum);
        StakingRedeemer::Resize { message, signature }
    }
}

/// Routes validator logs to the test output, filtered by `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
