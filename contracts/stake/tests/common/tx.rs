// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use stake_escrow_core::ledger::{
    Address, Input, KeyHash, Output, OutputRef, ScriptContext,
    TransactionInfo, ValidityRange, Value,
};
use stake_escrow_core::stake::StakeDatum;

use super::init::{Staking, CERT_UTXO, ESCROW, STAKE_UTXO};

/// Assembles the transaction spending the escrow output.
pub struct TxBuilder {
    tx: TransactionInfo,
}

impl TxBuilder {
    /// A transaction signed by the provider, consuming the escrow output
    /// holding `staked` units together with the certificate's bound output.
    pub fn spending(staking: &Staking, staked: u64) -> Self {
        let escrow = Input {
            out_ref: STAKE_UTXO,
            output: Output::new(ESCROW, staking.stake(staked)),
        };
        let cert = Input {
            out_ref: CERT_UTXO,
            output: Output::new(Address::Key(staking.provider), Value::new()),
        };

        Self {
            tx: TransactionInfo {
                inputs: vec![escrow, cert],
                signatories: vec![staking.provider],
                ..TransactionInfo::default()
            },
        }
    }

    pub fn valid(mut self, validity: ValidityRange) -> Self {
        self.tx.validity = validity;
        self
    }

    /// Returns `value` to the escrow, with `datum` attached and witnessed.
    pub fn escrow_output(mut self, value: Value, datum: &StakeDatum) -> Self {
        let hash = datum.hash();
        self.tx.datums.insert(hash, datum.to_var_bytes());
        self.tx
            .outputs
            .push(Output::new(ESCROW, value).with_datum_hash(hash));
        self
    }

    pub fn output(mut self, output: Output) -> Self {
        self.tx.outputs.push(output);
        self
    }

    pub fn input(mut self, input: Input) -> Self {
        self.tx.inputs.push(input);
        self
    }

    pub fn without_input(mut self, out_ref: &OutputRef) -> Self {
        self.tx.inputs.retain(|input| &input.out_ref != out_ref);
        self
    }

    pub fn signed_by(mut self, signatories: Vec<KeyHash>) -> Self {
        self.tx.signatories = signatories;
        self
    }

    /// Forgets the witness of every datum, keeping the hashes on outputs.
    pub fn without_datums(mut self) -> Self {
        self.tx.datums.clear();
        self
    }

    pub fn build(self) -> ScriptContext {
        ScriptContext {
            tx: self.tx,
            spending: STAKE_UTXO,
        }
    }
}
