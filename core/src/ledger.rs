// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The ledger as seen by a validator: the consumed inputs, the produced
//! outputs and the metadata of a single proposed transaction.
//!
//! Every query is a read-only inspection of the one transaction being
//! validated. Nothing here consults a clock or any state outside of the
//! transaction itself.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use dusk_bytes::{Error as BytesError, Serializable};

use crate::hash::{Hash, HASH_SIZE};
use crate::read_arr;

mod interval;
mod value;

pub use interval::{Timestamp, ValidityRange};
pub use value::{AssetName, PolicyId, TokenId, Value, MAX_ASSET_NAME_LEN};

/// Size in bytes of key, script and policy hashes.
pub const CREDENTIAL_HASH_SIZE: usize = 28;

/// Hash of a verification key, identifying a party able to sign
/// transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyHash(
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::hex::Hex>")
    )]
    pub [u8; CREDENTIAL_HASH_SIZE],
);

/// Hash of a validator script, identifying the address it guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptHash(
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::hex::Hex>")
    )]
    pub [u8; CREDENTIAL_HASH_SIZE],
);

impl Serializable<CREDENTIAL_HASH_SIZE> for KeyHash {
    type Error = BytesError;

    fn from_bytes(buf: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        Ok(Self(*buf))
    }

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.0
    }
}

/// The payment credential an output is locked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Address {
    /// Spendable by whoever can sign for the key hash.
    Key(KeyHash),
    /// Spendable when the script with the given hash accepts the
    /// transaction.
    Script(ScriptHash),
}

/// A reference to an output produced by a prior transaction.
///
/// An output reference can only ever be consumed once, which makes it usable
/// as a one-time token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputRef {
    /// Id of the transaction that produced the output.
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::hex::Hex>")
    )]
    pub tx_id: Hash,
    /// Position of the output in the producing transaction.
    pub index: u32,
}

impl OutputRef {
    /// Create a new output reference.
    #[must_use]
    pub const fn new(tx_id: Hash, index: u32) -> Self {
        Self { tx_id, index }
    }
}

const OUTPUT_REF_SIZE: usize = HASH_SIZE + 4;

impl Serializable<OUTPUT_REF_SIZE> for OutputRef {
    type Error = BytesError;

    fn from_bytes(buf: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        let mut reader = &buf[..];
        let tx_id = read_arr::<HASH_SIZE>(&mut reader)?;
        let index = u32::from_le_bytes(read_arr::<4>(&mut reader)?);
        Ok(Self { tx_id, index })
    }

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[..HASH_SIZE].copy_from_slice(&self.tx_id);
        buf[HASH_SIZE..].copy_from_slice(&self.index.to_le_bytes());
        buf
    }
}

/// An output of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// The address the value is locked at.
    pub address: Address,
    /// The value carried by the output.
    pub value: Value,
    /// Hash of the datum attached to the output, if any.
    pub datum_hash: Option<Hash>,
}

impl Output {
    /// Create a new output with no datum attached.
    #[must_use]
    pub fn new(address: Address, value: Value) -> Self {
        Self {
            address,
            value,
            datum_hash: None,
        }
    }

    /// Attach the datum with the given hash to the output.
    #[must_use]
    pub fn with_datum_hash(mut self, datum_hash: Hash) -> Self {
        self.datum_hash = Some(datum_hash);
        self
    }
}

/// An output being consumed, together with its reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Reference of the consumed output.
    pub out_ref: OutputRef,
    /// The consumed output itself.
    pub output: Output,
}

/// The proposed transaction, as presented to a validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInfo {
    /// Outputs consumed by the transaction.
    pub inputs: Vec<Input>,
    /// Outputs produced by the transaction.
    pub outputs: Vec<Output>,
    /// The time window within which the transaction is valid.
    pub validity: ValidityRange,
    /// Hashes of the keys that signed the transaction.
    pub signatories: Vec<KeyHash>,
    /// Encoded datums witnessed by the transaction, indexed by their hash.
    pub datums: BTreeMap<Hash, Vec<u8>>,
}

impl TransactionInfo {
    /// Returns the inputs consuming outputs locked at the given `address`.
    #[must_use]
    pub fn inputs_at(&self, address: &Address) -> Vec<&Input> {
        self.inputs
            .iter()
            .filter(|input| &input.output.address == address)
            .collect()
    }

    /// Returns the outputs locked at the given `address`.
    #[must_use]
    pub fn outputs_at(&self, address: &Address) -> Vec<&Output> {
        self.outputs
            .iter()
            .filter(|output| &output.address == address)
            .collect()
    }

    /// Looks up the datum with the given `hash`, provided it is attached to
    /// one of the given `outputs`.
    ///
    /// Returns the encoded datum, or `None` if no output carries the hash or
    /// the transaction doesn't witness the datum.
    #[must_use]
    pub fn find_datum(
        &self,
        outputs: &[&Output],
        hash: &Hash,
    ) -> Option<&[u8]> {
        outputs
            .iter()
            .any(|output| output.datum_hash.as_ref() == Some(hash))
            .then(|| self.datums.get(hash))
            .flatten()
            .map(Vec::as_slice)
    }

    /// Returns the encoded datum attached to `output`, if the transaction
    /// witnesses it.
    #[must_use]
    pub fn datum_of(&self, output: &Output) -> Option<&[u8]> {
        output
            .datum_hash
            .as_ref()
            .and_then(|hash| self.datums.get(hash))
            .map(Vec::as_slice)
    }

    /// Returns true if the output with the given reference is consumed by
    /// the transaction.
    #[must_use]
    pub fn spends(&self, out_ref: &OutputRef) -> bool {
        self.inputs.iter().any(|input| &input.out_ref == out_ref)
    }

    /// Returns true if the key with the given hash signed the transaction.
    #[must_use]
    pub fn is_signed_by(&self, key: &KeyHash) -> bool {
        self.signatories.contains(key)
    }
}

/// The transaction together with the output the validator is invoked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptContext {
    /// The transaction being validated.
    pub tx: TransactionInfo,
    /// Reference of the output whose spending is being validated.
    pub spending: OutputRef,
}

impl ScriptContext {
    /// Returns the input consuming the output being validated.
    #[must_use]
    pub fn own_input(&self) -> Option<&Input> {
        self.tx
            .inputs
            .iter()
            .find(|input| input.out_ref == self.spending)
    }
}
