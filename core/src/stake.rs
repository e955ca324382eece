// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Records persisted in, and presented to, a stake escrow.
//!
//! All records share one canonical encoding: fields in declaration order,
//! integers as fixed-width little-endian, optional fields preceded by a
//! presence tag. Decoding accepts exactly the bytes encoding produces, so
//! the hash of an encoded record identifies it.

use alloc::vec::Vec;

use dusk_bytes::{DeserializableSlice, Serializable};

use crate::hash::{self, Hash, HASH_SIZE};
use crate::ledger::{KeyHash, OutputRef, Timestamp, TokenId, Value};
use crate::signatures::{OperatorSignature, SIGNATURE_SIZE};
use crate::{
    read_arr, read_opt_u64, read_tag, write_opt_u64, Error, NONE_TAG, SOME_TAG,
};

/// The lifecycle state of an escrowed stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeState {
    /// The stake is locked and may be resized or retired.
    Active,
    /// The stake is cooling down and may only be withdrawn.
    Retiring,
}

impl StakeState {
    const ACTIVE_ID: u8 = 0x00;
    const RETIRING_ID: u8 = 0x01;

    fn id(self) -> u8 {
        match self {
            StakeState::Active => Self::ACTIVE_ID,
            StakeState::Retiring => Self::RETIRING_ID,
        }
    }

    fn from_id(id: u8) -> Result<Self, Error> {
        match id {
            Self::ACTIVE_ID => Ok(StakeState::Active),
            Self::RETIRING_ID => Ok(StakeState::Retiring),
            _ => Err(Error::InvalidData),
        }
    }
}

/// An authorization issued off-chain by the operator and presented in the
/// datum of the output it authorizes.
///
/// A certificate is bound to `cert_utxo`, which must be consumed by the
/// transaction using the certificate. Since an output can only be consumed
/// once, so can the certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakingCertificate {
    /// The output the authorizing transaction must consume.
    pub cert_utxo: OutputRef,
    /// The last instant at which the certificate may be used.
    pub expires_in: Timestamp,
    /// The lock the escrow output produced under this certificate must
    /// carry. Required when retiring or resizing, ignored when withdrawing.
    pub stk_utxo_lock_until: Option<Timestamp>,
    /// The value the certificate authorizes: the total entitlement when
    /// withdrawing, the new stake when resizing.
    pub value: Value,
}

impl StakingCertificate {
    /// The quantity of `token` the certificate authorizes.
    #[must_use]
    pub fn quantity_of(&self, token: &TokenId) -> u64 {
        self.value.quantity_of(token)
    }

    /// Serialize the certificate into its canonical encoding.
    #[must_use]
    pub fn to_var_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.write(&mut bytes);
        bytes
    }

    /// Deserialize a certificate from its canonical encoding.
    ///
    /// # Errors
    /// When the bytes are not exactly the encoding of a certificate.
    pub fn from_slice(buf: &[u8]) -> Result<Self, Error> {
        let mut buf = buf;
        let cert = Self::read(&mut buf)?;
        ensure_consumed(buf)?;
        Ok(cert)
    }

    fn write(&self, bytes: &mut Vec<u8>) {
        bytes.extend(self.cert_utxo.to_bytes());
        bytes.extend(self.expires_in.to_bytes());
        write_opt_u64(bytes, self.stk_utxo_lock_until);
        self.value.write(bytes);
    }

    fn read(buf: &mut &[u8]) -> Result<Self, Error> {
        let cert_utxo = OutputRef::from_reader(buf)?;
        let expires_in = u64::from_reader(buf)?;
        let stk_utxo_lock_until = read_opt_u64(buf)?;
        let value = Value::read(buf)?;

        Ok(Self {
            cert_utxo,
            expires_in,
            stk_utxo_lock_until,
            value,
        })
    }
}

/// The state of a stake escrow, attached as datum to the escrow output.
///
/// `provider_key` and `token` are fixed when the escrow is created and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeDatum {
    /// The staking party, who must sign every action on the stake.
    pub provider_key: KeyHash,
    /// The staked asset.
    pub token: TokenId,
    /// The instant before which the stake can't be retired or withdrawn.
    pub locked_until: Timestamp,
    /// The lifecycle state.
    pub state: StakeState,
    /// The certificate that authorized the transition producing this datum.
    pub cert: Option<StakingCertificate>,
}

impl StakeDatum {
    /// The datum of a newly created escrow.
    #[must_use]
    pub fn genesis(
        provider_key: KeyHash,
        token: TokenId,
        locked_until: Timestamp,
    ) -> Self {
        Self {
            provider_key,
            token,
            locked_until,
            state: StakeState::Active,
            cert: None,
        }
    }

    /// The content hash of the datum, by which outputs reference it.
    #[must_use]
    pub fn hash(&self) -> Hash {
        hash::hash(self.to_var_bytes())
    }

    /// Serialize the datum into its canonical encoding.
    #[must_use]
    pub fn to_var_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend(self.provider_key.to_bytes());
        self.token.write(&mut bytes);
        bytes.extend(self.locked_until.to_bytes());
        bytes.push(self.state.id());

        match &self.cert {
            Some(cert) => {
                bytes.push(SOME_TAG);
                cert.write(&mut bytes);
            }
            None => bytes.push(NONE_TAG),
        }

        bytes
    }

    /// Deserialize a datum from its canonical encoding.
    ///
    /// # Errors
    /// When the bytes are not exactly the encoding of a datum.
    pub fn from_slice(buf: &[u8]) -> Result<Self, Error> {
        let mut buf = buf;

        let provider_key = KeyHash::from_reader(&mut buf)?;
        let token = TokenId::read(&mut buf)?;
        let locked_until = u64::from_reader(&mut buf)?;
        let state = StakeState::from_id(read_tag(&mut buf)?)?;
        let cert = match read_tag(&mut buf)? {
            NONE_TAG => None,
            SOME_TAG => Some(StakingCertificate::read(&mut buf)?),
            _ => return Err(Error::InvalidData),
        };

        ensure_consumed(buf)?;

        Ok(Self {
            provider_key,
            token,
            locked_until,
            state,
            cert,
        })
    }
}

/// The action requested on the escrow, together with the operator's
/// signature over the hash of the datum the action produces.
///
/// The signed hash doubles as the key under which the certificate-bearing
/// datum is looked up in the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingRedeemer {
    /// Move an active stake into its cool-down.
    Retire {
        /// The hash signed by the operator.
        message: Hash,
        /// The operator's signature over `message`.
        signature: OperatorSignature,
    },
    /// Release a retired stake.
    Withdraw {
        /// The hash signed by the operator.
        message: Hash,
        /// The operator's signature over `message`.
        signature: OperatorSignature,
    },
    /// Increase an active stake.
    Resize {
        /// The hash signed by the operator.
        message: Hash,
        /// The operator's signature over `message`.
        signature: OperatorSignature,
    },
}

impl StakingRedeemer {
    const RETIRE_ID: u8 = 0x00;
    const WITHDRAW_ID: u8 = 0x01;
    const RESIZE_ID: u8 = 0x02;

    /// Size of an encoded redeemer.
    pub const SIZE: usize = 1 + HASH_SIZE + SIGNATURE_SIZE;

    /// The name of the requested action.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            StakingRedeemer::Retire { .. } => "retire",
            StakingRedeemer::Withdraw { .. } => "withdraw",
            StakingRedeemer::Resize { .. } => "resize",
        }
    }

    /// The hash signed by the operator.
    #[must_use]
    pub fn message(&self) -> &Hash {
        match self {
            StakingRedeemer::Retire { message, .. }
            | StakingRedeemer::Withdraw { message, .. }
            | StakingRedeemer::Resize { message, .. } => message,
        }
    }

    /// The operator's signature over [`StakingRedeemer::message`].
    #[must_use]
    pub fn signature(&self) -> &OperatorSignature {
        match self {
            StakingRedeemer::Retire { signature, .. }
            | StakingRedeemer::Withdraw { signature, .. }
            | StakingRedeemer::Resize { signature, .. } => signature,
        }
    }

    /// Serialize the redeemer into its canonical encoding.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let (id, message, signature) = match self {
            StakingRedeemer::Retire { message, signature } => {
                (Self::RETIRE_ID, message, signature)
            }
            StakingRedeemer::Withdraw { message, signature } => {
                (Self::WITHDRAW_ID, message, signature)
            }
            StakingRedeemer::Resize { message, signature } => {
                (Self::RESIZE_ID, message, signature)
            }
        };

        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = id;
        bytes[1..=HASH_SIZE].copy_from_slice(message);
        bytes[1 + HASH_SIZE..].copy_from_slice(&signature.to_bytes());
        bytes
    }

    /// Deserialize a redeemer from its canonical encoding.
    ///
    /// # Errors
    /// When the bytes are not exactly the encoding of a redeemer.
    pub fn from_slice(buf: &[u8]) -> Result<Self, Error> {
        let mut buf = buf;

        let id = read_tag(&mut buf)?;
        let message = read_arr::<HASH_SIZE>(&mut buf)?;
        let signature = OperatorSignature::from_reader(&mut buf)?;

        ensure_consumed(buf)?;

        match id {
            Self::RETIRE_ID => {
                Ok(StakingRedeemer::Retire { message, signature })
            }
            Self::WITHDRAW_ID => {
                Ok(StakingRedeemer::Withdraw { message, signature })
            }
            Self::RESIZE_ID => {
                Ok(StakingRedeemer::Resize { message, signature })
            }
            _ => Err(Error::InvalidData),
        }
    }
}

fn ensure_consumed(buf: &[u8]) -> Result<(), Error> {
    if buf.is_empty() {
        Ok(())
    } else {
        Err(Error::TrailingBytes(buf.len()))
    }
}

