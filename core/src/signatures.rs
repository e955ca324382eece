// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Ed25519 keys and signatures of the certificate-issuing operator.

use dusk_bytes::{Error as BytesError, Serializable};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

/// Size in bytes of an operator public key.
pub const PUBLIC_KEY_SIZE: usize = 32;
/// Size in bytes of an operator signature.
pub const SIGNATURE_SIZE: usize = 64;

/// The Ed25519 verification key of the operator issuing certificates.
///
/// The bytes are kept as they were given; whether they form a valid curve
/// point is only known once [`OperatorPublicKey::is_valid`] or
/// [`OperatorPublicKey::verify`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatorPublicKey(
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::hex::Hex>")
    )]
    [u8; PUBLIC_KEY_SIZE],
);

impl OperatorPublicKey {
    /// Returns true if the key bytes decode to a valid Ed25519 key.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        VerifyingKey::from_bytes(&self.0).is_ok()
    }

    /// Verifies `signature` over `msg` against this key.
    ///
    /// Malformed keys and signatures fail verification.
    #[must_use]
    pub fn verify(&self, msg: &[u8], signature: &OperatorSignature) -> bool {
        let Ok(key) = VerifyingKey::from_bytes(&self.0) else {
            return false;
        };
        let signature = Signature::from_bytes(&signature.0);
        key.verify(msg, &signature).is_ok()
    }
}

impl From<VerifyingKey> for OperatorPublicKey {
    fn from(key: VerifyingKey) -> Self {
        Self(key.to_bytes())
    }
}

impl Serializable<PUBLIC_KEY_SIZE> for OperatorPublicKey {
    type Error = BytesError;

    fn from_bytes(buf: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        Ok(Self(*buf))
    }

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.0
    }
}

/// An Ed25519 signature made by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorSignature([u8; SIGNATURE_SIZE]);

impl From<Signature> for OperatorSignature {
    fn from(signature: Signature) -> Self {
        Self(signature.to_bytes())
    }
}

impl Serializable<SIGNATURE_SIZE> for OperatorSignature {
    type Error = BytesError;

    fn from_bytes(buf: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        Ok(Self(*buf))
    }

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.0
    }
}
