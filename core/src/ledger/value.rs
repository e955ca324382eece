// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use dusk_bytes::{DeserializableSlice, Serializable};

use super::CREDENTIAL_HASH_SIZE;
use crate::{read_arr, read_vec, write_vec, Error};

/// The maximum length of an asset name, in bytes.
pub const MAX_ASSET_NAME_LEN: usize = 32;

/// Hash of the minting policy of a fungible asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolicyId(pub [u8; CREDENTIAL_HASH_SIZE]);

/// Name of an asset within its minting policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetName(Vec<u8>);

impl AssetName {
    /// Create a new asset name.
    ///
    /// # Errors
    /// If the name is longer than [`MAX_ASSET_NAME_LEN`].
    pub fn new(name: impl Into<Vec<u8>>) -> Result<Self, Error> {
        let name = name.into();
        if name.len() > MAX_ASSET_NAME_LEN {
            return Err(Error::AssetNameTooLong(name.len()));
        }
        Ok(Self(name))
    }

    /// The raw bytes of the name.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Identity of a fungible asset: its minting policy and its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId {
    /// The minting policy.
    pub policy: PolicyId,
    /// The asset name.
    pub name: AssetName,
}

impl TokenId {
    /// Create a new token identity.
    #[must_use]
    pub fn new(policy: PolicyId, name: AssetName) -> Self {
        Self { policy, name }
    }

    pub(crate) fn write(&self, bytes: &mut Vec<u8>) {
        bytes.extend(self.policy.0);
        write_vec(bytes, self.name.as_bytes());
    }

    pub(crate) fn read(buf: &mut &[u8]) -> Result<Self, Error> {
        let policy = PolicyId(read_arr::<CREDENTIAL_HASH_SIZE>(buf)?);
        let name = AssetName::new(read_vec(buf)?)?;
        Ok(Self { policy, name })
    }
}

/// Quantities of any number of fungible assets.
///
/// Tokens with a zero quantity are never stored, so two values holding the
/// same quantities are always equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value(BTreeMap<TokenId, u64>);

impl Value {
    /// The empty value.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// A value holding `quantity` units of a single `token`.
    #[must_use]
    pub fn single(token: TokenId, quantity: u64) -> Self {
        let mut value = Self::new();
        value.add(token, quantity);
        value
    }

    /// Adds `quantity` units of `token` to the value, saturating at
    /// `u64::MAX`.
    pub fn add(&mut self, token: TokenId, quantity: u64) {
        if quantity == 0 {
            return;
        }
        let held = self.0.entry(token).or_default();
        *held = held.saturating_add(quantity);
    }

    /// Returns the quantity of `token` held, zero if it isn't held at all.
    #[must_use]
    pub fn quantity_of(&self, token: &TokenId) -> u64 {
        self.0.get(token).copied().unwrap_or_default()
    }

    /// Returns true if the value holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn write(&self, bytes: &mut Vec<u8>) {
        bytes.extend((self.0.len() as u64).to_bytes());
        for (token, quantity) in &self.0 {
            token.write(bytes);
            bytes.extend(quantity.to_bytes());
        }
    }

    /// Reads a value, rejecting any encoding [`Value::write`] wouldn't have
    /// produced.
    pub(crate) fn read(buf: &mut &[u8]) -> Result<Self, Error> {
        let len = u64::from_reader(buf)?;

        let mut tokens = BTreeMap::new();
        let mut previous: Option<TokenId> = None;

        for _ in 0..len {
            let token = TokenId::read(buf)?;
            let quantity = u64::from_reader(buf)?;

            if quantity == 0 || previous.as_ref().is_some_and(|p| p >= &token)
            {
                return Err(Error::NonCanonicalValue);
            }

            previous = Some(token.clone());
            tokens.insert(token, quantity);
        }

        Ok(Self(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(name: &[u8]) -> TokenId {
        TokenId::new(
            PolicyId([7; CREDENTIAL_HASH_SIZE]),
            AssetName::new(name).expect("name should be short enough"),
        )
    }

    #[test]
    fn zero_quantities_are_not_stored() {
        let mut value = Value::single(token(b"stake"), 0);
        assert!(value.is_empty());

        value.add(token(b"stake"), 5);
        value.add(token(b"stake"), 0);
        assert_eq!(value, Value::single(token(b"stake"), 5));
    }

    #[test]
    fn quantity_of_absent_token_is_zero() {
        let value = Value::single(token(b"stake"), 5_000_000);
        assert_eq!(value.quantity_of(&token(b"stake")), 5_000_000);
        assert_eq!(value.quantity_of(&token(b"other")), 0);
    }

    #[test]
    fn asset_names_are_bounded() {
        assert!(AssetName::new([0u8; MAX_ASSET_NAME_LEN]).is_ok());
        assert_eq!(
            AssetName::new([0u8; MAX_ASSET_NAME_LEN + 1]),
            Err(Error::AssetNameTooLong(MAX_ASSET_NAME_LEN + 1))
        );
    }

    #[test]
    fn unsorted_encoding_is_rejected() {
        let mut bytes = Vec::new();
        bytes.extend(2u64.to_bytes());
        token(b"b").write(&mut bytes);
        bytes.extend(1u64.to_bytes());
        token(b"a").write(&mut bytes);
        bytes.extend(1u64.to_bytes());

        assert_eq!(
            Value::read(&mut &bytes[..]),
            Err(Error::NonCanonicalValue)
        );
    }
}
