// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Error-type for stake-escrow-core.

use core::fmt;

/// The stake-escrow-core error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Dusk-bytes `InvalidData` error
    InvalidData,
    /// Dusk-bytes `BadLength` error
    BadLength(usize, usize),
    /// Dusk-bytes `InvalidChar` error
    InvalidChar(char, usize),
    /// Bytes were left over after decoding a record.
    TrailingBytes(usize),
    /// An asset name is longer than [`MAX_ASSET_NAME_LEN`]. Contains the
    /// length found.
    ///
    /// [`MAX_ASSET_NAME_LEN`]: crate::ledger::MAX_ASSET_NAME_LEN
    AssetNameTooLong(usize),
    /// A value carries the same token twice, out of order, or with a zero
    /// quantity.
    NonCanonicalValue,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stake-Escrow-Core Error: {:?}", &self)
    }
}

impl From<dusk_bytes::Error> for Error {
    fn from(bytes_error: dusk_bytes::Error) -> Self {
        match bytes_error {
            dusk_bytes::Error::InvalidData => Self::InvalidData,
            dusk_bytes::Error::BadLength { found, expected } => {
                Self::BadLength(found, expected)
            }
            dusk_bytes::Error::InvalidChar { ch, index } => {
                Self::InvalidChar(ch, index)
            }
        }
    }
}
