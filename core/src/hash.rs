// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Content hashing of datums.
//!
//! Outputs never carry a datum directly, only the hash of its canonical
//! encoding. The datum itself is witnessed in the transaction's datum table
//! under that hash, and the operator signs the same hash to issue a
//! certificate.

use blake2b_simd::Params;

/// Size in bytes of a datum hash.
pub const HASH_SIZE: usize = 32;

/// The hash identifying a datum.
pub type Hash = [u8; HASH_SIZE];

/// Length of the Blake2b digest the datum hash is the prefix of.
const DIGEST_SIZE: usize = 64;

/// Computes the datum hash of `encoded`: the first [`HASH_SIZE`] bytes of
/// its 64-byte Blake2b digest.
#[must_use]
pub fn hash(encoded: impl AsRef<[u8]>) -> Hash {
    let digest = Params::new()
        .hash_length(DIGEST_SIZE)
        .hash(encoded.as_ref());

    let mut datum_hash = [0u8; HASH_SIZE];
    datum_hash.copy_from_slice(&digest.as_bytes()[..HASH_SIZE]);
    datum_hash
}
