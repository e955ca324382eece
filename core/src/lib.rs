// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Types used for validating transactions against a certificate-gated stake
//! escrow.
//!
//! The crate models the part of the ledger a validator can see (consumed
//! inputs, produced outputs, the datum table, the validity range and the
//! signatories of a transaction), the records persisted in the escrow output
//! and their canonical byte encoding.

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

pub mod hash;
pub mod ledger;
pub mod signatures;
pub mod stake;

mod error;
pub use error::Error;

use alloc::vec::Vec;

use dusk_bytes::{DeserializableSlice, Error as BytesError, Serializable};

/// Tag written before an absent optional field.
const NONE_TAG: u8 = 0x00;
/// Tag written before a present optional field.
const SOME_TAG: u8 = 0x01;

/// Reads vector from a buffer.
/// Resets buffer to a position after the bytes read.
///
/// # Errors
/// When length or data could not be read.
fn read_vec(buf: &mut &[u8]) -> Result<Vec<u8>, BytesError> {
    let len = usize::try_from(u64::from_reader(buf)?)
        .map_err(|_| BytesError::InvalidData)?;
    if buf.len() < len {
        return Err(BytesError::InvalidData);
    }
    let bytes = buf[..len].into();
    *buf = &buf[len..];
    Ok(bytes)
}

/// Reads array from a buffer.
/// Resets buffer to a position after the bytes read.
///
/// # Errors
/// When length or data could not be read.
fn read_arr<const N: usize>(buf: &mut &[u8]) -> Result<[u8; N], BytesError> {
    if buf.len() < N {
        return Err(BytesError::BadLength {
            found: buf.len(),
            expected: N,
        });
    }
    let mut a = [0u8; N];
    a.copy_from_slice(&buf[..N]);
    *buf = &buf[N..];
    Ok(a)
}

/// Reads a single tag byte from a buffer.
fn read_tag(buf: &mut &[u8]) -> Result<u8, BytesError> {
    let [tag] = read_arr::<1>(buf)?;
    Ok(tag)
}

/// Writes a vector prefixed by its length.
fn write_vec(bytes: &mut Vec<u8>, data: &[u8]) {
    bytes.extend((data.len() as u64).to_bytes());
    bytes.extend(data);
}

/// Writes an optional `u64` as a presence tag followed by the value.
fn write_opt_u64(bytes: &mut Vec<u8>, value: Option<u64>) {
    match value {
        Some(value) => {
            bytes.push(SOME_TAG);
            bytes.extend(value.to_bytes());
        }
        None => bytes.push(NONE_TAG),
    }
}

/// Reads an optional `u64` written by [`write_opt_u64`].
fn read_opt_u64(buf: &mut &[u8]) -> Result<Option<u64>, BytesError> {
    match read_tag(buf)? {
        NONE_TAG => Ok(None),
        SOME_TAG => Ok(Some(u64::from_reader(buf)?)),
        _ => Err(BytesError::InvalidData),
    }
}
