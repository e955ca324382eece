// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use stake_escrow_core::hash::{hash, Hash};
use stake_escrow_core::ledger::{
    AssetName, KeyHash, OutputRef, PolicyId, TokenId, Value,
};
use stake_escrow_core::signatures::OperatorSignature;
use stake_escrow_core::stake::{
    StakeDatum, StakeState, StakingCertificate, StakingRedeemer,
};
use stake_escrow_core::Error;

fn token() -> TokenId {
    TokenId::new(
        PolicyId([0x11; 28]),
        AssetName::new(*b"STAKE").expect("name should be short enough"),
    )
}

fn random_datum<R: RngCore>(rng: &mut R) -> StakeDatum {
    let cert = StakingCertificate {
        cert_utxo: OutputRef::new(rng.gen(), rng.gen()),
        expires_in: rng.gen(),
        stk_utxo_lock_until: Some(rng.gen()),
        value: Value::single(token(), rng.gen_range(1..u64::MAX)),
    };

    StakeDatum {
        provider_key: KeyHash(rng.gen()),
        token: token(),
        locked_until: rng.gen(),
        state: StakeState::Retiring,
        cert: Some(cert),
    }
}

#[test]
fn datum() {
    let mut rng = StdRng::seed_from_u64(0xc0b);

    let datum = random_datum(&mut rng);
    let bytes = datum.to_var_bytes();

    let parsed =
        StakeDatum::from_slice(&bytes).expect("Datum should deserialize");

    assert_eq!(datum, parsed);
    assert_eq!(bytes, parsed.to_var_bytes());
}

#[test]
fn genesis_datum_has_no_certificate() {
    let datum = StakeDatum::genesis(KeyHash([1; 28]), token(), 10);
    let bytes = datum.to_var_bytes();

    // provider key, policy, name length, name, lock, state, cert tag
    assert_eq!(bytes.len(), 28 + 28 + 8 + 5 + 8 + 1 + 1);
    assert_eq!(bytes[bytes.len() - 2], 0x00, "state should be active");
    assert_eq!(bytes[bytes.len() - 1], 0x00, "certificate should be absent");

    let parsed =
        StakeDatum::from_slice(&bytes).expect("Datum should deserialize");
    assert_eq!(parsed.state, StakeState::Active);
    assert!(parsed.cert.is_none());
}

#[test]
fn hash_identifies_every_field() {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let datum = random_datum(&mut rng);

    let mut moved_lock = datum.clone();
    moved_lock.locked_until = moved_lock.locked_until.wrapping_add(1);

    let mut activated = datum.clone();
    activated.state = StakeState::Active;

    let mut uncertified = datum.clone();
    uncertified.cert = None;

    assert_eq!(datum.hash(), hash(datum.to_var_bytes()));
    assert_ne!(datum.hash(), moved_lock.hash());
    assert_ne!(datum.hash(), activated.hash());
    assert_ne!(datum.hash(), uncertified.hash());
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let mut bytes = random_datum(&mut rng).to_var_bytes();
    bytes.push(0);

    assert_eq!(StakeDatum::from_slice(&bytes), Err(Error::TrailingBytes(1)));
}

#[test]
fn truncated_datum_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0xc0b);
    let bytes = random_datum(&mut rng).to_var_bytes();

    for len in [0, 27, 60, bytes.len() - 1] {
        assert!(
            StakeDatum::from_slice(&bytes[..len]).is_err(),
            "Datum truncated to {len} bytes should not deserialize"
        );
    }
}

#[test]
fn unknown_tags_are_rejected() {
    let datum = StakeDatum::genesis(KeyHash([1; 28]), token(), 10);

    let mut bad_state = datum.to_var_bytes();
    let state_pos = bad_state.len() - 2;
    bad_state[state_pos] = 0x02;
    assert_eq!(StakeDatum::from_slice(&bad_state), Err(Error::InvalidData));

    let mut bad_cert_tag = datum.to_var_bytes();
    let tag_pos = bad_cert_tag.len() - 1;
    bad_cert_tag[tag_pos] = 0x02;
    assert_eq!(
        StakeDatum::from_slice(&bad_cert_tag),
        Err(Error::InvalidData)
    );
}

#[test]
fn certificate() {
    let mut rng = StdRng::seed_from_u64(0xce47);

    let cert = StakingCertificate {
        cert_utxo: OutputRef::new(rng.gen(), 3),
        expires_in: 25,
        stk_utxo_lock_until: None,
        value: Value::single(token(), 5_000_000),
    };
    let bytes = cert.to_var_bytes();

    let parsed = StakingCertificate::from_slice(&bytes)
        .expect("Certificate should deserialize");

    assert_eq!(cert, parsed);
    assert_eq!(parsed.quantity_of(&token()), 5_000_000);
}

#[test]
fn redeemer() {
    let mut rng = StdRng::seed_from_u64(0x7ede);
    let sk = SigningKey::from_bytes(&rng.gen());

    let message: Hash = rng.gen();
    let signature = OperatorSignature::from(sk.sign(&message));

    let redeemers = [
        StakingRedeemer::Retire { message, signature },
        StakingRedeemer::Withdraw { message, signature },
        StakingRedeemer::Resize { message, signature },
    ];

    for redeemer in redeemers {
        let bytes = redeemer.to_bytes();
        let parsed = StakingRedeemer::from_slice(&bytes)
            .expect("Redeemer should deserialize");

        assert_eq!(redeemer, parsed);
        assert_eq!(parsed.message(), &message);
        assert_eq!(parsed.signature(), &signature);
    }

    let mut unknown = redeemers[0].to_bytes();
    unknown[0] = 0x03;
    assert_eq!(StakingRedeemer::from_slice(&unknown), Err(Error::InvalidData));
}
