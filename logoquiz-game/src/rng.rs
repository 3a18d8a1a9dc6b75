//! Deterministic RNG streams segregated by game domain.
//!
//! Every shuffle in the game is reproducible from the session seed alone:
//! the catalog draw, the per-round reveal permutation, and the player token
//! each pull from their own derived stream, so consuming one never perturbs
//! another.

use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

const DRAW_TAG: &[u8] = b"draw";
const REVEAL_TAG: &[u8] = b"reveal";
const PLAYER_TAG: &[u8] = b"player";

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8], index: u64) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    mac.update(&index.to_le_bytes());
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}

/// RNG stream used for the session's catalog draw.
#[must_use]
pub fn draw_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(derive_stream_seed(seed, DRAW_TAG, 0))
}

/// RNG stream used for one round's reveal permutation.
///
/// Each round index yields an independent stream, so the mask order is
/// re-drawn for every round while staying reproducible from the seed.
#[must_use]
pub fn reveal_rng(seed: u64, round_index: usize) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(derive_stream_seed(seed, REVEAL_TAG, round_index as u64))
}

/// Opaque token value for the session's player identity.
#[must_use]
pub fn player_token(seed: u64) -> u64 {
    derive_stream_seed(seed, PLAYER_TAG, 0)
}
