//! Deterministic seed-to-secret sampling.

use crate::prf::keystream;
use crate::rs::SECRET_DIM;

/// Maps a keystream byte to a symbol in `{-3, ..., 3}` via `b mod 7`.
const fn byte_to_symbol(b: u8) -> i8 {
    const TABLE: [i8; 7] = [-3, -2, -1, 0, 1, 2, 3];
    TABLE[(b % 7) as usize]
}

/// Samples a length-256 secret vector from a 32-byte seed.
///
/// The seed is used directly as an AES-256 key over a zero nonce and
/// counter, a direct consequence of the secret being "derived from a
/// 32-byte seed" with no additional label or index: unlike the matrix and
/// row derivations, there is no further domain-separation input to fold
/// into a nonce here.
pub fn derive_secret(seed: &[u8; 32]) -> Result<[i8; SECRET_DIM], crate::error::CoreError> {
    let nonce = [0u8; 16];
    let mut bytes = [0u8; SECRET_DIM];
    keystream(seed, &nonce, 0, &mut bytes)?;

    let mut secret = [0i8; SECRET_DIM];
    for (s, &b) in secret.iter_mut().zip(bytes.iter()) {
        *s = byte_to_symbol(b);
    }
    Ok(secret)
}
