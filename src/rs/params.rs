//! The six-seed parameter set owned by one [`Params`] entity.

use zeroize::Zeroize;

use crate::prf::derive_key;

/// Six 32-byte seeds and their once-derived AES-256 keys.
///
/// Keys are derived eagerly at construction (`SHA3-256(label ‖ seed)`) so
/// every later call to the matrix materializer or row derivation pays only
/// the AES-CTR keystream cost, not a repeated hash.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Params {
    seed_ax: [u8; 32],
    seed_ay: [u8; 32],
    seed_aox: [u8; 32],
    seed_aoy: [u8; 32],
    seed_b: [u8; 32],
    seed_c: [u8; 32],
    key_ax: [u8; 32],
    key_ay: [u8; 32],
    key_aox: [u8; 32],
    key_aoy: [u8; 32],
    key_b: [u8; 32],
    key_c: [u8; 32],
}

impl Params {
    /// Builds a parameter set from six independently-chosen seeds, deriving
    /// all six AES-256 keys up front.
    pub fn new(
        seed_ax: [u8; 32],
        seed_ay: [u8; 32],
        seed_aox: [u8; 32],
        seed_aoy: [u8; 32],
        seed_b: [u8; 32],
        seed_c: [u8; 32],
    ) -> Self {
        let key_ax = derive_key(&seed_ax, "AX_KEY");
        let key_ay = derive_key(&seed_ay, "AY_KEY");
        let key_aox = derive_key(&seed_aox, "AOX_KEY");
        let key_aoy = derive_key(&seed_aoy, "AOY_KEY");
        let key_b = derive_key(&seed_b, "B_KEY");
        let key_c = derive_key(&seed_c, "C_KEY");
        Self {
            seed_ax,
            seed_ay,
            seed_aox,
            seed_aoy,
            seed_b,
            seed_c,
            key_ax,
            key_ay,
            key_aox,
            key_aoy,
            key_b,
            key_c,
        }
    }

    pub(crate) fn key_ax(&self) -> &[u8; 32] {
        &self.key_ax
    }

    pub(crate) fn key_ay(&self) -> &[u8; 32] {
        &self.key_ay
    }

    pub(crate) fn key_aox(&self) -> &[u8; 32] {
        &self.key_aox
    }

    pub(crate) fn key_aoy(&self) -> &[u8; 32] {
        &self.key_aoy
    }

    pub(crate) fn key_b(&self) -> &[u8; 32] {
        &self.key_b
    }

    pub(crate) fn key_c(&self) -> &[u8; 32] {
        &self.key_c
    }

    /// Seed AX, exposed for the sparse-vector test harness and for callers
    /// that need to re-derive nonces by hand.
    pub fn seed_ax(&self) -> &[u8; 32] {
        &self.seed_ax
    }

    pub(crate) fn seed_ay_internal(&self) -> &[u8; 32] {
        &self.seed_ay
    }

    pub(crate) fn seed_aox_internal(&self) -> &[u8; 32] {
        &self.seed_aox
    }

    pub(crate) fn seed_aoy_internal(&self) -> &[u8; 32] {
        &self.seed_aoy
    }

    pub(crate) fn seed_b_internal(&self) -> &[u8; 32] {
        &self.seed_b
    }

    pub(crate) fn seed_c_internal(&self) -> &[u8; 32] {
        &self.seed_c
    }
}
