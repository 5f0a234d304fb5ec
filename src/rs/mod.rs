//! Ring-switching PRF/matrix layer.
//!
//! Six 32-byte seeds under one [`Params`] entity drive everything here:
//! public matrix materialization ([`matrix::derive_a`]), public row
//! materialization ([`matrix::derive_b_row`], [`matrix::derive_c_row`]),
//! secret sampling ([`secret::derive_secret`]), and the LWR public tag
//! ([`lwr::lwr_tag`]). Every function in this module is a pure function of
//! its explicit inputs; nothing here is cached or mutated in place.

pub mod lwr;
pub mod matrix;
pub mod params;
pub mod secret;

pub use lwr::lwr_tag;
pub use matrix::{derive_a, derive_b_row, derive_c_row, Family, RowFlavor};
pub use params::Params;
pub use secret::derive_secret;

/// Length of a secret vector.
pub const SECRET_DIM: usize = 256;
/// Length of a public tag / row-dot-product output.
pub const PUBLIC_DIM: usize = 64;
/// Number of slots materialized per (family, layer) pair.
pub const SLOT_COUNT: usize = 4;
/// LWR output modulus.
pub const LWR_P: u32 = 12289;
/// LWR right-shift applied before the final reduction.
pub const LWR_SHIFT: u32 = 16;
