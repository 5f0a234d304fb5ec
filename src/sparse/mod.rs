//! Bit-exact entropy codec for small, sparse signed integer vectors.
//!
//! A sparse vector of dimension `D` is described by its non-zero positions
//! and the values at those positions. [`position`] carries the shared
//! Rice-gap position codec; [`alphabet`] carries the delta-encoded alphabet
//! header; [`packed`], [`huffman`], and [`rans`] are the three interchangeable
//! value-codec engines; [`codec`] wires all of that into the [`encode`] /
//! [`decode`] entry points.
//!
//! None of this module is constant-time — it operates on data that has
//! already left the secret boundary (see the crate's top-level docs).

pub mod alphabet;
pub mod codec;
pub mod huffman;
pub mod packed;
pub mod position;
pub mod rans;

pub use codec::{decode, encode, Engine};

/// Largest dimension this codec supports (position count is transmitted in 16 bits).
pub const MAX_DIMENSION: usize = 65535;
