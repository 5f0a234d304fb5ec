//! Lattice-cryptography primitives toolkit.
//!
//! Three tightly-coupled subsystems underpin a ring-switching commitment /
//! Learning-With-Rounding construction:
//!
//! - [`ntt`]: a constant-time negacyclic Number Theoretic Transform over seven
//!   32-bit prime moduli, fixed transform length `N = 64`.
//! - [`rs`]: a domain-separated pseudorandom expansion pipeline that
//!   materializes public matrices, rows, and secret vectors, and computes the
//!   LWR public tag.
//! - [`sparse`]: a bit-exact entropy codec for small, sparse signed integer
//!   vectors (Rice-coded positions plus a choice of three value codecs).
//!
//! Everything here is synchronous, allocation-light, and free of I/O. Callers
//! own buffering, caching, and persistence.

pub mod bitio;
pub mod error;
pub mod field;
pub mod ntt;
pub mod prf;
pub mod rs;
pub mod sparse;
pub mod utils;

pub use error::{CoreError, DecodeError};
