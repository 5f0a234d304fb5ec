//! Small cross-cutting helpers that don't belong to any one subsystem.

use zeroize::Zeroize;

/// Zeroizes `data` in place. A thin wrapper so call sites read as intent
/// ("scrub this secret") rather than a bare trait-method call.
pub fn secure_zeroize<T: Zeroize>(data: &mut T) {
    data.zeroize();
}
