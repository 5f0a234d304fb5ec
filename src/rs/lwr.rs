//! The Learning-With-Rounding public tag.

use crate::rs::{LWR_P, LWR_SHIFT, PUBLIC_DIM, SECRET_DIM};

/// `t[i] = ((Σⱼ B_rows[i][j]·s[j]) mod 2^32) >> shift, mod p`.
///
/// The accumulation is carried out in 64-bit arithmetic and only truncated
/// to 32 bits at the end of the row's dot product, rather than truncating
/// per term. `s`'s signed values are folded in via their two's-complement
/// bit pattern, so the whole computation is wrapping unsigned arithmetic
/// throughout.
pub fn lwr_tag(b_rows: &[[u32; SECRET_DIM]; PUBLIC_DIM], s: &[i8; SECRET_DIM]) -> [u16; PUBLIC_DIM] {
    let mut t = [0u16; PUBLIC_DIM];
    for (i, row) in b_rows.iter().enumerate() {
        let mut acc: u64 = 0;
        for (j, &b_ij) in row.iter().enumerate() {
            let s_j = s[j] as i64 as u64; // sign-extend then reinterpret as two's complement
            acc = acc.wrapping_add((b_ij as u64).wrapping_mul(s_j));
        }
        let acc32 = acc as u32;
        t[i] = ((acc32 >> LWR_SHIFT) % LWR_P) as u16;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_seed_rows() -> [[u32; SECRET_DIM]; PUBLIC_DIM] {
        use crate::rs::matrix::{derive_b_row, RowFlavor};
        use crate::rs::params::Params;

        let mut seed_ax = [0u8; 32];
        for (i, b) in seed_ax.iter_mut().enumerate() {
            *b = (0x01 + i) as u8;
        }
        let seed_b = [0x42u8; 32];
        let params = Params::new(seed_ax, [0; 32], [0; 32], [0; 32], seed_b, [0; 32]);

        let mut rows = [[0u32; SECRET_DIM]; PUBLIC_DIM];
        for (i, row) in rows.iter_mut().enumerate() {
            *row = derive_b_row(&params, i as u32, RowFlavor::Lwr).unwrap();
        }
        rows
    }

    fn reference_secret() -> [i8; SECRET_DIM] {
        use crate::rs::secret::derive_secret;
        let mut seed = [0u8; 32];
        for (i, b) in seed.iter_mut().enumerate() {
            *b = i as u8;
        }
        derive_secret(&seed).unwrap()
    }

    #[test]
    fn lwr_tag_is_deterministic() {
        let rows = reference_seed_rows();
        let s = reference_secret();
        assert_eq!(lwr_tag(&rows, &s), lwr_tag(&rows, &s));
    }

    #[test]
    fn lwr_tag_outputs_are_reduced_mod_p() {
        let rows = reference_seed_rows();
        let s = reference_secret();
        for &v in lwr_tag(&rows, &s).iter() {
            assert!((v as u32) < LWR_P);
        }
    }

    #[test]
    fn changing_b_seed_byte_changes_at_least_one_tag_component() {
        use crate::rs::matrix::{derive_b_row, RowFlavor};
        use crate::rs::params::Params;

        let s = reference_secret();

        let params1 = Params::new([0; 32], [0; 32], [0; 32], [0; 32], [0x42; 32], [0; 32]);
        let mut seed_b2 = [0x42u8; 32];
        seed_b2[0] ^= 1;
        let params2 = Params::new([0; 32], [0; 32], [0; 32], [0; 32], seed_b2, [0; 32]);

        let mut rows1 = [[0u32; SECRET_DIM]; PUBLIC_DIM];
        let mut rows2 = [[0u32; SECRET_DIM]; PUBLIC_DIM];
        for i in 0..PUBLIC_DIM {
            rows1[i] = derive_b_row(&params1, i as u32, RowFlavor::Lwr).unwrap();
            rows2[i] = derive_b_row(&params2, i as u32, RowFlavor::Lwr).unwrap();
        }

        assert_ne!(lwr_tag(&rows1, &s), lwr_tag(&rows2, &s));
    }

    #[test]
    fn all_zero_secret_yields_all_zero_tag() {
        let rows = reference_seed_rows();
        let zero_secret = [0i8; SECRET_DIM];
        assert_eq!(lwr_tag(&rows, &zero_secret), [0u16; PUBLIC_DIM]);
    }
}
