//! The shared Rice-gap position codec.
//!
//! Positions `p_0 < p_1 < ... < p_{k-1}` in `[0, D)` are written as a first
//! position in `pos_bits` bits followed by `k-1` Rice-coded gaps
//! `gap_i = p_i - p_{i-1} - 1`. `pos_bits` is transmitted as `pos_bits - 1`
//! in 4 bits so dimensions up to `2^16 - 1` (the codec's maximum, per
//! [`MAX_DIMENSION`](crate::sparse::MAX_DIMENSION)) are representable,
//! resolving the wire format's otherwise-unspecified D-to-position-bits
//! mapping.
//! Rice parameter is fixed at `r = 4` and transmitted in 3 bits for
//! forward compatibility with a future adaptive policy.

use crate::bitio::{BitReader, BitWriter};
use crate::error::DecodeError;

/// The fixed Rice parameter. The wire format reserves 3 bits for `r`
/// (values 0-7) rather than hardcoding the width of a fixed r=4 field,
/// but the encoder always selects r=4.
pub const FIXED_RICE_PARAMETER: u32 = 4;

/// Always returns [`FIXED_RICE_PARAMETER`]; `dimension`/`count` are accepted
/// so a future adaptive policy can be slotted in without changing callers.
pub fn select_rice_parameter(_dimension: u32, _count: u32) -> u32 {
    FIXED_RICE_PARAMETER
}

/// Bits needed to represent any position in `[0, dimension)`, at least 1.
pub fn position_bits_for(dimension: u32) -> u32 {
    if dimension <= 1 {
        1
    } else {
        32 - (dimension - 1).leading_zeros()
    }
}

pub fn write_positions(
    writer: &mut BitWriter,
    positions: &[u32],
    dimension: u32,
) -> u32 {
    let r = select_rice_parameter(dimension, positions.len() as u32);
    let pos_bits = position_bits_for(dimension);
    writer.write_bits(r, 3);
    writer.write_bits(pos_bits - 1, 4);
    if positions.is_empty() {
        return r;
    }
    writer.write_bits(positions[0], pos_bits);
    for w in positions.windows(2) {
        let gap = w[1] - w[0] - 1;
        writer.write_rice(gap, r);
    }
    r
}

pub fn read_positions(
    reader: &mut BitReader,
    count: u32,
    dimension: u32,
) -> Result<Vec<u32>, DecodeError> {
    let r = reader.read_bits(3)?;
    let pos_bits = reader.read_bits(4)? + 1;
    let mut positions = Vec::with_capacity(count as usize);
    if count == 0 {
        return Ok(positions);
    }
    let p0 = reader.read_bits(pos_bits)?;
    if p0 >= dimension {
        return Err(DecodeError::PositionOutOfBounds {
            position: p0,
            dimension,
        });
    }
    positions.push(p0);
    for _ in 1..count {
        let gap = reader.read_rice(r)?;
        let next = *positions.last().unwrap() + gap + 1;
        if next >= dimension {
            return Err(DecodeError::PositionOutOfBounds {
                position: next,
                dimension,
            });
        }
        positions.push(next);
    }
    Ok(positions)
}
