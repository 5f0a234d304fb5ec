//! Top-level sparse-vector encode/decode entry points.
//!
//! Wire format (MSB-first bitstream), the convention this crate commits to
//! among the choices the codec's contract leaves open:
//!
//! ```text
//! count        : 16 bits
//! [if count == 0, the blob ends here]
//! engine       : 2 bits   (0 = packed, 1 = huffman, 2 = rans)
//! [if engine != packed]
//!   min_v+128  : 8 bits
//!   max_v+128  : 8 bits
//!   alphabet presence bitfield : (max_v - min_v + 1) bits
//!   engine codebook header     : huffman -> 5-bit lengths per symbol
//!                                rans    -> 12-bit freqs per symbol
//! r            : 3 bits
//! pos_bits - 1 : 4 bits
//! p0           : pos_bits bits
//! gap stream   : (count - 1) Rice(r) codes
//! [byte align]
//! value stream : count symbols, engine-specific
//! ```
//!
//! This places the position codec after the value engine's header but
//! before its payload, and always carries a 2-bit engine selector (even for
//! the packed engine, which the prose wire-format sketch describes as
//! header-less) so a single [`decode`] entry point can dispatch without an
//! out-of-band engine hint.

use crate::bitio::{BitReader, BitWriter};
use crate::error::{CoreError, DecodeError};
use crate::sparse::{alphabet, huffman, packed, position, rans, MAX_DIMENSION};

/// Which value-codec engine to use for a sparse vector's non-zero values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Packed,
    Huffman,
    Rans,
}

impl Engine {
    fn tag(self) -> u32 {
        match self {
            Engine::Packed => 0,
            Engine::Huffman => 1,
            Engine::Rans => 2,
        }
    }

    fn from_tag(tag: u32) -> Result<Self, DecodeError> {
        match tag {
            0 => Ok(Engine::Packed),
            1 => Ok(Engine::Huffman),
            2 => Ok(Engine::Rans),
            _ => Err(DecodeError::MalformedAlphabet),
        }
    }
}

/// Encodes a sparse representation of a dimension-`dimension` signed-byte
/// vector: `positions[i]` is the index of `values[i]` in `[0, dimension)`,
/// with `positions` strictly increasing and `values` holding only non-zero
/// entries.
pub fn encode(
    positions: &[u32],
    values: &[i8],
    dimension: u32,
    engine: Engine,
) -> Result<Vec<u8>, CoreError> {
    if dimension as usize > MAX_DIMENSION {
        return Err(CoreError::UnsupportedDimension(dimension as usize));
    }
    debug_assert_eq!(positions.len(), values.len());
    let mut buf = Vec::new();
    let mut w = BitWriter::new(&mut buf);
    w.write_bits(positions.len() as u32, 16);

    if positions.is_empty() {
        return Ok(buf);
    }

    w.write_bits(engine.tag(), 2);

    let distinct_alphabet: Vec<i8> = {
        let mut vs = values.to_vec();
        vs.sort_unstable();
        vs.dedup();
        vs
    };
    let histogram = histogram_for(&distinct_alphabet, values);
    let huffman_lengths = (engine == Engine::Huffman).then(|| huffman::code_lengths(&histogram));
    let rans_freqs = (engine == Engine::Rans).then(|| rans::normalize_freqs(&histogram));

    match engine {
        Engine::Packed => {}
        Engine::Huffman => {
            alphabet::write_alphabet(&mut w, &distinct_alphabet);
            huffman::write_code_lengths(&mut w, huffman_lengths.as_ref().unwrap());
        }
        Engine::Rans => {
            alphabet::write_alphabet(&mut w, &distinct_alphabet);
            rans::write_freqs(&mut w, rans_freqs.as_ref().unwrap());
        }
    }

    position::write_positions(&mut w, positions, dimension);
    w.align_to_byte();

    match engine {
        Engine::Packed => {
            packed::write_values(&mut w, values)?;
            w.align_to_byte();
        }
        Engine::Huffman => {
            let codes = huffman::canonical_codes(huffman_lengths.as_ref().unwrap());
            huffman::write_values(&mut w, values, &distinct_alphabet, &codes);
            w.align_to_byte();
        }
        Engine::Rans => {
            let indices: Vec<usize> = values
                .iter()
                .map(|v| distinct_alphabet.iter().position(|a| a == v).unwrap())
                .collect();
            let payload = rans::encode(&indices, rans_freqs.as_ref().unwrap());
            drop(w);
            buf.extend_from_slice(&payload);
            return Ok(buf);
        }
    }
    Ok(buf)
}

fn histogram_for(alphabet: &[i8], values: &[i8]) -> Vec<u32> {
    let mut histogram = vec![0u32; alphabet.len()];
    for &v in values {
        let idx = alphabet.iter().position(|a| *a == v).unwrap();
        histogram[idx] += 1;
    }
    histogram
}

/// Decodes a sparse vector encoded by [`encode`] back into its materialized
/// form: a length-`dimension` vector of `i8`s, mostly zero.
pub fn decode(bytes: &[u8], dimension: u32) -> Result<Vec<i8>, CoreError> {
    if dimension as usize > MAX_DIMENSION {
        return Err(CoreError::UnsupportedDimension(dimension as usize));
    }
    let mut r = BitReader::new(bytes);
    let count = r.read_bits(16)?;

    let mut out = vec![0i8; dimension as usize];
    if count == 0 {
        return Ok(out);
    }

    let engine = Engine::from_tag(r.read_bits(2)?)?;

    let alphabet;
    let lengths;
    let freqs;
    match engine {
        Engine::Packed => {
            alphabet = Vec::new();
            lengths = Vec::new();
            freqs = Vec::new();
        }
        Engine::Huffman => {
            alphabet = alphabet::read_alphabet(&mut r)?;
            lengths = huffman::read_code_lengths(&mut r, alphabet.len())?;
            freqs = Vec::new();
        }
        Engine::Rans => {
            alphabet = alphabet::read_alphabet(&mut r)?;
            freqs = rans::read_freqs(&mut r, alphabet.len())?;
            lengths = Vec::new();
        }
    }

    let positions = position::read_positions(&mut r, count as u32, dimension)?;
    r.align_to_byte();

    match engine {
        Engine::Packed => {
            let values = packed::read_values(&mut r, count as u32)?;
            scatter(&mut out, &positions, &values, dimension)?;
        }
        Engine::Huffman => {
            let codes = huffman::canonical_codes(&lengths);
            let values = huffman::read_values(&mut r, count as u32, &alphabet, &codes)?;
            scatter(&mut out, &positions, &values, dimension)?;
        }
        Engine::Rans => {
            // The rANS payload is a self-delimited byte block following the
            // byte-aligned bit stream; recover its start offset directly.
            let byte_offset = r_byte_offset(&r);
            let indices = rans::decode(&bytes[byte_offset..], count as u32, &freqs)?;
            let values: Vec<i8> = indices.iter().map(|&i| alphabet[i]).collect();
            scatter(&mut out, &positions, &values, dimension)?;
        }
    }

    Ok(out)
}

fn r_byte_offset(reader: &BitReader) -> usize {
    reader.byte_offset()
}

fn scatter(
    out: &mut [i8],
    positions: &[u32],
    values: &[i8],
    dimension: u32,
) -> Result<(), DecodeError> {
    if positions.len() != values.len() {
        return Err(DecodeError::CountMismatch {
            expected: positions.len() as u16,
            actual: values.len() as u16,
        });
    }
    for (&p, &v) in positions.iter().zip(values.iter()) {
        if p >= dimension {
            return Err(DecodeError::PositionOutOfBounds {
                position: p,
                dimension,
            });
        }
        out[p as usize] = v;
    }
    Ok(())
}
