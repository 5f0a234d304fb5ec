//! Small-alphabet bit-packed value codec: values confined to `{-2,-1,1,2}`,
//! each written as a fixed 2-bit code. No alphabet header is needed.

use crate::bitio::{BitReader, BitWriter};
use crate::error::{CoreError, DecodeError};

fn value_to_code(value: i8) -> Result<u32, CoreError> {
    match value {
        -2 => Ok(0b00),
        -1 => Ok(0b01),
        1 => Ok(0b10),
        2 => Ok(0b11),
        other => Err(CoreError::UnsupportedValue(other)),
    }
}

fn code_to_value(code: u32) -> i8 {
    match code {
        0b00 => -2,
        0b01 => -1,
        0b10 => 1,
        _ => 2,
    }
}

pub fn write_values(writer: &mut BitWriter, values: &[i8]) -> Result<(), CoreError> {
    for &v in values {
        writer.write_bits(value_to_code(v)?, 2);
    }
    Ok(())
}

pub fn read_values(reader: &mut BitReader, count: u32) -> Result<Vec<i8>, DecodeError> {
    let mut values = Vec::with_capacity(count as usize);
    for _ in 0..count {
        values.push(code_to_value(reader.read_bits(2)?));
    }
    Ok(values)
}
