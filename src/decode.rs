use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("buffer too short: needed {needed} bytes at offset {offset}, have {available}")]
    UnexpectedEnd {
        needed: usize,
        offset: usize,
        available: usize,
    },
}

fn take<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], DecodeError> {
    match data.get(offset..offset + N) {
        Some(bytes) => Ok(bytes.try_into().unwrap()),
        None => Err(DecodeError::UnexpectedEnd {
            needed: N,
            offset,
            available: data.len().saturating_sub(offset),
        }),
    }
}

/// All multi-byte OI sensor fields are big-endian.
pub fn read_u8(data: &[u8], offset: usize) -> Result<u8, DecodeError> {
    Ok(u8::from_be_bytes(take::<1>(data, offset)?))
}

pub fn read_i8(data: &[u8], offset: usize) -> Result<i8, DecodeError> {
    Ok(i8::from_be_bytes(take::<1>(data, offset)?))
}

pub fn read_u16(data: &[u8], offset: usize) -> Result<u16, DecodeError> {
    Ok(u16::from_be_bytes(take::<2>(data, offset)?))
}

pub fn read_i16(data: &[u8], offset: usize) -> Result<i16, DecodeError> {
    Ok(i16::from_be_bytes(take::<2>(data, offset)?))
}
