use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{name} {value} is out of range ({min} to {max})")]
    OutOfRange {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("baud rate {0} is unsupported by the OI")]
    UnsupportedBaudRate(u32),

    #[error("the vacuum motor only supports Off and Default")]
    VacuumDirection,

    #[error("a song must contain 1 to 16 notes, got {0}")]
    SongLength(usize),

    #[error("digit text must be exactly 4 characters, got {0}")]
    DigitLength(usize),

    #[error("digit character {0:#04x} is outside printable ASCII (32 to 126)")]
    DigitCharacter(u8),
}

/// A trait that allows for encoding a command into a byte sequence.
///
/// Argument validation happens before any bytes are produced, so a failed
/// encode never yields a partial frame.
pub trait Encode {
    /// Encodes a command into the frame sent over the wire.
    fn encode(&self) -> Result<Vec<u8>, EncodeError>;
}

/// Range check shared by every bounded command argument.
pub(crate) fn check_range(
    name: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<(), EncodeError> {
    if value < min || value > max {
        return Err(EncodeError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_range;

    #[test]
    fn in_range() {
        assert!(check_range("velocity", 500, -500, 500).is_ok());
        assert!(check_range("velocity", -500, -500, 500).is_ok());
    }

    #[test]
    fn out_of_range() {
        let err = check_range("velocity", 501, -500, 500).unwrap_err();
        assert_eq!(
            err.to_string(),
            "velocity 501 is out of range (-500 to 500)"
        );
    }
}
