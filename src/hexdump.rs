//! Hex+ASCII dump formatting for transport diagnostics.

use std::fmt::Write;

const BYTES_PER_LINE: usize = 16;

/// Formats `data` in the classic `hexdump -C` layout: an eight-digit hex
/// offset, sixteen hex bytes split into two groups of eight, and the
/// printable-ASCII rendering with `.` for everything outside 32..=126.
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();
    for (index, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        let _ = write!(out, "{:08x}  ", index * BYTES_PER_LINE);
        for position in 0..BYTES_PER_LINE {
            match chunk.get(position) {
                Some(byte) => {
                    let _ = write!(out, "{byte:02x} ");
                }
                None => out.push_str("   "),
            }
            if position == 7 || position == 15 {
                out.push(' ');
            }
        }
        out.push('|');
        for &byte in chunk {
            if (32..=126).contains(&byte) {
                out.push(byte as char);
            } else {
                out.push('.');
            }
        }
        out.push_str("|\n");
    }
    out
}

/// The dump split into lines, ready to hand to a line-oriented logger.
pub fn lines(data: &[u8]) -> Vec<String> {
    hex_dump(data)
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
