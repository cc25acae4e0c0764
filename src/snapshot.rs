//! Snapshot formats.
//!
//! Neither format carries the field size: the reader must already know it.
//! Binary snapshots hold one byte (0 or 1) per cell in column-major order.
//! Text snapshots hold one line per row, top to bottom, where `'0'` marks
//! an alive cell and any other character a dead one.

use crate::{Error, Result};

pub const TEXT_ALIVE: u8 = b'0';
/// Written for dead cells; any byte other than [`TEXT_ALIVE`] reads as dead.
pub const TEXT_DEAD: u8 = b'.';

/// `dump_<token>_<timestamp_ms>.gol`
pub fn dump_file_name(token: u32, timestamp_ms: u128) -> String {
    format!("dump_{token}_{timestamp_ms}.gol")
}

/// Column-major generation to one byte per cell.
pub fn encode_binary(cells: &[bool]) -> Vec<u8> {
    cells.iter().map(|&alive| alive as u8).collect()
}

/// Inverse of [`encode_binary`]; any nonzero byte is alive.
///
/// Trailing bytes beyond `width * height` are ignored.
pub fn decode_binary(data: &[u8], width: usize, height: usize) -> Result<Vec<bool>> {
    let expected = width * height;
    if data.len() < expected {
        return Err(Error::Truncated {
            expected,
            found: data.len(),
        });
    }
    Ok(data[..expected].iter().map(|&b| b != 0).collect())
}

/// Column-major generation to text rows.
pub fn encode_text(cells: &[bool], width: usize, height: usize) -> String {
    assert_eq!(cells.len(), width * height);
    let mut result = String::with_capacity((width + 1) * height);
    for y in 0..height {
        for x in 0..width {
            let c = if cells[x * height + y] {
                TEXT_ALIVE
            } else {
                TEXT_DEAD
            };
            result.push(c as char);
        }
        result.push('\n');
    }
    result
}

/// Reads `height` rows of `width` cells into a column-major generation.
///
/// A newline met where a cell is expected is skipped and the following
/// byte is used instead, so rows may be newline-terminated or not.
pub fn decode_text(data: &[u8], width: usize, height: usize) -> Result<Vec<bool>> {
    let expected = width * height;
    let mut cells = vec![false; expected];
    let mut bytes = data.iter().copied();
    let mut found = 0;
    for y in 0..height {
        for x in 0..width {
            let c = match bytes.next() {
                Some(b'\n') => bytes.next(),
                other => other,
            };
            let Some(c) = c else {
                return Err(Error::Truncated { expected, found });
            };
            cells[x * height + y] = c == TEXT_ALIVE;
            found += 1;
        }
    }
    Ok(cells)
}
