//! Canonical Bitcoin varint helpers
//!
//! Used to frame the custom data length in Sensible Unique outputs.

use byteorder::{LittleEndian, WriteBytesExt};

/// Byte length of the canonical varint encoding of `n`
///
/// # Examples
/// ```
/// use sensible_decoder::utils::varint::varint_len;
///
/// assert_eq!(varint_len(0), 1);
/// assert_eq!(varint_len(0xfc), 1);
/// assert_eq!(varint_len(0xfd), 3);
/// assert_eq!(varint_len(0xffff), 3);
/// assert_eq!(varint_len(0x10000), 5);
/// assert_eq!(varint_len(u32::MAX), 5);
/// ```
#[inline]
pub fn varint_len(n: u32) -> usize {
    if n < 0xfd {
        1
    } else if n <= 0xffff {
        3
    } else {
        5
    }
}

/// Append the canonical varint encoding of `n` to `out`
pub fn write_varint(out: &mut Vec<u8>, n: u32) {
    // Writes into a Vec cannot fail
    if n < 0xfd {
        out.push(n as u8);
    } else if n <= 0xffff {
        out.push(0xfd);
        let _ = out.write_u16::<LittleEndian>(n as u16);
    } else {
        out.push(0xfe);
        let _ = out.write_u32::<LittleEndian>(n);
    }
}
