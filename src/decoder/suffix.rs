//! Bounds-checked, end-relative reads over a locking script
//!
//! Sensible layouts are defined by offsets from the end of the script. Every
//! sub-decoder goes through `ScriptSuffix` so that no offset arithmetic can
//! underflow or index past the script, whatever the minimum-length gate is.

use super::error::{DecoderError, DecoderResult};
use byteorder::{ByteOrder, LittleEndian};

/// Read-only view of a locking script addressed from its end
#[derive(Debug, Clone, Copy)]
pub struct ScriptSuffix<'a> {
    script: &'a [u8],
}

impl<'a> ScriptSuffix<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self { script }
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Absolute offset `len - back`, or `None` when `back > len`
    pub fn offset_back(&self, back: usize) -> Option<usize> {
        self.script.len().checked_sub(back)
    }

    /// Byte at `len - back`; `byte_back(1)` is the final byte
    pub fn byte_back(&self, back: usize) -> Option<u8> {
        if back == 0 {
            return None;
        }
        let offset = self.offset_back(back)?;
        self.script.get(offset).copied()
    }

    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        self.script.ends_with(suffix)
    }

    /// `width` bytes starting at absolute `offset`
    pub fn slice(&self, offset: usize, width: usize) -> DecoderResult<&'a [u8]> {
        offset
            .checked_add(width)
            .and_then(|end| self.script.get(offset..end))
            .ok_or(DecoderError::Truncated {
                offset,
                width,
                len: self.script.len(),
            })
    }

    /// Fixed-width copy starting at absolute `offset`
    pub fn array<const N: usize>(&self, offset: usize) -> DecoderResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.slice(offset, N)?);
        Ok(out)
    }

    pub fn u8_at(&self, offset: usize) -> DecoderResult<u8> {
        Ok(self.slice(offset, 1)?[0])
    }

    pub fn u32_le(&self, offset: usize) -> DecoderResult<u32> {
        Ok(LittleEndian::read_u32(self.slice(offset, 4)?))
    }

    pub fn u64_le(&self, offset: usize) -> DecoderResult<u64> {
        Ok(LittleEndian::read_u64(self.slice(offset, 8)?))
    }

    /// Script bytes preceding the protocol-data suffix of `data_len` bytes
    pub fn prefix(&self, data_len: usize) -> DecoderResult<&'a [u8]> {
        let end = self.offset_back(data_len).ok_or(DecoderError::Truncated {
            offset: 0,
            width: data_len,
            len: self.script.len(),
        })?;
        Ok(&self.script[..end])
    }

    /// Absolute offset `len - back`, as a decoding error when out of range
    pub fn require_offset_back(&self, back: usize) -> DecoderResult<usize> {
        self.offset_back(back).ok_or(DecoderError::Truncated {
            offset: 0,
            width: back,
            len: self.script.len(),
        })
    }
}

/// Fixed-width text field with trailing NUL padding removed
///
/// Only trailing NULs are stripped; embedded NULs and non-UTF-8 bytes survive.
pub fn trim_nul_padded(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != 0)
        .map(|pos| pos + 1)
        .unwrap_or(0);
    &bytes[..end]
}
