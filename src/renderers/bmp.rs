//! 24-bit uncompressed BMP encoder.
//!
//! Layout: 14-byte file header, 40-byte BITMAPINFOHEADER, then pixel rows
//! bottom-up (last canvas row first), three equal bytes per pixel.
//! All multi-byte fields are little-endian.

use super::Encoder;
use super::canvas::Canvas;
use crate::config::RowPadding;

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
pub const BITS_PER_PIXEL: u16 = 24;
/// 72 DPI expressed in pixels per metre.
pub const PIXELS_PER_METRE: u32 = 2835;

const FOREGROUND: u8 = 0x00;
const BACKGROUND: u8 = 0xFF;

#[derive(Debug, Clone, Copy, Default)]
pub struct BmpEncoder {
    pub padding: RowPadding,
}

impl BmpEncoder {
    pub fn new(padding: RowPadding) -> Self {
        Self { padding }
    }

    /// Bytes per stored row, including any padding.
    pub fn row_stride(&self, width: usize) -> usize {
        let raw = width * 3;
        match self.padding {
            RowPadding::Strict => raw,
            RowPadding::Aligned => raw.div_ceil(4) * 4,
        }
    }

    /// Size of the pixel data section.
    pub fn image_size(&self, width: usize, height: usize) -> usize {
        self.row_stride(width) * height
    }

    /// Total number of bytes `encode` produces for a canvas of this size.
    pub fn encoded_len(&self, width: usize, height: usize) -> usize {
        PIXEL_DATA_OFFSET + self.image_size(width, height)
    }

    /// `encoded_len`, or `None` if the file would not fit the 32-bit size
    /// fields of the header.
    pub fn checked_encoded_len(&self, width: usize, height: usize) -> Option<u32> {
        let raw = width.checked_mul(3)?;
        let stride = match self.padding {
            RowPadding::Strict => raw,
            RowPadding::Aligned => raw.checked_next_multiple_of(4)?,
        };
        let total = stride.checked_mul(height)?.checked_add(PIXEL_DATA_OFFSET)?;
        u32::try_from(total).ok()
    }

    fn write_header(&self, out: &mut Vec<u8>, width: usize, height: usize) {
        let image_size = self.image_size(width, height) as u32;

        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(PIXEL_DATA_OFFSET as u32 + image_size).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(PIXEL_DATA_OFFSET as u32).to_le_bytes());

        out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
        out.extend_from_slice(&(width as i32).to_le_bytes());
        out.extend_from_slice(&(height as i32).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&image_size.to_le_bytes());
        out.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
        out.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
    }
}

impl Encoder for BmpEncoder {
    fn encode(&self, canvas: &Canvas) -> Vec<u8> {
        let (width, height) = (canvas.width(), canvas.height());
        let mut out = Vec::with_capacity(self.encoded_len(width, height));
        self.write_header(&mut out, width, height);

        let pad = self.row_stride(width) - width * 3;
        for row in canvas.rows().rev() {
            for &on in row {
                let v = if on { FOREGROUND } else { BACKGROUND };
                out.extend_from_slice(&[v, v, v]);
            }
            out.resize(out.len() + pad, 0);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_bmp.rs"]
mod tests;
