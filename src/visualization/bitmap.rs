//! Uncompressed Windows bitmap encoder
//!
//! Layout: 14-byte file header + 40-byte BITMAPINFOHEADER, no palette, then
//! the pixel rows. The height is stored negative so rows go top to bottom,
//! pixels are written BGR (BGRA for 32 bpp) and every row is zero-padded to a
//! multiple of four bytes. All integers are little-endian.

use std::io::{self, Write};

use super::canvas::Canvas;

pub const HEADER_SIZE: u32 = 54;
const DIB_HEADER_SIZE: u32 = 40;

/// Zero bytes appended to each row
pub fn row_padding(width: usize, channels: usize) -> usize {
    (4 - (width * channels) % 4) % 4
}

/// Size of the pixel array, `None` when the whole file would not fit the
/// 32-bit size fields of the header
pub fn data_size(width: usize, height: usize, channels: usize) -> Option<u32> {
    let row_bytes = width
        .checked_mul(channels)?
        .checked_add(row_padding(width, channels))?;
    let size = u32::try_from(height.checked_mul(row_bytes)?).ok()?;
    size.checked_add(HEADER_SIZE)?;
    Some(size)
}

/// The 54-byte header for `canvas`
pub fn header(canvas: &Canvas) -> io::Result<[u8; HEADER_SIZE as usize]> {
    let channels = canvas.channels();
    let too_large = || {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}x{} canvas does not fit in a bitmap", canvas.width(), canvas.height()),
        )
    };
    let data_size = data_size(canvas.width(), canvas.height(), channels).ok_or_else(too_large)?;
    let width = i32::try_from(canvas.width()).map_err(|_| too_large())?;
    let height = i32::try_from(canvas.height()).map_err(|_| too_large())?;

    let mut h = [0u8; HEADER_SIZE as usize];
    h[0..2].copy_from_slice(b"BM");
    h[2..6].copy_from_slice(&(HEADER_SIZE + data_size).to_le_bytes());
    // 6..10 reserved
    h[10..14].copy_from_slice(&HEADER_SIZE.to_le_bytes());
    h[14..18].copy_from_slice(&DIB_HEADER_SIZE.to_le_bytes());
    h[18..22].copy_from_slice(&width.to_le_bytes());
    h[22..26].copy_from_slice(&(-height).to_le_bytes());
    h[26..28].copy_from_slice(&1u16.to_le_bytes()); // color planes
    h[28..30].copy_from_slice(&((channels * 8) as u16).to_le_bytes());
    // 30..34 compression = 0
    h[34..38].copy_from_slice(&data_size.to_le_bytes());
    // 38..54 resolution and palette counts, all zero
    Ok(h)
}

/// Write `canvas` as a complete bitmap file
pub fn write_bmp<W: Write>(canvas: &Canvas, out: &mut W) -> io::Result<()> {
    out.write_all(&header(canvas)?)?;

    let channels = canvas.channels();
    let padding = row_padding(canvas.width(), channels);
    let mut line = Vec::with_capacity(canvas.width() * channels + padding);

    for y in 0..canvas.height() {
        line.clear();
        for px in canvas.row(y).chunks(channels) {
            // RGB(A) -> BGR(A)
            line.extend_from_slice(&[px[2], px[1], px[0]]);
            if channels == 4 {
                line.push(px[3]);
            }
        }
        line.resize(line.len() + padding, 0);
        out.write_all(&line)?;
    }
    out.flush()
}

/// Encode into memory
pub fn encode(canvas: &Canvas) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_bmp(canvas, &mut bytes)?;
    Ok(bytes)
}
