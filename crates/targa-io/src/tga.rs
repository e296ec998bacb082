//! TGA image format support
//!
//! Reads and writes Truevision TGA files.
//!
//! Supported on read:
//!
//! | Type | Meaning                  | Depths |
//! |------|--------------------------|--------|
//! | 2    | Uncompressed truecolor   | 24, 32 |
//! | 3    | Uncompressed grayscale   | 8      |
//! | 10   | RLE truecolor            | 24, 32 |
//! | 11   | RLE grayscale            | 8      |
//!
//! Writes are always uncompressed 32-bit truecolor with a bottom-left
//! origin.

use crate::{IoError, IoResult};
use std::io::{Read, Write};
use targa_core::Raster;
use targa_core::color::BYTES_PER_PIXEL;

/// TGA file header size
pub const TGA_HEADER_SIZE: usize = 18;

/// Descriptor bit: pixels are stored right to left
const DESC_RIGHT_TO_LEFT: u8 = 0x10;
/// Descriptor bit: first stored row is the top row
const DESC_TOP_TO_BOTTOM: u8 = 0x20;
/// Descriptor bits 0-3: alpha bits per pixel
const DESC_ALPHA_MASK: u8 = 0x0f;

/// TGA image type field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TgaImageType {
    /// Type 2
    Truecolor,
    /// Type 3
    Grayscale,
    /// Type 10
    RleTruecolor,
    /// Type 11
    RleGrayscale,
}

impl TgaImageType {
    fn from_code(code: u8) -> IoResult<Self> {
        match code {
            2 => Ok(Self::Truecolor),
            3 => Ok(Self::Grayscale),
            10 => Ok(Self::RleTruecolor),
            11 => Ok(Self::RleGrayscale),
            0 => Err(IoError::InvalidData("TGA file contains no image data".to_string())),
            1 | 9 => Err(IoError::UnsupportedFormat(
                "color-mapped TGA images are not supported".to_string(),
            )),
            other => Err(IoError::UnsupportedFormat(format!(
                "unknown TGA image type: {}",
                other
            ))),
        }
    }

    /// Numeric code written in the header.
    pub fn code(self) -> u8 {
        match self {
            Self::Truecolor => 2,
            Self::Grayscale => 3,
            Self::RleTruecolor => 10,
            Self::RleGrayscale => 11,
        }
    }

    /// Whether pixel data is run-length encoded.
    pub fn is_rle(self) -> bool {
        matches!(self, Self::RleTruecolor | Self::RleGrayscale)
    }

    fn is_gray(self) -> bool {
        matches!(self, Self::Grayscale | Self::RleGrayscale)
    }
}

/// Parsed TGA header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TgaHeader {
    /// Length of the image ID field that follows the header
    pub id_length: u8,
    /// Image type
    pub image_type: TgaImageType,
    /// Bytes of color map data to skip before the pixels
    pub colormap_bytes: usize,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Bits per pixel
    pub depth: u8,
    /// Image descriptor byte
    pub descriptor: u8,
}

impl TgaHeader {
    /// Parse and validate an 18-byte header.
    pub fn parse(bytes: &[u8; TGA_HEADER_SIZE]) -> IoResult<Self> {
        let id_length = bytes[0];
        let colormap_type = bytes[1];
        let image_type = TgaImageType::from_code(bytes[2])?;

        // A truecolor image may still carry a color map; it is skipped.
        let colormap_bytes = if colormap_type == 1 {
            let length = u16::from_le_bytes([bytes[5], bytes[6]]) as usize;
            let entry_bits = bytes[7] as usize;
            length * entry_bits.div_ceil(8)
        } else {
            0
        };

        let width = u16::from_le_bytes([bytes[12], bytes[13]]) as u32;
        let height = u16::from_le_bytes([bytes[14], bytes[15]]) as u32;
        let depth = bytes[16];
        let descriptor = bytes[17];

        if width == 0 || height == 0 {
            return Err(IoError::InvalidData(format!(
                "invalid TGA dimensions: {}x{}",
                width, height
            )));
        }

        let depth_ok = if image_type.is_gray() {
            depth == 8
        } else {
            depth == 24 || depth == 32
        };
        if !depth_ok {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported TGA bit depth {} for image type {}",
                depth,
                image_type.code()
            )));
        }

        Ok(Self {
            id_length,
            image_type,
            colormap_bytes,
            width,
            height,
            depth,
            descriptor,
        })
    }

    /// Bytes per stored pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        self.depth as usize / 8
    }

    /// Whether the first stored row is the top row of the image.
    pub fn top_to_bottom(&self) -> bool {
        self.descriptor & DESC_TOP_TO_BOTTOM != 0
    }

    /// Whether pixels within a row are stored right to left.
    pub fn right_to_left(&self) -> bool {
        self.descriptor & DESC_RIGHT_TO_LEFT != 0
    }

    /// Alpha bits per pixel declared by the descriptor.
    pub fn alpha_bits(&self) -> u8 {
        self.descriptor & DESC_ALPHA_MASK
    }
}

/// Read a TGA header without decoding pixels.
pub fn read_tga_header<R: Read>(mut reader: R) -> IoResult<TgaHeader> {
    let mut header = [0u8; TGA_HEADER_SIZE];
    reader.read_exact(&mut header).map_err(IoError::Io)?;
    TgaHeader::parse(&header)
}

/// Read a TGA image
///
/// The returned raster always has row 0 at the top, regardless of the
/// origin stored in the file.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] for color-mapped images or unsupported
///   depths
/// - [`IoError::InvalidData`] for malformed headers or RLE streams
/// - [`IoError::Io`] if the stream ends early
pub fn read_tga<R: Read>(mut reader: R) -> IoResult<Raster> {
    let mut header_bytes = [0u8; TGA_HEADER_SIZE];
    reader.read_exact(&mut header_bytes).map_err(IoError::Io)?;
    let header = TgaHeader::parse(&header_bytes)?;

    // Skip image ID and any color map
    let skip = header.id_length as usize + header.colormap_bytes;
    if skip > 0 {
        let mut skipped = vec![0u8; skip];
        reader.read_exact(&mut skipped).map_err(IoError::Io)?;
    }

    let bpp = header.bytes_per_pixel();
    let pixel_count = header.width as usize * header.height as usize;
    let stored = if header.image_type.is_rle() {
        decode_rle(&mut reader, pixel_count, bpp)?
    } else {
        let mut buf = vec![0u8; pixel_count * bpp];
        reader.read_exact(&mut buf).map_err(IoError::Io)?;
        buf
    };

    let mut data = Vec::with_capacity(pixel_count * BYTES_PER_PIXEL);
    for px in stored.chunks_exact(bpp) {
        let rgba = match bpp {
            1 => [px[0], px[0], px[0], 255],
            3 => [px[2], px[1], px[0], 255],
            _ => [px[2], px[1], px[0], px[3]],
        };
        data.extend_from_slice(&rgba);
    }

    let mut raster = Raster::from_rgba(header.width, header.height, data)?;

    if header.right_to_left() {
        for y in 0..raster.height() {
            let row = raster.row_mut(y);
            let n = row.len() / BYTES_PER_PIXEL;
            for x in 0..n / 2 {
                let (a, b) = (x * BYTES_PER_PIXEL, (n - 1 - x) * BYTES_PER_PIXEL);
                for c in 0..BYTES_PER_PIXEL {
                    row.swap(a + c, b + c);
                }
            }
        }
    }

    // Storage order is bottom-up unless the descriptor says otherwise
    if !header.top_to_bottom() {
        raster = raster.reverse_rows();
    }

    tracing::debug!(
        width = header.width,
        height = header.height,
        depth = header.depth,
        image_type = header.image_type.code(),
        "decoded TGA"
    );

    Ok(raster)
}

/// Decode a run-length encoded pixel stream.
///
/// Packets may span scanline boundaries. A packet that overruns the image
/// is an error.
fn decode_rle<R: Read>(reader: &mut R, pixel_count: usize, bpp: usize) -> IoResult<Vec<u8>> {
    let total = pixel_count * bpp;
    let mut out = Vec::with_capacity(total);
    let mut pixel = [0u8; 4];
    let mut packet = [0u8; 1];

    while out.len() < total {
        reader.read_exact(&mut packet).map_err(IoError::Io)?;
        let count = (packet[0] & 0x7f) as usize + 1;
        if out.len() + count * bpp > total {
            return Err(IoError::InvalidData(format!(
                "RLE packet of {} pixels overruns image",
                count
            )));
        }
        if packet[0] & 0x80 != 0 {
            reader
                .read_exact(&mut pixel[..bpp])
                .map_err(IoError::Io)?;
            for _ in 0..count {
                out.extend_from_slice(&pixel[..bpp]);
            }
        } else {
            let start = out.len();
            out.resize(start + count * bpp, 0);
            reader.read_exact(&mut out[start..]).map_err(IoError::Io)?;
        }
    }

    Ok(out)
}

/// Write a TGA image
///
/// Output is uncompressed 32-bit BGRA (type 2) with 8 alpha bits and a
/// bottom-left origin, so rows are emitted bottom-up.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if a dimension exceeds 65535, the
/// largest size a TGA header can hold.
pub fn write_tga<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "{}x{} exceeds the TGA size limit of 65535",
            width, height
        )));
    }

    let mut header = [0u8; TGA_HEADER_SIZE];
    header[2] = TgaImageType::Truecolor.code();
    header[12..14].copy_from_slice(&(width as u16).to_le_bytes());
    header[14..16].copy_from_slice(&(height as u16).to_le_bytes());
    header[16] = 32;
    header[17] = 8; // alpha bits, bottom-left origin
    writer.write_all(&header).map_err(IoError::Io)?;

    let mut row_buffer = vec![0u8; raster.stride()];
    for y in (0..height).rev() {
        for (dst, src) in row_buffer
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(raster.row(y).chunks_exact(BYTES_PER_PIXEL))
        {
            dst.copy_from_slice(&[src[2], src[1], src[0], src[3]]);
        }
        writer.write_all(&row_buffer).map_err(IoError::Io)?;
    }

    tracing::debug!(width, height, "encoded TGA");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(image_type: u8, w: u16, h: u16, depth: u8, desc: u8) -> Vec<u8> {
        let mut hdr = vec![0u8; TGA_HEADER_SIZE];
        hdr[2] = image_type;
        hdr[12..14].copy_from_slice(&w.to_le_bytes());
        hdr[14..16].copy_from_slice(&h.to_le_bytes());
        hdr[16] = depth;
        hdr[17] = desc;
        hdr
    }

    #[test]
    fn test_write_header_layout() {
        let raster = Raster::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let mut buf = Vec::new();
        write_tga(&raster, &mut buf).unwrap();
        assert_eq!(buf.len(), TGA_HEADER_SIZE + 8);
        assert_eq!(buf[2], 2);
        assert_eq!(&buf[12..16], &[2, 0, 1, 0]);
        assert_eq!(buf[16], 32);
        assert_eq!(buf[17], 8);
        // BGRA order
        assert_eq!(&buf[18..26], &[3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[test]
    fn test_write_is_bottom_up() {
        let raster = Raster::from_rgba(1, 2, vec![10, 10, 10, 255, 20, 20, 20, 255]).unwrap();
        let mut buf = Vec::new();
        write_tga(&raster, &mut buf).unwrap();
        // First stored row is the bottom row of the image
        assert_eq!(buf[18], 20);
        assert_eq!(buf[22], 10);
    }

    #[test]
    fn test_read_bottom_up_24bit() {
        let mut data = header(2, 1, 2, 24, 0);
        data.extend_from_slice(&[0, 0, 200]); // bottom row, BGR
        data.extend_from_slice(&[50, 0, 0]); // top row
        let raster = read_tga(&data[..]).unwrap();
        assert_eq!(raster.get_pixel(0, 0), Some([0, 0, 50, 255]));
        assert_eq!(raster.get_pixel(0, 1), Some([200, 0, 0, 255]));
    }

    #[test]
    fn test_read_top_down() {
        let mut data = header(2, 1, 2, 32, 0x28);
        data.extend_from_slice(&[1, 2, 3, 4]);
        data.extend_from_slice(&[5, 6, 7, 8]);
        let raster = read_tga(&data[..]).unwrap();
        assert_eq!(raster.get_pixel(0, 0), Some([3, 2, 1, 4]));
        assert_eq!(raster.get_pixel(0, 1), Some([7, 6, 5, 8]));
    }

    #[test]
    fn test_read_right_to_left() {
        let mut data = header(3, 3, 1, 8, 0x30);
        data.extend_from_slice(&[30, 20, 10]);
        let raster = read_tga(&data[..]).unwrap();
        assert_eq!(raster.channel(targa_core::Channel::Red), vec![10, 20, 30]);
    }

    #[test]
    fn test_read_grayscale() {
        let mut data = header(3, 2, 1, 8, 0x20);
        data.extend_from_slice(&[0, 128]);
        let raster = read_tga(&data[..]).unwrap();
        assert_eq!(raster.get_pixel(1, 0), Some([128, 128, 128, 255]));
    }

    #[test]
    fn test_read_rle_spanning_rows() {
        let mut data = header(10, 2, 2, 24, 0x20);
        // Run of 3 red pixels crossing the row boundary, then 1 raw blue
        data.extend_from_slice(&[0x82, 0, 0, 255]);
        data.extend_from_slice(&[0x00, 255, 0, 0]);
        let raster = read_tga(&data[..]).unwrap();
        assert_eq!(raster.get_pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(raster.get_pixel(1, 0), Some([255, 0, 0, 255]));
        assert_eq!(raster.get_pixel(0, 1), Some([255, 0, 0, 255]));
        assert_eq!(raster.get_pixel(1, 1), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_read_rle_overrun() {
        let mut data = header(11, 2, 1, 8, 0x20);
        data.extend_from_slice(&[0x85, 7]);
        assert!(matches!(read_tga(&data[..]), Err(IoError::InvalidData(_))));
    }

    #[test]
    fn test_skips_id_field() {
        let mut data = header(3, 1, 1, 8, 0x20);
        data[0] = 3;
        data.extend_from_slice(b"abc");
        data.push(42);
        let raster = read_tga(&data[..]).unwrap();
        assert_eq!(raster.get_pixel(0, 0), Some([42, 42, 42, 255]));
    }

    #[test]
    fn test_colormapped_rejected() {
        let data = header(1, 1, 1, 8, 0);
        assert!(matches!(
            read_tga(&data[..]),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_bad_depth_rejected() {
        let data = header(2, 1, 1, 16, 0);
        assert!(matches!(
            read_tga(&data[..]),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_truncated_is_io_error() {
        let mut data = header(2, 2, 2, 32, 0);
        data.extend_from_slice(&[0; 5]);
        assert!(matches!(read_tga(&data[..]), Err(IoError::Io(_))));
    }

    #[test]
    fn test_header_accessors() {
        let data = header(2, 4, 3, 32, 0x28);
        let hdr = read_tga_header(&data[..]).unwrap();
        assert_eq!((hdr.width, hdr.height), (4, 3));
        assert_eq!(hdr.bytes_per_pixel(), 4);
        assert!(hdr.top_to_bottom());
        assert!(!hdr.right_to_left());
        assert_eq!(hdr.alpha_bits(), 8);
    }
}
