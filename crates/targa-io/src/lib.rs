//! targa-io - Image I/O for targa
//!
//! Loads and saves [`Raster`] images as Truevision TGA files.
//!
//! # Row order
//!
//! TGA files usually store the bottom row first. Decoding flips rows exactly
//! once so that row 0 of the returned raster is the top of the image, and
//! encoding flips exactly once back. No other crate performs row reversal.

mod error;
pub mod tga;

pub use error::{IoError, IoResult};
pub use tga::{TgaHeader, TgaImageType, read_tga, read_tga_header, write_tga};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use targa_core::Raster;

/// Read a TGA image from a file path
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path.as_ref()).map_err(IoError::Io)?;
    read_tga(BufReader::new(file))
}

/// Read a TGA image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    read_tga(data)
}

/// Write a TGA image to a file path
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref()).map_err(IoError::Io)?;
    let mut writer = BufWriter::new(file);
    write_tga(raster, &mut writer)?;
    writer.flush().map_err(IoError::Io)?;
    Ok(())
}

/// Write a TGA image to memory
pub fn write_image_mem(raster: &Raster) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(tga::TGA_HEADER_SIZE + raster.data().len());
    write_tga(raster, &mut buffer)?;
    Ok(buffer)
}
