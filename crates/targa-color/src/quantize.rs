//! Color quantization
//!
//! Reduces the number of colors in an image in place:
//! - Uniform quantization (fixed bit allocation per channel)
//! - Populosity quantization (most frequent colors of a pre-quantized image)
//!
//! Alpha is never modified.

use crate::palette::Palette;
use crate::{ColorError, ColorResult};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use targa_core::Raster;

// =============================================================================
// Uniform Quantization
// =============================================================================

/// Options for uniform quantization
#[derive(Debug, Clone)]
pub struct UniformQuantOptions {
    /// Bits of red to keep (1..=8)
    pub red_bits: u8,
    /// Bits of green to keep (1..=8)
    pub green_bits: u8,
    /// Bits of blue to keep (1..=8)
    pub blue_bits: u8,
}

impl Default for UniformQuantOptions {
    /// 3-3-2 bits, 256 colors
    fn default() -> Self {
        Self {
            red_bits: 3,
            green_bits: 3,
            blue_bits: 2,
        }
    }
}

/// Mask keeping the top `bits` bits of a byte.
#[inline]
fn top_bits_mask(bits: u8) -> u8 {
    !((1u16 << (8 - bits)) - 1) as u8
}

fn check_bits(name: &str, bits: u8) -> ColorResult<()> {
    if bits == 0 || bits > 8 {
        return Err(ColorError::InvalidParameters(format!(
            "{} must be between 1 and 8, got {}",
            name, bits
        )));
    }
    Ok(())
}

fn apply_masks(raster: &mut Raster, masks: [u8; 3]) {
    for px in raster.pixels_mut() {
        px[0] &= masks[0];
        px[1] &= masks[1];
        px[2] &= masks[2];
    }
}

/// Quantize to 8 bits per pixel by keeping the top 3 bits of red, 3 of green
/// and 2 of blue.
///
/// White becomes `(224, 224, 192)`. The result has at most 256 distinct
/// colors and quantizing again changes nothing.
pub fn quant_uniform(raster: &mut Raster) {
    let opts = UniformQuantOptions::default();
    apply_masks(
        raster,
        [
            top_bits_mask(opts.red_bits),
            top_bits_mask(opts.green_bits),
            top_bits_mask(opts.blue_bits),
        ],
    );
}

/// Uniform quantization with a custom bit allocation.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if any bit count is outside
/// `1..=8`. The image is not modified in that case.
pub fn quant_uniform_with(raster: &mut Raster, options: &UniformQuantOptions) -> ColorResult<()> {
    check_bits("red_bits", options.red_bits)?;
    check_bits("green_bits", options.green_bits)?;
    check_bits("blue_bits", options.blue_bits)?;

    apply_masks(
        raster,
        [
            top_bits_mask(options.red_bits),
            top_bits_mask(options.green_bits),
            top_bits_mask(options.blue_bits),
        ],
    );
    Ok(())
}

// =============================================================================
// Populosity Quantization
// =============================================================================

/// Options for populosity quantization
#[derive(Debug, Clone)]
pub struct PopulosityOptions {
    /// Maximum palette size (1..=256)
    pub max_colors: usize,
    /// Bits per channel kept by the pre-quantization pass (1..=8)
    pub prequant_bits: u8,
}

impl Default for PopulosityOptions {
    fn default() -> Self {
        Self {
            max_colors: 256,
            prequant_bits: 5,
        }
    }
}

/// Quantize using the populosity algorithm with default options.
///
/// See [`quant_populosity_with`].
pub fn quant_populosity(raster: &mut Raster) -> ColorResult<Palette> {
    quant_populosity_with(raster, &PopulosityOptions::default())
}

/// Quantize using the populosity algorithm.
///
/// 1. Every channel is pre-quantized to `prequant_bits` bits.
/// 2. A histogram of the distinct pre-quantized colors is built.
/// 3. Colors are sorted by count, most frequent first. Equal counts keep the
///    order in which the colors first appear in a raster scan.
/// 4. The first `max_colors` colors form the palette. If the image has
///    fewer distinct colors the palette is shorter.
/// 5. Every pixel is replaced by its nearest palette color.
///
/// # Returns
///
/// The palette that was applied.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] for out-of-range options. The
/// image is not modified in that case.
pub fn quant_populosity_with(
    raster: &mut Raster,
    options: &PopulosityOptions,
) -> ColorResult<Palette> {
    if options.max_colors == 0 || options.max_colors > 256 {
        return Err(ColorError::InvalidParameters(format!(
            "max_colors must be between 1 and 256, got {}",
            options.max_colors
        )));
    }
    check_bits("prequant_bits", options.prequant_bits)?;

    let mask = top_bits_mask(options.prequant_bits);
    apply_masks(raster, [mask, mask, mask]);

    let palette = build_palette(raster, options.max_colors);
    if palette.len() < options.max_colors {
        tracing::debug!(
            distinct = palette.len(),
            requested = options.max_colors,
            "image has fewer colors than requested, palette reduced"
        );
    }

    // Nearest lookups are cached per distinct input color
    let mut cache: HashMap<[u8; 3], [u8; 3]> = HashMap::new();
    for px in raster.pixels_mut() {
        let rgb = [px[0], px[1], px[2]];
        let mapped = *cache
            .entry(rgb)
            .or_insert_with(|| palette.nearest_color(rgb).unwrap_or(rgb));
        px[..3].copy_from_slice(&mapped);
    }

    tracing::debug!(
        width = raster.width(),
        height = raster.height(),
        colors = palette.len(),
        "populosity quantization done"
    );

    Ok(palette)
}

/// Histogram the RGB colors of `raster` and keep the `max_colors` most
/// frequent ones.
fn build_palette(raster: &Raster, max_colors: usize) -> Palette {
    let mut index: HashMap<[u8; 3], usize> = HashMap::new();
    let mut histogram: Vec<([u8; 3], u32)> = Vec::new();

    for px in raster.pixels() {
        let rgb = [px[0], px[1], px[2]];
        match index.entry(rgb) {
            Entry::Occupied(e) => histogram[*e.get()].1 += 1,
            Entry::Vacant(e) => {
                e.insert(histogram.len());
                histogram.push((rgb, 1));
            }
        }
    }

    // Stable: equal counts stay in first-seen order
    histogram.sort_by(|a, b| b.1.cmp(&a.1));
    histogram.truncate(max_colors);

    Palette::new(histogram.into_iter().map(|(rgb, _)| rgb).collect())
}
