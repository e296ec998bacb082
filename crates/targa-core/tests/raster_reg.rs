//! Raster regression test
//!
//! Exercises construction, difference, stroke painting and row reversal on
//! synthetic images, and checks that painted output survives a TGA round
//! trip.

use targa_core::{Error, Raster, Stroke};
use targa_test::{RegParams, fixtures};

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    // --- Test 1: construction ---
    let pix = Raster::new(31, 17).expect("new");
    rp.compare_values(31.0, pix.width() as f64, 0.0);
    rp.compare_values(17.0, pix.height() as f64, 0.0);
    rp.compare_values((31 * 4) as f64, pix.stride() as f64, 0.0);
    let all_zero = pix.data().iter().all(|&b| b == 0);
    rp.compare_values(1.0, if all_zero { 1.0 } else { 0.0 }, 0.0);

    let bad = Raster::from_rgba(2, 2, vec![0; 15]);
    let rejected = matches!(bad, Err(Error::BufferSize { expected: 16, actual: 15 }));
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: reverse_rows twice is the identity ---
    let pixs = fixtures::gradient(20, 11);
    let flipped = pixs.reverse_rows();
    rp.compare_strings(pixs.row(0), flipped.row(10));
    rp.compare_raster(&pixs, &flipped.reverse_rows());

    assert!(rp.cleanup(), "raster regression test failed");
}

#[test]
fn difference_reg() {
    let mut rp = RegParams::new("difference");

    // --- Test 1: difference with itself is black ---
    let pixs = fixtures::noise(32, 24, 9);
    let mut pixd = pixs.clone();
    pixd.difference(&pixs).expect("difference");
    rp.compare_raster(&fixtures::solid(32, 24, [0, 0, 0, 255]), &pixd);

    // --- Test 2: difference is symmetric ---
    let other = fixtures::gradient(32, 24);
    let mut ab = pixs.clone();
    ab.difference(&other).expect("difference");
    let mut ba = other.clone();
    ba.difference(&pixs).expect("difference");
    rp.compare_raster(&ab, &ba);

    // --- Test 3: transparent pixels composite to black ---
    let clear = fixtures::solid(4, 4, [200, 100, 50, 0]);
    let mut pixd = fixtures::solid(4, 4, [10, 20, 30, 255]);
    pixd.difference(&clear).expect("difference");
    rp.compare_raster(&fixtures::solid(4, 4, [10, 20, 30, 255]), &pixd);

    // --- Test 4: mismatched sizes leave the target untouched ---
    let mut pixd = fixtures::gradient(16, 16);
    let result = pixd.difference(&fixtures::gradient(16, 15));
    let mismatch = matches!(
        result,
        Err(Error::DimensionMismatch {
            expected: (16, 16),
            actual: (16, 15)
        })
    );
    rp.compare_values(1.0, if mismatch { 1.0 } else { 0.0 }, 0.0);
    rp.compare_raster(&fixtures::gradient(16, 16), &pixd);

    // --- Test 5: pixel diff counting ---
    let a = fixtures::solid(8, 8, [1, 2, 3, 4]);
    let mut b = a.clone();
    b.set_pixel(3, 3, [9, 9, 9, 9]).expect("set_pixel");
    b.set_pixel(7, 0, [1, 2, 3, 5]).expect("set_pixel");
    rp.compare_values(2.0, a.count_pixel_diffs(&b).expect("count") as f64, 0.0);

    assert!(rp.cleanup(), "difference regression test failed");
}

#[test]
fn stroke_reg() {
    let mut rp = RegParams::new("stroke");

    let blue = [0, 0, 255, 255];
    let mut pixd = fixtures::solid(40, 30, [255, 255, 255, 255]);
    pixd.paint_stroke(&Stroke::new(20, 15, 5, blue));

    // --- Test 1: inside the disc ---
    rp.compare_strings(&blue, &pixd.get_pixel_unchecked(20, 15));
    rp.compare_strings(&blue, &pixd.get_pixel_unchecked(25, 15));
    rp.compare_strings(&blue, &pixd.get_pixel_unchecked(23, 19));

    // --- Test 2: the rim at distance^2 == 26 is blended ---
    rp.compare_strings(&[127, 127, 255, 255], &pixd.get_pixel_unchecked(25, 16));
    rp.compare_strings(&[127, 127, 255, 255], &pixd.get_pixel_unchecked(19, 10));

    // --- Test 3: outside untouched ---
    rp.compare_strings(&[255, 255, 255, 255], &pixd.get_pixel_unchecked(25, 17));
    rp.compare_strings(&[255, 255, 255, 255], &pixd.get_pixel_unchecked(26, 15));

    // --- Test 4: strokes hanging off the edge are clipped ---
    let mut edge = fixtures::solid(10, 10, [0, 0, 0, 255]);
    edge.paint_stroke(&Stroke::new(-2, 4, 3, blue));
    edge.paint_stroke(&Stroke::new(100, 100, 3, blue));
    rp.compare_strings(&blue, &edge.get_pixel_unchecked(0, 4));
    rp.compare_strings(&[0, 0, 0, 255], &edge.get_pixel_unchecked(2, 4));
    rp.compare_strings(&[0, 0, 0, 255], &edge.get_pixel_unchecked(9, 9));

    rp.write_raster_and_check(&pixd)
        .expect("write_raster_and_check");

    // --- Test 5: painted image survives the codec ---
    let bytes = targa_io::write_image_mem(&pixd).expect("write_image_mem");
    let loaded = targa_io::read_image_mem(&bytes).expect("read_image_mem");
    rp.compare_raster(&pixd, &loaded);

    assert!(rp.cleanup(), "stroke regression test failed");
}
