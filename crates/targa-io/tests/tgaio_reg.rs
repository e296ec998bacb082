//! TGA I/O regression test
//!
//! Round-trips synthetic images through memory and through files, and
//! checks the row-order contract against hand-built bottom-up files.

use targa_io::{read_image, read_image_mem, write_image, write_image_mem};
use targa_test::{RegParams, fixtures};

#[test]
fn tgaio_reg() {
    let mut rp = RegParams::new("tgaio");

    // --- Test 1: memory round trip preserves every byte ---
    let pixs = fixtures::gradient(37, 23);
    let bytes = write_image_mem(&pixs).expect("write_image_mem");
    rp.compare_values(18.0 + 37.0 * 23.0 * 4.0, bytes.len() as f64, 0.0);
    let pixd = read_image_mem(&bytes).expect("read_image_mem");
    rp.compare_raster(&pixs, &pixd);
    eprintln!("  memory round trip: {}x{}", pixd.width(), pixd.height());

    // --- Test 2: file round trip with partial alpha ---
    let mut pixa = fixtures::noise(16, 9, 7);
    for (i, px) in pixa.pixels_mut().enumerate() {
        px[3] = (i * 3 % 256) as u8;
    }
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("noise.tga");
    write_image(&pixa, &path).expect("write_image");
    let pixb = read_image(&path).expect("read_image");
    rp.compare_raster(&pixa, &pixb);

    // --- Test 3: writing twice gives identical bytes ---
    let again = write_image_mem(&pixb).expect("write_image_mem");
    let first = write_image_mem(&pixa).expect("write_image_mem");
    rp.compare_strings(&first, &again);

    // --- Test 4: golden output ---
    rp.write_raster_and_check(&pixs).expect("write_raster_and_check");

    assert!(rp.cleanup(), "tgaio regression test failed");
}

#[test]
fn tgaio_row_order_reg() {
    let mut rp = RegParams::new("tgaio_row_order");

    // A 2x3 file stored bottom-up: the first stored row must land at the
    // bottom of the raster.
    let mut data = vec![0u8; 18];
    data[2] = 2;
    data[12] = 2;
    data[14] = 3;
    data[16] = 24;
    for row in 0..3u8 {
        for _ in 0..2 {
            data.extend_from_slice(&[0, 0, row * 100]);
        }
    }
    let pix = read_image_mem(&data).expect("read bottom-up");
    rp.compare_values(200.0, pix.get_pixel(0, 0).unwrap()[0] as f64, 0.0);
    rp.compare_values(100.0, pix.get_pixel(1, 1).unwrap()[0] as f64, 0.0);
    rp.compare_values(0.0, pix.get_pixel(0, 2).unwrap()[0] as f64, 0.0);

    // Same pixels stored top-down decode to the same raster
    let mut flipped = data.clone();
    flipped[17] = 0x20;
    let body = flipped.split_off(18);
    for row in body.chunks_exact(6).rev() {
        flipped.extend_from_slice(row);
    }
    let pix2 = read_image_mem(&flipped).expect("read top-down");
    rp.compare_raster(&pix, &pix2);

    assert!(rp.cleanup(), "tgaio_row_order regression test failed");
}

#[test]
fn tgaio_errors_reg() {
    let mut rp = RegParams::new("tgaio_errors");

    let missing = read_image("/nonexistent/definitely/not/here.tga");
    rp.compare_values(1.0, if missing.is_err() { 1.0 } else { 0.0 }, 0.0);

    let short = read_image_mem(&[0u8; 10]);
    rp.compare_values(1.0, if short.is_err() { 1.0 } else { 0.0 }, 0.0);

    let mut zero = vec![0u8; 18];
    zero[2] = 2;
    zero[16] = 32;
    let zero_dims = read_image_mem(&zero);
    rp.compare_values(1.0, if zero_dims.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "tgaio_errors regression test failed");
}
