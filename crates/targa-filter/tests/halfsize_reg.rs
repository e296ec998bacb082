//! Half-size reduction regression test

use targa_filter::{FilterError, half_size, half_size_in_place};
use targa_test::{RegParams, fixtures};

#[test]
fn halfsize_reg() {
    let mut rp = RegParams::new("halfsize");

    // --- Test 1: 100x100 becomes 50x50, fully opaque ---
    let mut pixs = fixtures::gradient(100, 100);
    for px in pixs.pixels_mut() {
        px[3] = 17;
    }
    let pixd = half_size(&pixs).expect("half_size");
    rp.compare_values(50.0, pixd.width() as f64, 0.0);
    rp.compare_values(50.0, pixd.height() as f64, 0.0);
    let opaque = pixd.pixels().all(|p| p[3] == 255);
    rp.compare_values(1.0, if opaque { 1.0 } else { 0.0 }, 0.0);
    rp.write_raster_and_check(&pixd)
        .expect("write_raster_and_check");

    // --- Test 2: odd sizes round down ---
    let pixd = half_size(&fixtures::noise(33, 9, 4)).expect("half_size");
    rp.compare_values(16.0, pixd.width() as f64, 0.0);
    rp.compare_values(4.0, pixd.height() as f64, 0.0);

    // --- Test 3: interior of a uniform image is unchanged ---
    let pixd = half_size(&fixtures::solid(40, 40, [64, 128, 192, 255])).expect("half_size");
    let interior_ok = (1..20)
        .all(|y| (1..20).all(|x| pixd.get_pixel_unchecked(x, y) == [64, 128, 192, 255]));
    rp.compare_values(1.0, if interior_ok { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: the ramp stays a ramp ---
    let pixd = half_size(&fixtures::gray_ramp(64, 8)).expect("half_size");
    let row: Vec<u8> = (1..32).map(|x| pixd.get_pixel_unchecked(x, 2)[0]).collect();
    let monotone = row.windows(2).all(|w| w[0] <= w[1]);
    rp.compare_values(1.0, if monotone { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: in place and error cases ---
    let mut pix = fixtures::gradient(21, 14);
    half_size_in_place(&mut pix).expect("half_size_in_place");
    rp.compare_values(10.0, pix.width() as f64, 0.0);
    rp.compare_values(7.0, pix.height() as f64, 0.0);

    let mut line = fixtures::gray_ramp(30, 1);
    let before = line.clone();
    let rejected = matches!(
        half_size_in_place(&mut line),
        Err(FilterError::InvalidParameters(_))
    );
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
    rp.compare_raster(&before, &line);

    assert!(rp.cleanup(), "halfsize regression test failed");
}
