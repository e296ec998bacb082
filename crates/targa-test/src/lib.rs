//! targa-test - Regression test framework for targa
//!
//! This crate provides a golden-file regression test framework supporting
//! three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! Test images are synthesized by the [`fixtures`] module rather than loaded
//! from disk.
//!
//! # Usage
//!
//! ```ignore
//! use targa_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("grayscale");
//! let mut raster = fixtures::solid(4, 4, [255, 255, 255, 255]);
//! targa_color::to_grayscale(&mut raster);
//! rp.compare_values(255.0, raster.data()[0] as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//! - `RUST_LOG`: Filter for library `tracing` output (e.g. `targa_color=debug`)

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call repeatedly; only the first call in a process installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // targa-test is at crates/targa-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
