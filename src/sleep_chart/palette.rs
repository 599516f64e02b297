//! Fixed chart palette
//!
//! Charts are generated with these exact values; matching is by strict equality only.

use image::Rgb;

/// Horizontal baseline color, also the time axis origin marker.
pub const BASELINE_GRAY: Rgb<u8> = Rgb([200, 200, 200]);

/// Vertical gridline color.
pub const GRID_GRAY: Rgb<u8> = Rgb([128, 128, 128]);

pub const N1_COLOR: Rgb<u8> = Rgb([255, 255, 0]);
pub const N2_COLOR: Rgb<u8> = Rgb([0, 128, 0]);
pub const N3_COLOR: Rgb<u8> = Rgb([0, 128, 128]);

/// REM is drawn as a raised bar above the baseline, not on it.
pub const REM_COLOR: Rgb<u8> = Rgb([128, 0, 0]);

pub fn is_baseline_gray(pixel: &Rgb<u8>) -> bool {
    *pixel == BASELINE_GRAY
}

pub fn is_grid_gray(pixel: &Rgb<u8>) -> bool {
    *pixel == GRID_GRAY
}

pub fn is_rem(pixel: &Rgb<u8>) -> bool {
    *pixel == REM_COLOR
}
