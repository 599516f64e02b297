//! Geometric calibration of a chart raster
//!
//! Locates the baseline row, the time origin and the gridline spacing, and derives the
//! minutes-per-pixel scale from them.

use image::RgbImage;
use tracing::debug;

use crate::sleep_chart::common::error::{ExtractionError, Result};
use crate::sleep_chart::palette::{is_baseline_gray, is_grid_gray};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Row on which baseline stages are read
    pub baseline_row: u32,
    /// Column at elapsed minute zero
    pub origin_column: u32,
    /// Distance between the first two gridlines, in pixels
    pub grid_spacing_pixels: u32,
    pub minutes_per_pixel: f64,
}

impl Calibration {
    /// Minute offset of column `x`, rounding ties to even.
    ///
    /// Columns left of the origin clamp to minute zero. `calibrate` rejects scales under
    /// which a column of the image would not fit in a `u32`.
    pub fn minute_at(&self, x: u32) -> u32 {
        let offset = x.saturating_sub(self.origin_column) as f64;
        (offset * self.minutes_per_pixel).round_ties_even() as u32
    }
}

/// Calibrates `image` for a chart whose gridlines are `grid_spacing_minutes` apart.
pub fn calibrate(image: &RgbImage, grid_spacing_minutes: f64) -> Result<Calibration> {
    let baseline_row = find_baseline_row(image)?;
    let origin_column = find_origin_column(image, baseline_row)?;
    let grid_spacing_pixels = find_grid_spacing(image)?;
    let minutes_per_pixel = grid_spacing_minutes / grid_spacing_pixels as f64;

    let last_offset = image.width().saturating_sub(1).saturating_sub(origin_column);
    let last_minute = (last_offset as f64 * minutes_per_pixel).round_ties_even();
    if last_minute > u32::MAX as f64 {
        return Err(ExtractionError::InvalidConfig(format!(
            "grid spacing of {} minutes puts the last column at minute {}, beyond {}",
            grid_spacing_minutes,
            last_minute,
            u32::MAX
        )));
    }

    debug!(
        baseline_row,
        origin_column,
        grid_spacing_pixels,
        minutes_per_pixel,
        "Chart calibrated"
    );

    Ok(Calibration {
        baseline_row,
        origin_column,
        grid_spacing_pixels,
        minutes_per_pixel,
    })
}

/// Median of all rows holding at least one baseline-gray pixel.
///
/// A thick baseline spans several rows; the median picks its middle.
fn find_baseline_row(image: &RgbImage) -> Result<u32> {
    let rows: Vec<u32> = image
        .enumerate_rows()
        .filter_map(|(y, mut row)| row.any(|(_, _, p)| is_baseline_gray(p)).then_some(y))
        .collect();

    median_row(&rows).ok_or(ExtractionError::BaselineNotFound)
}

/// Integer median of ascending row indices; an even count averages the middle pair and
/// truncates.
fn median_row(rows: &[u32]) -> Option<u32> {
    if rows.is_empty() {
        return None;
    }
    let mid = rows.len() / 2;
    if rows.len() % 2 == 1 {
        Some(rows[mid])
    } else {
        Some(((rows[mid - 1] as u64 + rows[mid] as u64) / 2) as u32)
    }
}

fn find_origin_column(image: &RgbImage, baseline_row: u32) -> Result<u32> {
    (0..image.width())
        .find(|&x| is_baseline_gray(image.get_pixel(x, baseline_row)))
        .ok_or(ExtractionError::NoBaselinePixelOnRow(baseline_row))
}

/// Pixel distance between the two leftmost gridline columns.
fn find_grid_spacing(image: &RgbImage) -> Result<u32> {
    let mut grid_columns = (0..image.width())
        .filter(|&x| (0..image.height()).any(|y| is_grid_gray(image.get_pixel(x, y))));

    match (grid_columns.next(), grid_columns.next()) {
        (Some(first), Some(second)) => Ok(second - first),
        (Some(_), None) => Err(ExtractionError::InsufficientGridLines(1)),
        _ => Err(ExtractionError::InsufficientGridLines(0)),
    }
}
