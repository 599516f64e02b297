//! Chart reader implementation using the `image` crate.
//!
//! The container format (PNG, BMP, GIF, ...) is guessed from the leading bytes. Whatever the
//! source color type, the result is flattened to 8-bit RGB so that palette values compare
//! exactly against the chart colors.

use tracing::debug;
use image::RgbImage;

use crate::sleep_chart::common::error::{Result, ExtractionError};
use crate::sleep_chart::raster::reader::ChartImageReader;

/// Chart reader backed by `image::load_from_memory`.
pub struct DecodedChartReader;

impl ChartImageReader for DecodedChartReader {
    /// Decodes chart bytes and converts them to RGB, dropping any alpha channel.
    ///
    /// # Returns
    ///
    /// * `Ok(RgbImage)` - Decoded raster
    /// * `Err(ExtractionError::DecodeError)` - Unknown format or corrupt data
    fn read_rgb(&self, data: &[u8]) -> Result<RgbImage> {
        debug!("Decoding chart image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ExtractionError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded.to_rgb8())
    }
}
