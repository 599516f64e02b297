//! Chart raster decoding module
//!
//! This module provides format-agnostic decoding of chart images into 8-bit RGB rasters.

mod reader;
mod decoded_reader;

pub use reader::ChartImageReader;
pub use decoded_reader::DecodedChartReader;
