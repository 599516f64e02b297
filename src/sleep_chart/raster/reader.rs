use image::RgbImage;

use crate::sleep_chart::common::error::Result;

pub trait ChartImageReader {
    fn read_rgb(&self, data: &[u8]) -> Result<RgbImage>;
}
