//! Per-column stage classification

use image::RgbImage;

use crate::sleep_chart::calibration::Calibration;
use crate::sleep_chart::palette::is_rem;
use crate::sleep_chart::timeline::{SleepStage, Timeline};

/// Stage read from one chart column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnReading {
    /// A stage color was found on the baseline or in the REM band.
    Stage(SleepStage),
    /// Nothing recognised; Wake once data has started, padding before that.
    Unmarked,
}

/// Classifies column `x`.
///
/// Baseline colors win over REM; the REM band is the `rem_search_height` rows directly
/// above the baseline, clipped at the top edge.
pub fn classify_column(
    image: &RgbImage,
    calibration: &Calibration,
    x: u32,
    rem_search_height: u32,
) -> ColumnReading {
    let baseline = calibration.baseline_row;

    if let Some(stage) = SleepStage::from_baseline_color(image.get_pixel(x, baseline)) {
        return ColumnReading::Stage(stage);
    }

    let band_top = baseline.saturating_sub(rem_search_height);
    if (band_top..baseline).any(|y| is_rem(image.get_pixel(x, y))) {
        return ColumnReading::Stage(SleepStage::Rem);
    }

    ColumnReading::Unmarked
}

/// Classifies every column from the origin to the right edge and compresses the result.
///
/// Unmarked columns before the first recognised stage are chart padding and are dropped;
/// after it they read as Wake, trailing ones included.
pub fn classify_columns(
    image: &RgbImage,
    calibration: &Calibration,
    rem_search_height: u32,
) -> Timeline {
    let mut timeline = Timeline::new();
    let mut data_seen = false;

    for x in calibration.origin_column..image.width() {
        let stage = match classify_column(image, calibration, x, rem_search_height) {
            ColumnReading::Stage(stage) => {
                data_seen = true;
                stage
            }
            ColumnReading::Unmarked if data_seen => SleepStage::Wake,
            ColumnReading::Unmarked => continue,
        };
        timeline.push_sample(calibration.minute_at(x), stage);
    }

    timeline
}
