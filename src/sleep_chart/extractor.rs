use tracing::{info, instrument};
use std::path::Path;

use image::RgbImage;

use crate::sleep_chart::{
    calibration::calibrate,
    classify::classify_columns,
    common::error::{ExtractionError, Result},
    config::ExtractionConfig,
    raster::{ChartImageReader, DecodedChartReader},
    timeline::Timeline,
};

pub struct SleepStageExtractor<R: ChartImageReader> {
    reader: R,
    config: ExtractionConfig,
}

impl SleepStageExtractor<DecodedChartReader> {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            reader: DecodedChartReader,
            config,
        }
    }
}

impl Default for SleepStageExtractor<DecodedChartReader> {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl<R: ChartImageReader> SleepStageExtractor<R> {
    pub fn with_custom(reader: R, config: ExtractionConfig) -> Self {
        Self {
            reader,
            config,
        }
    }

    /// Extracts the stage timeline from an already decoded raster.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn extract_image(&self, image: &RgbImage) -> Result<Timeline> {
        self.config.validate()?;
        self.extract_validated(image)
    }

    /// Decodes encoded chart bytes and extracts the stage timeline.
    ///
    /// The config is checked before any decoding happens.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn extract(&self, input_data: &[u8]) -> Result<Timeline> {
        self.config.validate()?;

        let image = {
            let _span = tracing::info_span!("decode_chart").entered();
            self.reader.read_rgb(input_data)?
        };

        self.extract_validated(&image)
    }

    fn extract_validated(&self, image: &RgbImage) -> Result<Timeline> {
        let calibration = {
            let _span = tracing::info_span!("calibrate").entered();
            calibrate(image, self.config.grid_spacing_minutes)?
        };

        let timeline = {
            let _span = tracing::info_span!("classify_columns",
                origin = calibration.origin_column,
                baseline = calibration.baseline_row
            ).entered();
            classify_columns(image, &calibration, self.config.rem_search_height)
        };

        info!(
            changes = timeline.len(),
            duration = ?timeline.total_duration(),
            "Extraction complete"
        );
        Ok(timeline)
    }

    #[instrument(skip(self, input_path))]
    pub fn extract_file<P: AsRef<Path>>(&self, input_path: P) -> Result<Timeline> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Extracting sleep stages");

        if !input_path.exists() {
            return Err(ExtractionError::InputNotFound(input_path.to_path_buf()));
        }

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ExtractionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.extract(&input_data)
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }
}
