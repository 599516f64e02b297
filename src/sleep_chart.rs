//! Sleep-stage chart extraction module
//!
//! This module turns a rendered hypnogram image back into a timeline of stage changes,
//! with separate modules for decoding, calibration, column classification and reporting.

pub mod common;
pub mod raster;
pub mod palette;
pub mod calibration;
pub mod classify;
pub mod timeline;
pub mod config;
pub mod extractor;
pub mod report;


pub use common::{
    ExtractionError,
    Result,
};

pub use raster::{
    ChartImageReader,
    DecodedChartReader,
};

pub use calibration::{
    Calibration,
    calibrate,
};

pub use timeline::{
    SleepStage,
    StageChange,
    Timeline,
};

pub use config::{
    ExtractionConfig,
    ExtractionConfigBuilder,
};

pub use extractor::SleepStageExtractor;
