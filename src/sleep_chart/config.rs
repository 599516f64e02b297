//! Extraction configuration types

use crate::sleep_chart::common::error::{ExtractionError, Result};

pub const DEFAULT_GRID_SPACING_MINUTES: f64 = 120.0;
pub const DEFAULT_REM_SEARCH_HEIGHT: u32 = 5;

/// Configuration for sleep-stage extraction
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Minutes between two adjacent vertical gridlines
    pub grid_spacing_minutes: f64,
    /// Number of rows above the baseline searched for the REM bar (0 disables REM)
    pub rem_search_height: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            grid_spacing_minutes: DEFAULT_GRID_SPACING_MINUTES,
            rem_search_height: DEFAULT_REM_SEARCH_HEIGHT,
        }
    }
}

impl ExtractionConfig {
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.grid_spacing_minutes.is_finite() || self.grid_spacing_minutes <= 0.0 {
            return Err(ExtractionError::InvalidConfig(format!(
                "grid spacing must be a positive number of minutes, got {}",
                self.grid_spacing_minutes
            )));
        }
        Ok(())
    }
}

/// Builder for ExtractionConfig
#[derive(Default)]
pub struct ExtractionConfigBuilder {
    grid_spacing_minutes: Option<f64>,
    rem_search_height: Option<u32>,
}

impl ExtractionConfigBuilder {
    pub fn grid_spacing_minutes(mut self, minutes: f64) -> Self {
        self.grid_spacing_minutes = Some(minutes);
        self
    }
    
    pub fn rem_search_height(mut self, rows: u32) -> Self {
        self.rem_search_height = Some(rows);
        self
    }
    
    pub fn build(self) -> ExtractionConfig {
        let default = ExtractionConfig::default();
        ExtractionConfig {
            grid_spacing_minutes: self.grid_spacing_minutes.unwrap_or(default.grid_spacing_minutes),
            rem_search_height: self.rem_search_height.unwrap_or(default.rem_search_height),
        }
    }
}
