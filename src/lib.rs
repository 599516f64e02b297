pub mod logger;
pub mod sleep_chart;
