//! Application constants and configuration

pub const APP_NAME: &str = "Unit Converter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "unit-converter.log";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Decimal places shown for input and result
pub const DEFAULT_DECIMALS: usize = 2;
pub const MAX_DECIMALS: usize = 6;

pub const WINDOW_SIZE: [f32; 2] = [520.0, 360.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [440.0, 320.0];
