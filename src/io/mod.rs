/// Command-line interface driving single generation runs
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types for validation and ambient I/O failures
pub mod error;
/// PNG export of finished grids
pub mod image;
/// Progress reporting for interactive runs
pub mod progress;
