//! Library exports for reuse in benchmarks and tests.
/// Application directory resolution.
pub mod app_dirs;
/// TOML settings.
pub mod config;
/// Session controller and egui renderer.
pub mod egui_app;
/// Shared HTTP plumbing.
pub mod http_client;
/// Image staging and data-URL helpers.
pub mod image_acquirer;
/// Logging setup.
pub mod logging;
/// Prediction records and identifiers.
pub mod prediction;
/// Classifier client.
pub mod prediction_gateway;
/// Sorting, filtering and pagination over predictions.
pub mod table;
/// Persisted theme preference.
pub mod theme_store;
