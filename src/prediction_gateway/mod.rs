//! Remote classifier access.
//!
//! The session controller only sees [`PredictionGateway`]; the HTTP client
//! in [`api`] is the production implementation.

pub mod api;
mod multipart;

pub use api::{DEFAULT_ENDPOINT, GatewayError, HttpPredictionGateway, parse_prediction_response};

use crate::image_acquirer::StagedImage;
use crate::prediction::Scores;

/// Classifies a staged image into normalized scores.
pub trait PredictionGateway: Send + Sync {
    /// Submit `image` once and return every score, absent classes as `0`.
    fn classify(&self, image: &StagedImage) -> Result<Scores, GatewayError>;
}
