//! HTTP client for the classifier's `prediccion` endpoint.

use std::io;
use std::time::Instant;

use serde::Deserialize;
use tracing::{info, warn};

use super::PredictionGateway;
use super::multipart;
use crate::http_client;
use crate::image_acquirer::StagedImage;
use crate::prediction::{ScoreClass, Scores};

/// Endpoint used when the config does not name one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/prediccion/";
/// Multipart field the classifier reads the upload from.
pub const IMAGE_FIELD: &str = "imagen";

const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Failures surfaced by [`PredictionGateway::classify`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// A response arrived but was not a prediction envelope.
    #[error("Invalid classifier response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Stable error code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }
}

/// Posts uploads to a fixed classifier endpoint.
#[derive(Clone, Debug)]
pub struct HttpPredictionGateway {
    endpoint: String,
}

impl HttpPredictionGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpPredictionGateway {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl PredictionGateway for HttpPredictionGateway {
    fn classify(&self, image: &StagedImage) -> Result<Scores, GatewayError> {
        let body = multipart::encode_file_part(
            IMAGE_FIELD,
            image.file_name(),
            image.mime(),
            image.bytes(),
        );
        let started = Instant::now();
        info!(
            endpoint = %self.endpoint,
            bytes = body.bytes.len(),
            "Submitting image for classification"
        );

        let response = match http_client::agent()
            .post(&self.endpoint)
            .set("Accept", "application/json")
            .set("Content-Type", &body.content_type)
            .send_bytes(&body.bytes)
        {
            Ok(response) => response,
            // Error statuses still carry a JSON body worth decoding.
            Err(ureq::Error::Status(code, response)) => {
                warn!(status = code, "Classifier answered with an error status");
                response
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(GatewayError::Network(err.to_string()));
            }
        };

        let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES).map_err(
            |err| match err.kind() {
                io::ErrorKind::InvalidData => GatewayError::Decode(err.to_string()),
                _ => GatewayError::Network(err.to_string()),
            },
        )?;
        let scores = parse_prediction_response(&bytes)?;
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Classification finished"
        );
        Ok(scores)
    }
}

#[derive(Debug, Deserialize)]
struct PredictionEnvelope {
    predicciones: Option<ScoresWire>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct ScoresWire {
    bicycle: Option<f64>,
    cabinet: Option<f64>,
    chair: Option<f64>,
    #[serde(rename = "coffeMaker")]
    coffe_maker: Option<f64>,
    coffee_maker: Option<f64>,
    fan: Option<f64>,
    kettle: Option<f64>,
    lamp: Option<f64>,
    mug: Option<f64>,
    sofa: Option<f64>,
    stapler: Option<f64>,
    table: Option<f64>,
    toaster: Option<f64>,
}

impl From<ScoresWire> for Scores {
    fn from(wire: ScoresWire) -> Self {
        let value = |score: Option<f64>| score.unwrap_or(0.0);
        Scores::default()
            .with(ScoreClass::Bicycle, value(wire.bicycle))
            .with(ScoreClass::Cabinet, value(wire.cabinet))
            .with(ScoreClass::Chair, value(wire.chair))
            .with(
                ScoreClass::CoffeMaker,
                value(wire.coffe_maker.or(wire.coffee_maker)),
            )
            .with(ScoreClass::Fan, value(wire.fan))
            .with(ScoreClass::Kettle, value(wire.kettle))
            .with(ScoreClass::Lamp, value(wire.lamp))
            .with(ScoreClass::Mug, value(wire.mug))
            .with(ScoreClass::Sofa, value(wire.sofa))
            .with(ScoreClass::Stapler, value(wire.stapler))
            .with(ScoreClass::Table, value(wire.table))
            .with(ScoreClass::Toaster, value(wire.toaster))
    }
}

/// Decode a classifier body into normalized scores.
///
/// `coffeMaker` wins over `coffee_maker` when both are present. Missing or
/// `null` scores become `0`; present values pass through unchanged.
pub fn parse_prediction_response(body: &[u8]) -> Result<Scores, GatewayError> {
    let envelope: PredictionEnvelope = serde_json::from_slice(body).map_err(|err| {
        let preview = String::from_utf8_lossy(body);
        GatewayError::Decode(format!("{err}: {}", preview.trim()))
    })?;
    match envelope.predicciones {
        Some(scores) => Ok(scores.into()),
        None => {
            let reason = envelope
                .error
                .as_ref()
                .and_then(|error| error.as_str())
                .map(|message| format!("missing `predicciones` ({message})"))
                .unwrap_or_else(|| "missing `predicciones`".to_string());
            Err(GatewayError::Decode(reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::serve_once;
    use std::time::Duration;

    fn staged() -> StagedImage {
        StagedImage::from_bytes("cat.png", vec![0x89, b'P', b'N', b'G', 1, 2, 3]).unwrap()
    }

    fn json_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[test]
    fn parses_full_response_with_snake_case_alias() {
        let body = br#"{"predicciones":{"bicycle":0.1,"cabinet":0.2,"chair":0.3,"coffee_maker":0.4,"fan":0.5,"kettle":0.6,"lamp":0.7,"mug":0.8,"sofa":0.9,"stapler":0.1,"table":0.2,"toaster":0.3}}"#;
        let scores = parse_prediction_response(body).unwrap();
        assert_eq!(scores.get(ScoreClass::CoffeMaker), 0.4);
        assert_eq!(scores.get(ScoreClass::Bicycle), 0.1);
        assert_eq!(scores.get(ScoreClass::Sofa), 0.9);
        assert_eq!(scores.get(ScoreClass::Toaster), 0.3);
    }

    #[test]
    fn camel_case_name_takes_precedence() {
        let body = br#"{"predicciones":{"coffeMaker":0.7,"coffee_maker":0.2}}"#;
        let scores = parse_prediction_response(body).unwrap();
        assert_eq!(scores.get(ScoreClass::CoffeMaker), 0.7);

        let body = br#"{"predicciones":{"coffeMaker":0.7}}"#;
        let scores = parse_prediction_response(body).unwrap();
        assert_eq!(scores.get(ScoreClass::CoffeMaker), 0.7);
    }

    #[test]
    fn missing_and_null_scores_become_zero() {
        let body = br#"{"predicciones":{"chair":0.5,"lamp":null,"zebra":0.9}}"#;
        let scores = parse_prediction_response(body).unwrap();
        for (class, value) in scores.iter() {
            let expected = if class == ScoreClass::Chair { 0.5 } else { 0.0 };
            assert_eq!(value, expected, "{class}");
        }
    }

    #[test]
    fn values_are_not_clamped() {
        let body = br#"{"predicciones":{"mug":87.25}}"#;
        let scores = parse_prediction_response(body).unwrap();
        assert_eq!(scores.get(ScoreClass::Mug), 87.25);
    }

    #[test]
    fn missing_envelope_is_decode_error() {
        let body = r#"{"error":"No se encontró la imagen"}"#;
        let err = parse_prediction_response(body.as_bytes()).unwrap_err();
        assert_eq!(err.code(), "DECODE_ERROR");
        assert!(err.to_string().contains("No se encontró la imagen"));

        let err = parse_prediction_response(br#"{"predicciones":null}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn non_json_is_decode_error() {
        let err = parse_prediction_response(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
        let err = parse_prediction_response(br#"{"predicciones":{"chair":"high"}}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn classify_posts_multipart_image_field() {
        let (url, request) = serve_once(json_response(
            "200 OK",
            r#"{"predicciones":{"chair":0.5}}"#,
        ));
        let gateway = HttpPredictionGateway::new(format!("{url}/api/prediccion/"));
        let scores = gateway.classify(&staged()).unwrap();
        assert_eq!(scores.get(ScoreClass::Chair), 0.5);
        assert_eq!(scores.get(ScoreClass::Fan), 0.0);

        let request = request.recv_timeout(Duration::from_secs(5)).unwrap();
        let text = String::from_utf8_lossy(&request);
        assert!(text.starts_with("POST /api/prediccion/ HTTP/1.1"));
        assert!(text.contains("multipart/form-data; boundary="));
        assert!(text.contains("name=\"imagen\"; filename=\"cat.png\""));
        assert!(text.contains("Content-Type: image/png"));
    }

    #[test]
    fn error_status_body_is_decoded() {
        let (url, _request) = serve_once(json_response(
            "500 Internal Server Error",
            r#"{"error":"El modelo de predicción no está disponible."}"#,
        ));
        let gateway = HttpPredictionGateway::new(url);
        let err = gateway.classify(&staged()).unwrap_err();
        assert_eq!(err.code(), "DECODE_ERROR");
        assert!(err.to_string().contains("no está disponible"));
    }

    #[test]
    fn unreachable_endpoint_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let gateway = HttpPredictionGateway::new(format!("http://{addr}/api/prediccion/"));
        let err = gateway.classify(&staged()).unwrap_err();
        assert_eq!(err.code(), "NETWORK_ERROR");
    }
}
