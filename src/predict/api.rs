//! Client for the remote prediction endpoint.

use serde::Deserialize;
use serde_json::Value;

use crate::config::EndpointConfig;
use crate::http_client;

use super::form::FormState;

const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Interpretation of the `prediction` field returned by the service.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionOutcome {
    /// The service classified the inputs as diabetic (`prediction == 1`).
    Positive,
    /// The service classified the inputs as non-diabetic (`prediction == 0`).
    Negative,
    /// Any other `prediction` value, carried verbatim for display. Strings
    /// are carried without quotes, other values in their JSON rendering.
    Other(String),
}

/// Failures while sending the request or interpreting the response.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The request could not be transmitted.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("Server error: HTTP {0}: {1}")]
    Status(u16, String),
    /// The response body could not be interpreted.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Wire shape of a prediction response. The service may attach extra fields
/// (the reference backend reports a cache `source`); only `prediction` counts.
#[derive(Debug, Deserialize)]
struct PredictionWire {
    prediction: Value,
}

/// Submit the full form to `{base_url}/predict` and interpret the response.
///
/// Blocking call intended for a worker thread. One attempt, no retries.
pub fn request_prediction(
    endpoint: &EndpointConfig,
    form: &FormState,
) -> Result<PredictionOutcome, PredictError> {
    let url = endpoint.predict_url();
    let request = http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match request.send_json(form) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response).unwrap_or_else(|err| err);
            return Err(PredictError::Status(code, body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body = read_body_limited(response).map_err(PredictError::Json)?;
    parse_prediction_body(&body)
}

fn parse_prediction_body(body: &str) -> Result<PredictionOutcome, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Json("Empty response body".to_string()));
    }
    let parsed: PredictionWire = serde_json::from_str(trimmed)
        .map_err(|err| PredictError::Json(format!("{err}: {trimmed}")))?;

    Ok(match parsed.prediction {
        Value::Number(ref number) if number.as_f64() == Some(1.0) => PredictionOutcome::Positive,
        Value::Number(ref number) if number.as_f64() == Some(0.0) => PredictionOutcome::Negative,
        Value::String(text) => PredictionOutcome::Other(text),
        other => PredictionOutcome::Other(other.to_string()),
    })
}

fn read_body_limited(response: ureq::Response) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_one_to_positive() {
        let outcome = parse_prediction_body(r#"{ "prediction": 1 }"#).unwrap();
        assert_eq!(outcome, PredictionOutcome::Positive);
    }

    #[test]
    fn maps_zero_to_negative() {
        let outcome = parse_prediction_body(r#"{ "prediction": 0 }"#).unwrap();
        assert_eq!(outcome, PredictionOutcome::Negative);
    }

    #[test]
    fn carries_unrecognized_string_verbatim() {
        let outcome = parse_prediction_body(r#"{ "prediction": "maybe" }"#).unwrap();
        assert_eq!(outcome, PredictionOutcome::Other("maybe".to_string()));
    }

    #[test]
    fn accepts_float_classifications() {
        let outcome = parse_prediction_body(r#"{ "prediction": 1.0 }"#).unwrap();
        assert_eq!(outcome, PredictionOutcome::Positive);
        let outcome = parse_prediction_body(r#"{ "prediction": 0.0 }"#).unwrap();
        assert_eq!(outcome, PredictionOutcome::Negative);
    }

    #[test]
    fn renders_unrecognized_numbers_as_json() {
        let outcome = parse_prediction_body(r#"{ "prediction": 2 }"#).unwrap();
        assert_eq!(outcome, PredictionOutcome::Other("2".to_string()));
    }

    #[test]
    fn ignores_extra_response_fields() {
        let outcome =
            parse_prediction_body(r#"{ "prediction": 1, "source": "cache" }"#).unwrap();
        assert_eq!(outcome, PredictionOutcome::Positive);
    }

    #[test]
    fn missing_prediction_field_is_a_parse_failure() {
        let err = parse_prediction_body(r#"{ "source": "model" }"#).unwrap_err();
        assert!(matches!(err, PredictError::Json(_)));
    }

    #[test]
    fn malformed_body_is_a_parse_failure() {
        let err = parse_prediction_body("not json at all").unwrap_err();
        assert!(matches!(err, PredictError::Json(_)));
    }

    #[test]
    fn empty_body_is_a_parse_failure() {
        let err = parse_prediction_body("   ").unwrap_err();
        assert!(matches!(err, PredictError::Json(_)));
    }
}
