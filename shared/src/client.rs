//! Wire contract of the inference server, independent of the HTTP stack.

use crate::PredictionResponse;
use crate::config::AppConfig;
use crate::error::RequestError;

/// Multipart part carrying the photo.
pub const UPLOAD_FIELD: &str = "file";
pub const UPLOAD_FILENAME: &str = "photo.jpg";
pub const UPLOAD_MIME_TYPE: &str = "image/jpeg";

/// `http://{address}:{port}{path}`. The address is only trimmed, never validated.
pub fn endpoint_url(server_address: &str, config: &AppConfig) -> String {
    format!(
        "http://{}:{}{}",
        server_address.trim(),
        config.port,
        config.predict_path
    )
}

/// Turns a raw HTTP reply into predictions. Non-2xx statuses are errors even
/// when the body happens to be valid JSON.
pub fn parse_response(status: u16, body: &str) -> Result<PredictionResponse, RequestError> {
    if !(200..300).contains(&status) {
        return Err(RequestError::Status {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str::<PredictionResponse>(body)
        .map_err(|e| RequestError::Parse(e.to_string()))
}
