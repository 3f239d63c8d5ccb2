use thiserror::Error;

/// Failures of a single upload to the inference server.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Could not read captured image: {0}")]
    Image(String),
}

/// The text-to-speech engine could not speak. Never shown to the user.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("speech unavailable: {0}")]
pub struct SpeechError(pub String);

/// The capture backend itself broke, as opposed to the user cancelling.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("camera capture failed: {0}")]
pub struct CaptureError(pub String);

/// Outcome of one capture attempt that did not end with predictions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("capture cancelled")]
    CaptureCancelled,
    #[error("a prediction request is already in flight")]
    Busy,
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl SessionError {
    /// Whether the failure should surface as a visible alert.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, SessionError::PermissionDenied | SessionError::Request(_))
    }
}
