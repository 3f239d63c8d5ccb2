pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod session;
pub mod speech;
pub mod view;

use serde::{Deserialize, Serialize};

/// One classification result returned by the inference server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub class_id: String,
    pub class_name: String,
    pub probability: f64,
}

impl Prediction {
    /// Probability as a percentage with two decimals, e.g. `93.21`. Ties round
    /// half up (`12.125` → `12.13`).
    pub fn percentage(&self) -> String {
        let hundredths = (self.probability * 100.0 * 100.0).round();
        format!("{:.2}", hundredths / 100.0)
    }
}

/// Body of a successful `POST /predict/` reply. Order is kept as received.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PredictionResponse {
    pub predictions: Vec<Prediction>,
}

pub use config::{AppConfig, CapturePolicy, SpeechConfig};
pub use controller::{ImageCapture, PredictionClient, SessionController, SpeechAnnouncer};
pub use error::{CaptureError, RequestError, SessionError, SpeechError};
pub use session::{Alert, Phase, SessionEvent, SessionState};
