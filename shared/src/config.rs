use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_ADDRESS: &str = "192.168.1.5";
pub const DEFAULT_PORT: u16 = 8720;
pub const DEFAULT_PREDICT_PATH: &str = "/predict/";

/// Voice settings handed to the speech engine with every utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub language: String,
    pub pitch: f32,
    pub rate: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: "es-ES".to_string(),
            pitch: 1.0,
            rate: 1.2,
        }
    }
}

/// Whether a capture may start while a request is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapturePolicy {
    /// The trigger stays live during loading; overlapping uploads race.
    #[default]
    Reentrant,
    /// Captures are refused unless the session is idle.
    IdleOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_server_address: String,
    pub port: u16,
    pub predict_path: String,
    pub speech: SpeechConfig,
    pub capture_policy: CapturePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            predict_path: DEFAULT_PREDICT_PATH.to_string(),
            speech: SpeechConfig::default(),
            capture_policy: CapturePolicy::default(),
        }
    }
}

impl AppConfig {
    /// Replaces the startup server address when `address` is non-blank.
    pub fn with_server_override(mut self, address: Option<&str>) -> Self {
        if let Some(address) = address.map(str::trim).filter(|a| !a.is_empty()) {
            self.default_server_address = address.to_string();
        }
        self
    }
}
