//! Screen state and its transitions.
//!
//! `SessionState::apply` is the only way state changes: every capture, upload
//! and keystroke becomes a `SessionEvent` folded into a new value.

use crate::config::CapturePolicy;
use crate::error::RequestError;
use crate::{Prediction, PredictionResponse};
use strum::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// Visible alert currently raised on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Alert {
    PermissionDenied,
    RequestFailed,
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self {
            Alert::PermissionDenied => "Permiso denegado",
            Alert::RequestFailed => "Error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Alert::PermissionDenied => "Se necesita acceso a la cámara para tomar fotos.",
            Alert::RequestFailed => "No se pudo obtener la predicción. Inténtalo de nuevo.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent<I> {
    ServerAddressChanged(String),
    PermissionDenied,
    CaptureCancelled,
    CaptureCompleted(I),
    PredictionReceived(PredictionResponse),
    PredictionFailed(RequestError),
    AlertDismissed,
}

/// Everything the screen shows. `I` is the platform's handle to a captured image.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState<I> {
    pub image: Option<I>,
    pub predictions: Vec<Prediction>,
    pub phase: Phase,
    pub server_address: String,
    pub alert: Option<Alert>,
}

impl<I> Default for SessionState<I> {
    fn default() -> Self {
        SessionState::new(String::new())
    }
}

impl<I> SessionState<I> {
    pub fn new(server_address: impl Into<String>) -> Self {
        Self {
            image: None,
            predictions: Vec::new(),
            phase: Phase::Idle,
            server_address: server_address.into(),
            alert: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn accepts_capture(&self, policy: CapturePolicy) -> bool {
        match policy {
            CapturePolicy::Reentrant => true,
            CapturePolicy::IdleOnly => !self.is_loading(),
        }
    }

    pub fn apply(mut self, event: SessionEvent<I>) -> Self {
        match event {
            SessionEvent::ServerAddressChanged(address) => {
                self.server_address = address;
            }
            SessionEvent::PermissionDenied => {
                self.alert = Some(Alert::PermissionDenied);
            }
            SessionEvent::CaptureCancelled => {}
            SessionEvent::CaptureCompleted(image) => {
                // Previous predictions stay on screen until the new reply lands.
                self.image = Some(image);
                self.phase = Phase::Loading;
            }
            SessionEvent::PredictionReceived(response) => {
                self.predictions = response.predictions;
                self.phase = Phase::Idle;
            }
            SessionEvent::PredictionFailed(_) => {
                self.phase = Phase::Idle;
                self.alert = Some(Alert::RequestFailed);
            }
            SessionEvent::AlertDismissed => {
                self.alert = None;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(name: &str, probability: f64) -> Prediction {
        Prediction {
            class_id: name.len().to_string(),
            class_name: name.to_string(),
            probability,
        }
    }

    fn with_predictions(names: &[(&str, f64)]) -> SessionState<&'static str> {
        SessionState::new("192.168.1.5")
            .apply(SessionEvent::CaptureCompleted("first.jpg"))
            .apply(SessionEvent::PredictionReceived(PredictionResponse {
                predictions: names.iter().map(|(n, p)| prediction(n, *p)).collect(),
            }))
    }

    #[test]
    fn starts_idle_and_empty() {
        let state: SessionState<&str> = SessionState::new("10.0.0.1");
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.image.is_none());
        assert!(state.predictions.is_empty());
        assert!(state.alert.is_none());
        assert_eq!(state.server_address, "10.0.0.1");
    }

    #[test]
    fn capture_enters_loading_without_clearing_predictions() {
        let before = with_predictions(&[("gato", 0.9)]);
        let after = before
            .clone()
            .apply(SessionEvent::CaptureCompleted("second.jpg"));

        assert!(after.is_loading());
        assert_eq!(after.image, Some("second.jpg"));
        assert_eq!(after.predictions, before.predictions);
    }

    #[test]
    fn response_replaces_predictions_wholesale() {
        let state = with_predictions(&[("gato", 0.9), ("tigre", 0.1)])
            .apply(SessionEvent::CaptureCompleted("second.jpg"))
            .apply(SessionEvent::PredictionReceived(PredictionResponse {
                predictions: vec![prediction("perro", 0.7)],
            }));

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.predictions, vec![prediction("perro", 0.7)]);
    }

    #[test]
    fn failure_clears_loading_and_keeps_stale_predictions() {
        let before = with_predictions(&[("gato", 0.9)]);
        let state = before
            .clone()
            .apply(SessionEvent::CaptureCompleted("second.jpg"))
            .apply(SessionEvent::PredictionFailed(RequestError::Parse(
                "expected value".into(),
            )));

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.alert, Some(Alert::RequestFailed));
        assert_eq!(state.predictions, before.predictions);
        assert_eq!(state.image, Some("second.jpg"));
    }

    #[test]
    fn cancellation_is_a_no_op() {
        let before = with_predictions(&[("gato", 0.9)]);
        let after = before.clone().apply(SessionEvent::CaptureCancelled);
        assert_eq!(after, before);

        let loading = before.apply(SessionEvent::CaptureCompleted("second.jpg"));
        assert_eq!(
            loading.clone().apply(SessionEvent::CaptureCancelled),
            loading
        );
    }

    #[test]
    fn permission_denied_only_raises_alert() {
        let before = with_predictions(&[("gato", 0.9)]);
        let after = before.clone().apply(SessionEvent::PermissionDenied);
        assert_eq!(after.alert, Some(Alert::PermissionDenied));
        assert_eq!(after.predictions, before.predictions);
        assert_eq!(after.phase, before.phase);
        assert_eq!(after.image, before.image);

        let dismissed = after.apply(SessionEvent::AlertDismissed);
        assert_eq!(dismissed, before);
    }

    #[test]
    fn server_address_edits_apply_per_keystroke() {
        let mut state: SessionState<&str> = SessionState::new("");
        for partial in ["1", "10", "10.", "10.0"] {
            state = state.apply(SessionEvent::ServerAddressChanged(partial.to_string()));
            assert_eq!(state.server_address, partial);
        }
    }

    #[test]
    fn capture_policy_gates_only_when_idle_only() {
        let loading = SessionState::new("h").apply(SessionEvent::CaptureCompleted("a.jpg"));
        assert!(loading.accepts_capture(CapturePolicy::Reentrant));
        assert!(!loading.accepts_capture(CapturePolicy::IdleOnly));

        let idle: SessionState<&str> = SessionState::new("h");
        assert!(idle.accepts_capture(CapturePolicy::IdleOnly));
    }

    #[test]
    fn phase_and_alert_render_as_snake_case() {
        assert_eq!(Phase::Loading.as_ref(), "loading");
        assert_eq!(Alert::RequestFailed.to_string(), "request_failed");
    }
}
