//! What the screen displays, derived from `SessionState` alone.

use crate::config::CapturePolicy;
use crate::session::{Alert, SessionState};

pub const TITLE: &str = "Clasificador de imágenes";

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRow {
    pub class_name: String,
    pub percentage: String,
}

impl PredictionRow {
    pub fn label(&self) -> String {
        format!("{} — {}%", self.class_name, self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPanel {
    Loading,
    Predictions(Vec<PredictionRow>),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView<'a, I> {
    pub title: &'static str,
    pub server_address: &'a str,
    pub capture_enabled: bool,
    pub image: Option<&'a I>,
    pub results: ResultsPanel,
    pub alert: Option<Alert>,
}

impl<'a, I> ScreenView<'a, I> {
    pub fn from_state(state: &'a SessionState<I>, policy: CapturePolicy) -> Self {
        let results = if state.is_loading() {
            ResultsPanel::Loading
        } else if state.predictions.is_empty() {
            ResultsPanel::Empty
        } else {
            ResultsPanel::Predictions(
                state
                    .predictions
                    .iter()
                    .map(|p| PredictionRow {
                        class_name: p.class_name.clone(),
                        percentage: p.percentage(),
                    })
                    .collect(),
            )
        };

        Self {
            title: TITLE,
            server_address: &state.server_address,
            capture_enabled: state.accepts_capture(policy),
            image: state.image.as_ref(),
            results,
            alert: state.alert,
        }
    }
}
