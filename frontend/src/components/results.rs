use crate::camera::CapturedPhoto;
use shared::view::{PredictionRow, ResultsPanel, ScreenView};
use yew::prelude::*;

pub fn render_results(screen: &ScreenView<CapturedPhoto>) -> Html {
    match &screen.results {
        ResultsPanel::Loading => html! {
            <div class="results-loading">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p style="margin-left: 10px;">{"Analizando..."}</p>
            </div>
        },
        ResultsPanel::Predictions(rows) => html! {
            <div class="results-container">
                <h2>{"Predicciones"}</h2>
                <div class="result-bars">
                    { for rows.iter().map(render_row) }
                </div>
            </div>
        },
        ResultsPanel::Empty => html! {},
    }
}

fn render_row(row: &PredictionRow) -> Html {
    html! {
        <div class="result-item" title={row.label()}>
            <div class="result-label">{ &row.class_name }</div>
            <div class="result-bar-container">
                <div class="result-bar" style={format!("width: {}%", row.percentage)}></div>
            </div>
            <div class="result-value">{ format!("{}%", row.percentage) }</div>
        </div>
    }
}
