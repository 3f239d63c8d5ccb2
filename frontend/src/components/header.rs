use crate::camera::CapturedPhoto;
use shared::view::ScreenView;
use yew::prelude::*;

/// Renders the application header
pub fn render_header(screen: &ScreenView<CapturedPhoto>) -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-camera"></i> {" "}{ screen.title }</h1>
            <p class="subtitle">{"Toma una foto y escucha lo que ve el modelo"}</p>
        </header>
    }
}
