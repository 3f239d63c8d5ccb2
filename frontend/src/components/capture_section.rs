use super::super::{Model, Msg};
use crate::camera::CapturedPhoto;
use shared::view::ScreenView;
use yew::prelude::*;

pub fn render_capture_section(screen: &ScreenView<CapturedPhoto>, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="upload-section">
            <button
                id="capture-button"
                class="analyze-btn"
                onclick={link.callback(|_| Msg::Capture)}
                disabled={!screen.capture_enabled}
            >
                <i class="fa-solid fa-camera"></i> {" Tomar foto"}
            </button>
        </div>
    }
}
