use crate::camera::CapturedPhoto;
use shared::view::ScreenView;
use yew::prelude::*;

/// Latest captured photo, shown whether or not a request is in flight.
pub fn render_preview_area(screen: &ScreenView<CapturedPhoto>) -> Html {
    let Some(photo) = screen.image else {
        return html! {};
    };

    html! {
        <div id="preview-container">
            <img id="actual-image-preview"
                src={photo.preview_url()}
                alt="Foto capturada"
                style="max-width:100%; max-height: 400px; object-fit: contain; margin-bottom: 10px;" />
        </div>
    }
}
