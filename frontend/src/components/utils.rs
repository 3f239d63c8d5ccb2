use super::super::{Model, Msg};
use crate::camera::CapturedPhoto;
use shared::view::ScreenView;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;
use yew::prelude::*;

/// Best-effort text for a thrown JS value.
pub fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Reads `?name=value` from the page URL.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

pub fn render_alert(screen: &ScreenView<CapturedPhoto>, ctx: &Context<Model>) -> Html {
    if let Some(alert) = screen.alert {
        html! {
            <div class={classes!("error-message", alert.to_string())} role="alert">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p><strong>{ alert.title() }</strong>{" "}{ alert.message() }</p>
                <button
                    class="remove-btn"
                    title="Cerrar"
                    onclick={ctx.link().callback(|_| Msg::DismissAlert)}
                >
                    <i class="fa-solid fa-times" style="font-size: 10px;"></i>
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
