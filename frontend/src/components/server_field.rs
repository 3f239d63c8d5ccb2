use super::super::{Model, Msg};
use crate::camera::CapturedPhoto;
use shared::view::ScreenView;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_server_field(screen: &ScreenView<CapturedPhoto>, ctx: &Context<Model>) -> Html {
    let handle_input = ctx.link().callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::ServerAddressChanged(input.value())
    });

    html! {
        <div class="server-field">
            <label for="server-address">{"Dirección del servidor"}</label>
            <input
                id="server-address"
                type="text"
                inputmode="decimal"
                placeholder="192.168.1.5"
                value={screen.server_address.to_string()}
                oninput={handle_input}
            />
        </div>
    }
}
