mod api;
mod camera;
mod components;
mod signal;
mod speech;

use api::HttpPredictionClient;
use camera::{BrowserCamera, CapturedPhoto};
use components::capture_section::render_capture_section;
use components::header::render_header;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::server_field::render_server_field;
use components::utils::{query_param, render_alert};
use shared::view::ScreenView;
use shared::{AppConfig, SessionController, SessionState};
use speech::WebSpeech;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type Controller = SessionController<BrowserCamera, HttpPredictionClient, WebSpeech>;

// Yew msg components
pub enum Msg {
    Capture,
    ServerAddressChanged(String),
    DismissAlert,
    StateChanged(SessionState<CapturedPhoto>),
}

// Main component
pub struct Model {
    controller: Rc<Controller>,
    state: SessionState<CapturedPhoto>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = AppConfig::default().with_server_override(query_param("server").as_deref());
        log::info!("Default inference server: {}", config.default_server_address);

        let controller = Rc::new(SessionController::new(
            config.clone(),
            BrowserCamera,
            HttpPredictionClient::new(config),
            WebSpeech,
        ));

        let link = ctx.link().clone();
        controller.subscribe(move |state| link.send_message(Msg::StateChanged(state)));

        Self {
            state: controller.state(),
            controller,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Capture => {
                let controller = Rc::clone(&self.controller);
                spawn_local(async move {
                    if let Err(e) = controller.capture().await {
                        log::debug!("Capture ended without predictions: {}", e);
                    }
                });
                false
            }
            // The controller answers with `StateChanged`.
            Msg::ServerAddressChanged(address) => {
                self.controller.set_server_address(address);
                false
            }
            Msg::DismissAlert => {
                self.controller.dismiss_alert();
                false
            }
            Msg::StateChanged(state) => {
                self.state = state;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let screen = ScreenView::from_state(&self.state, self.controller.config().capture_policy);

        html! {
            <div class="container">
                { render_header(&screen) }

                <main class="main-content">
                { render_server_field(&screen, ctx) }
                { render_capture_section(&screen, ctx) }
                { render_alert(&screen, ctx) }
                { render_preview_area(&screen) }
                { render_results(&screen) }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
