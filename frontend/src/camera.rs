use crate::components::utils::js_error;
use async_trait::async_trait;
use crate::signal::FirstSignal;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{CaptureError, ImageCapture};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, HtmlInputElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

/// How long to wait for `change` after the page regains focus before treating
/// the dismissed picker as a cancel. Covers browsers without the `cancel` event.
const FOCUS_RETURN_GRACE_MS: u32 = 1_000;

/// A photo picked from the camera, with an object URL for the preview.
#[derive(Clone)]
pub struct CapturedPhoto {
    pub file: GlooFile,
    pub preview: Rc<ObjectUrl>,
}

impl CapturedPhoto {
    pub fn preview_url(&self) -> String {
        self.preview.to_string()
    }
}

/// Camera backed by `getUserMedia` for the permission prompt and a file input
/// with `capture="environment"` for the shot itself.
pub struct BrowserCamera;

#[async_trait(?Send)]
impl ImageCapture for BrowserCamera {
    type Image = CapturedPhoto;

    async fn request_permission(&self) -> bool {
        match open_and_release_camera().await {
            Ok(()) => true,
            Err(e) => {
                let name = e.dyn_ref::<DomException>().map(DomException::name);
                match name.as_deref() {
                    Some("NotAllowedError") | Some("SecurityError") => false,
                    // No camera or no media API: the file input can still pick a photo.
                    _ => {
                        log::warn!("Camera probe failed, continuing: {}", js_error(e));
                        true
                    }
                }
            }
        }
    }

    async fn capture(&self) -> Result<Option<CapturedPhoto>, CaptureError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CaptureError("no document available".into()))?;

        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(|e| CaptureError(js_error(e)))?
            .dyn_into()
            .map_err(|_| CaptureError("created element is not an input".into()))?;
        input.set_type("file");
        input.set_accept("image/*");
        input
            .set_attribute("capture", "environment")
            .map_err(|e| CaptureError(js_error(e)))?;

        let (signal, rx) = FirstSignal::<web_sys::File>::new();

        let _on_change = {
            let signal = signal.clone();
            let target = input.clone();
            EventListener::once(&input, "change", move |_| {
                signal.send(target.files().and_then(|files| files.get(0)));
            })
        };
        let _on_cancel = {
            let signal = signal.clone();
            EventListener::once(&input, "cancel", move |_| signal.send(None))
        };

        input.click();

        // The picker steals focus; once it comes back without a `change`, the
        // dialog was dismissed.
        let _on_focus_return = web_sys::window().map(|window| {
            let signal = signal.clone();
            EventListener::once(&window, "focus", move |_| {
                if signal.is_settled() {
                    return;
                }
                let signal = signal.clone();
                Timeout::new(FOCUS_RETURN_GRACE_MS, move || {
                    if !signal.is_settled() {
                        log::debug!("Picker closed without a file, treating as cancel");
                        signal.send(None);
                    }
                })
                .forget();
            })
        });

        let picked = rx.await.unwrap_or(None);
        let Some(file) = picked else {
            return Ok(None);
        };

        if !file.type_().starts_with("image/") {
            log::warn!("Skipping non-image file: {}", file.name());
            return Ok(None);
        }

        let file = GlooFile::from(file);
        let preview = Rc::new(ObjectUrl::from(file.clone()));
        Ok(Some(CapturedPhoto { file, preview }))
    }
}

async fn open_and_release_camera() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);

    let promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream: MediaStream = JsFuture::from(promise).await?.dyn_into()?;

    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
    Ok(())
}
