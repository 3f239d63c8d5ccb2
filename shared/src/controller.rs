//! Capture → upload → display → speak.
//!
//! The controller owns the session state and the three platform capabilities.
//! All work runs on one logical thread; the state is never borrowed across an
//! `.await`, so a second capture may interleave with the first one.

use crate::config::{AppConfig, SpeechConfig};
use crate::error::{CaptureError, RequestError, SessionError, SpeechError};
use crate::session::{SessionEvent, SessionState};
use crate::speech::announcement;
use crate::{Prediction, PredictionResponse};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::cell::RefCell;

/// Camera access. `capture` yields `None` when the user backs out.
#[async_trait(?Send)]
pub trait ImageCapture {
    type Image: Clone;

    async fn request_permission(&self) -> bool;
    async fn capture(&self) -> Result<Option<Self::Image>, CaptureError>;
}

#[async_trait(?Send)]
pub trait PredictionClient {
    type Image;

    async fn submit(
        &self,
        image: &Self::Image,
        server_address: &str,
    ) -> Result<PredictionResponse, RequestError>;
}

#[async_trait(?Send)]
pub trait SpeechAnnouncer {
    async fn speak(&self, text: &str, config: &SpeechConfig) -> Result<(), SpeechError>;
}

type Observer<I> = Box<dyn Fn(SessionState<I>)>;

pub struct SessionController<C, P, S>
where
    C: ImageCapture,
{
    config: AppConfig,
    state: RefCell<SessionState<C::Image>>,
    camera: C,
    client: P,
    speaker: S,
    observer: RefCell<Option<Observer<C::Image>>>,
}

impl<C, P, S> SessionController<C, P, S>
where
    C: ImageCapture,
    P: PredictionClient<Image = C::Image>,
    S: SpeechAnnouncer,
{
    pub fn new(config: AppConfig, camera: C, client: P, speaker: S) -> Self {
        let state = SessionState::new(config.default_server_address.clone());
        Self {
            config,
            state: RefCell::new(state),
            camera,
            client,
            speaker,
            observer: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState<C::Image> {
        self.state.borrow().clone()
    }

    /// Registers the callback run with a fresh snapshot after every transition.
    pub fn subscribe(&self, observer: impl Fn(SessionState<C::Image>) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn set_server_address(&self, address: impl Into<String>) {
        self.dispatch(SessionEvent::ServerAddressChanged(address.into()));
    }

    pub fn dismiss_alert(&self) {
        self.dispatch(SessionEvent::AlertDismissed);
    }

    pub fn dispatch(&self, event: SessionEvent<C::Image>) {
        let current = self.state.take();
        self.state.replace(current.apply(event));

        let snapshot = self.state();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(snapshot);
        }
    }

    /// One full capture attempt. On success the predictions are already stored
    /// and announced when this returns.
    pub async fn capture(&self) -> Result<PredictionResponse, SessionError> {
        if !self.state.borrow().accepts_capture(self.config.capture_policy) {
            debug!("Capture ignored: a prediction is still in flight");
            return Err(SessionError::Busy);
        }

        if !self.camera.request_permission().await {
            warn!("Camera permission denied");
            self.dispatch(SessionEvent::PermissionDenied);
            return Err(SessionError::PermissionDenied);
        }

        let image = match self.camera.capture().await {
            Ok(Some(image)) => image,
            Ok(None) => {
                debug!("Capture cancelled by the user");
                self.dispatch(SessionEvent::CaptureCancelled);
                return Err(SessionError::CaptureCancelled);
            }
            Err(e) => {
                error!("{}", e);
                return Err(e.into());
            }
        };

        self.dispatch(SessionEvent::CaptureCompleted(image.clone()));

        // Read at upload time: edits made while the camera was open apply.
        let server_address = self.state.borrow().server_address.clone();
        info!("Uploading photo to {}", server_address);

        match self.client.submit(&image, &server_address).await {
            Ok(response) => {
                info!("Received {} predictions", response.predictions.len());
                self.dispatch(SessionEvent::PredictionReceived(response.clone()));
                self.announce(&response.predictions).await;
                Ok(response)
            }
            Err(e) => {
                warn!("Prediction request failed: {}", e);
                self.dispatch(SessionEvent::PredictionFailed(e.clone()));
                Err(e.into())
            }
        }
    }

    async fn announce(&self, predictions: &[Prediction]) {
        let Some(sentence) = announcement(predictions) else {
            return;
        };

        if let Err(e) = self.speaker.speak(&sentence, &self.config.speech).await {
            warn!("{}", e);
        }
    }
}
