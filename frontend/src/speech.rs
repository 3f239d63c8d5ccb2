use crate::components::utils::js_error;
use async_trait::async_trait;
use shared::{SpeechAnnouncer, SpeechConfig, SpeechError};
use web_sys::SpeechSynthesisUtterance;

/// Web Speech API voice. `speak` only queues the utterance.
pub struct WebSpeech;

#[async_trait(?Send)]
impl SpeechAnnouncer for WebSpeech {
    async fn speak(&self, text: &str, config: &SpeechConfig) -> Result<(), SpeechError> {
        let synth = web_sys::window()
            .ok_or_else(|| SpeechError("no window".into()))?
            .speech_synthesis()
            .map_err(|e| SpeechError(js_error(e)))?;

        let utterance =
            SpeechSynthesisUtterance::new_with_text(text).map_err(|e| SpeechError(js_error(e)))?;
        utterance.set_lang(&config.language);
        utterance.set_pitch(config.pitch);
        utterance.set_rate(config.rate);

        synth.speak(&utterance);
        Ok(())
    }
}
