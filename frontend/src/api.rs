use crate::camera::CapturedPhoto;
use crate::components::utils::js_error;
use async_trait::async_trait;
use gloo_file::Blob;
use gloo_net::http::Request;
use shared::client::{UPLOAD_FIELD, UPLOAD_FILENAME, UPLOAD_MIME_TYPE, endpoint_url, parse_response};
use shared::{AppConfig, PredictionClient, PredictionResponse, RequestError};

/// Uploads photos to the inference server with `fetch` and multipart form data.
pub struct HttpPredictionClient {
    config: AppConfig,
}

impl HttpPredictionClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl PredictionClient for HttpPredictionClient {
    type Image = CapturedPhoto;

    async fn submit(
        &self,
        image: &CapturedPhoto,
        server_address: &str,
    ) -> Result<PredictionResponse, RequestError> {
        // Re-wrap the bytes so the part is always sent as image/jpeg.
        let bytes = gloo_file::futures::read_as_bytes(&image.file)
            .await
            .map_err(|e| RequestError::Image(e.to_string()))?;
        let blob = Blob::new_with_options(bytes.as_slice(), Some(UPLOAD_MIME_TYPE));

        let form_data =
            web_sys::FormData::new().map_err(|e| RequestError::Image(js_error(e)))?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, blob.as_ref(), UPLOAD_FILENAME)
            .map_err(|e| RequestError::Image(js_error(e)))?;

        let url = endpoint_url(server_address, &self.config);
        log::debug!("POST {} ({} bytes)", url, bytes.len());

        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| RequestError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        parse_response(status, &body)
    }
}
