use crate::device_file_picker::interface::ImageFile;
use crate::image_classifier::interface::{ClassificationResult, ClassifyError, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::model_catalog::ModelId;
use reqwest::blocking::multipart::{Form, Part};
use std::sync::Arc;
use std::time::Duration;

/// Posts the image to the prediction server. No timeout: a request waits until
/// the server answers or the connection fails.
pub struct ImageClassifierHttp {
    client: reqwest::blocking::Client,
    predict_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierHttp {
    pub fn new(
        predict_url: impl Into<String>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| ClassifyError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            predict_url: predict_url.into(),
            logger: logger.with_namespace("image_classifier").with_namespace("http"),
        })
    }

    fn build_form(&self, model_id: ModelId, image: &ImageFile) -> Result<Form, ClassifyError> {
        let image_part = Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name.clone())
            .mime_str(&image.media_type)
            .map_err(|e| ClassifyError::InvalidRequest(e.to_string()))?;

        Ok(Form::new()
            .text("modelId", model_id.as_str())
            .part("image", image_part))
    }
}

impl ImageClassifier for ImageClassifierHttp {
    fn classify(
        &self,
        model_id: ModelId,
        image: &ImageFile,
    ) -> Result<ClassificationResult, ClassifyError> {
        let form = self.build_form(model_id, image)?;

        self.logger.info(&format!(
            "POST {} modelId={} image={} ({} bytes)",
            self.predict_url,
            model_id,
            image.file_name,
            image.bytes.len()
        ));

        let response = self
            .client
            .post(&self.predict_url)
            .multipart(form)
            .send()
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;
        let result = ClassificationResult::from_json(&body)?;

        self.logger.info(&format!(
            "Prediction: top_class={:?} probability={:?} raw_label={:?}",
            result.top_class, result.probability, result.raw_label
        ));

        Ok(result)
    }
}
