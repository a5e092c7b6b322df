use crate::device_file_picker::interface::ImageFile;
use crate::image_classifier::interface::{ClassificationResult, ClassifyError, ImageClassifier};
use crate::model_catalog::ModelId;
use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyCall {
    pub model_id: ModelId,
    pub file_name: String,
}

/// Replays scripted outcomes. With `hold_responses` each call blocks until
/// `release` is called, which keeps a request in flight for as long as a test
/// needs.
pub struct ImageClassifierFake {
    responses: Mutex<VecDeque<Result<ClassificationResult, ClassifyError>>>,
    calls: Mutex<Vec<ClassifyCall>>,
    gate: Mutex<Option<Receiver<()>>>,
    release_sender: Mutex<Option<Sender<()>>>,
}

impl ImageClassifierFake {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
            release_sender: Mutex::new(None),
        }
    }

    pub fn push_response(&self, response: Result<ClassificationResult, ClassifyError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn hold_responses(&self) {
        let (tx, rx) = channel();
        *self.gate.lock().unwrap() = Some(rx);
        *self.release_sender.lock().unwrap() = Some(tx);
    }

    pub fn release(&self) {
        if let Some(tx) = self.release_sender.lock().unwrap().as_ref() {
            let _ = tx.send(());
        }
    }

    pub fn calls(&self) -> Vec<ClassifyCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        model_id: ModelId,
        image: &ImageFile,
    ) -> Result<ClassificationResult, ClassifyError> {
        self.calls.lock().unwrap().push(ClassifyCall {
            model_id,
            file_name: image.file_name.clone(),
        });

        if let Some(gate) = self.gate.lock().unwrap().as_ref() {
            let _ = gate.recv();
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClassifyError::Transport("no scripted response".to_string())))
    }
}
