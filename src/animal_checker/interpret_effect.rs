use super::main::AnimalChecker;
use crate::animal_checker::core::{Effect, Msg};
use std::sync::{Mutex, MutexGuard};

impl AnimalChecker {
    pub fn interpret_effect(&mut self, effect: Effect) {
        match effect {
            Effect::RevokePreview { id } => {
                lock(&self.preview_store).revoke(id);
            }
            Effect::CreatePreview { id, file } => {
                if let Err(e) = lock(&self.preview_store).create(id, &file) {
                    self.logger.warn(&format!("No preview for {}: {}", id, e));
                }
            }
            Effect::Classify { model_id, file } => {
                let image_classifier = self.image_classifier.clone();
                let msg_sender = self.msg_sender.clone();
                let notify = self.notify.clone();
                std::thread::spawn(move || {
                    let result = image_classifier.classify(model_id, &file);
                    if msg_sender.send(Msg::ClassifyDone(result)).is_ok() {
                        notify();
                    }
                });
            }
            Effect::LogError { detail } => {
                self.logger.error(&detail);
            }
        }
    }
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
