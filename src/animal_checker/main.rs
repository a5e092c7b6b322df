use crate::animal_checker::core::{init, transition, Effect, Model, Msg};
use crate::animal_checker::render::{render, View};
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::preview_store::interface::PreviewStore;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Wakes the UI after a worker thread posts a message.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

pub struct AnimalChecker {
    pub model: Model,
    pub msg_sender: Sender<Msg>,
    pub msg_receiver: Receiver<Msg>,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub preview_store: Arc<Mutex<dyn PreviewStore>>,
    pub notify: Notify,
}

impl AnimalChecker {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        preview_store: Arc<Mutex<dyn PreviewStore>>,
        notify: Notify,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();
        let (model, effects) = init();

        let mut animal_checker = Self {
            model,
            msg_sender,
            msg_receiver,
            logger: logger.with_namespace("animal_checker"),
            image_classifier,
            preview_store,
            notify,
        };
        animal_checker.interpret_effects(effects);
        animal_checker
    }

    pub fn update(&mut self, msg: Msg) {
        self.logger.info(&format!("msg: {:?}", msg));

        let (model, effects) = transition(std::mem::take(&mut self.model), msg);
        self.model = model;

        if !effects.is_empty() {
            self.logger.info(&format!("effects: {:?}", effects));
        }

        self.interpret_effects(effects);
    }

    /// Applies messages posted by effect threads since the last frame.
    pub fn poll(&mut self) {
        while let Ok(msg) = self.msg_receiver.try_recv() {
            self.update(msg);
        }
    }

    pub fn view(&self) -> View {
        render(&self.model)
    }

    fn interpret_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.interpret_effect(effect);
        }
    }
}

impl Drop for AnimalChecker {
    fn drop(&mut self) {
        self.update(Msg::Closed);
    }
}
