use crate::animal_checker::core::Msg;
use crate::animal_checker::main::AnimalChecker;
use crate::animal_checker::render::{
    Feedback, PredictionPanel, View, CHOOSE_MODEL_LABEL, INTRO, PREVIEW_CAPTION, TITLE,
    UPLOAD_HINT, UPLOAD_LABEL,
};
use crate::device_file_picker::interface::FilePicker;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::preview_store::impl_egui::PreviewStoreEgui;
use eframe::egui;
use std::sync::{Arc, Mutex};

const PREVIEW_SIZE: f32 = 128.0;
const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(127, 29, 29);
const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(254, 226, 226);
const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
const PANEL_STROKE: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);

/// The window. Widgets turn clicks into `Msg`s; everything shown comes from
/// the `View` rendered for this frame.
pub struct AnimalCheckerGui {
    animal_checker: AnimalChecker,
    preview_store: Arc<Mutex<PreviewStoreEgui>>,
    file_picker: Box<dyn FilePicker>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl AnimalCheckerGui {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        file_picker: Box<dyn FilePicker>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let preview_store = Arc::new(Mutex::new(PreviewStoreEgui::new(cc.egui_ctx.clone())));
        let repaint_ctx = cc.egui_ctx.clone();
        let animal_checker = AnimalChecker::new(
            logger.clone(),
            image_classifier,
            preview_store.clone(),
            Arc::new(move || repaint_ctx.request_repaint()),
        );

        Self {
            animal_checker,
            preview_store,
            file_picker,
            logger: logger.with_namespace("gui"),
        }
    }

    fn pick_file(&self) -> Option<Msg> {
        match self.file_picker.pick_image() {
            Ok(file) => Some(Msg::FileSelected(file)),
            Err(e) => {
                self.logger.error(&format!("Could not load the chosen image: {}", e));
                None
            }
        }
    }

    fn draw(&self, ui: &mut egui::Ui, view: &View, msgs: &mut Vec<Msg>, pick_requested: &mut bool) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(egui::RichText::new(TITLE).strong().size(24.0));
            ui.add_space(4.0);
            ui.label(egui::RichText::new(INTRO).color(TEXT_MUTED));
        });
        ui.add_space(20.0);

        ui.label(egui::RichText::new(CHOOSE_MODEL_LABEL).strong());
        egui::ComboBox::from_id_source("model_select")
            .selected_text(view.selected_name)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for option in &view.model_options {
                    if ui.selectable_label(option.selected, option.name).clicked() && !option.selected
                    {
                        msgs.push(Msg::ModelSelected(option.id));
                    }
                }
            });
        ui.label(
            egui::RichText::new(view.selected_description)
                .small()
                .color(TEXT_MUTED),
        );
        ui.add_space(20.0);

        ui.label(egui::RichText::new(UPLOAD_LABEL).strong());
        if ui.button("Choose image…").clicked() {
            *pick_requested = true;
        }
        ui.label(egui::RichText::new(UPLOAD_HINT).small().color(TEXT_MUTED));

        if let Some(preview) = view.preview {
            let preview_store = match self.preview_store.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(texture) = preview_store.texture(preview) {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                            .fit_to_exact_size(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE))
                            .rounding(8.0),
                    );
                    ui.label(egui::RichText::new(PREVIEW_CAPTION).color(TEXT_MUTED));
                });
            }
        }
        ui.add_space(20.0);

        let submit = egui::Button::new(
            egui::RichText::new(view.submit.label)
                .strong()
                .color(PANEL_FILL),
        )
        .fill(ACCENT)
        .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add_enabled(view.submit.enabled, submit).clicked() {
            msgs.push(Msg::SubmitClicked);
        }

        match &view.feedback {
            None => {}
            Some(Feedback::Error(message)) => {
                ui.add_space(16.0);
                egui::Frame::none()
                    .fill(ERROR_FILL)
                    .rounding(8.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(message).color(ERROR_TEXT));
                    });
            }
            Some(Feedback::Prediction(panel)) => {
                ui.add_space(16.0);
                draw_prediction(ui, panel);
            }
        }
    }
}

fn draw_prediction(ui: &mut egui::Ui, panel: &PredictionPanel) {
    egui::Frame::none()
        .fill(PANEL_FILL)
        .stroke(egui::Stroke::new(1.0, PANEL_STROKE))
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Prediction").strong().size(18.0));
            ui.add_space(6.0);
            labeled(ui, "Model:", panel.model_name);
            labeled(ui, "Top class:", &panel.top_class);
            if let Some(confidence) = &panel.confidence {
                labeled(ui, "Confidence:", confidence);
            }
            if let Some(class_probabilities) = &panel.class_probabilities {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("All class probabilities:").strong().small());
                for line in class_probabilities {
                    ui.label(egui::RichText::new(format!("• {}", line)).small().color(TEXT_MUTED));
                }
            }
        });
}

fn labeled(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.label(value);
    });
}

impl eframe::App for AnimalCheckerGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.animal_checker.poll();

        let view = self.animal_checker.view();
        let mut msgs = vec![];
        let mut pick_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(720.0);
                self.draw(ui, &view, &mut msgs, &mut pick_requested);
            });
        });

        if pick_requested {
            msgs.extend(self.pick_file());
        }

        for msg in msgs {
            self.animal_checker.update(msg);
        }
    }
}
