use crate::animal_checker::core::{Model, RequestState};
use crate::image_classifier::interface::ClassificationResult;
use crate::model_catalog::{self, ModelId};
use crate::preview_store::interface::PreviewId;

pub const TITLE: &str = "Hello there, welcome to the Animal Checker 🐾";
pub const INTRO: &str =
    "Choose a model, upload an image of an animal, and we’ll tell you what it is.";
pub const CHOOSE_MODEL_LABEL: &str = "1. Choose a model";
pub const UPLOAD_LABEL: &str = "2. Upload an animal image";
pub const UPLOAD_HINT: &str = "JPG, PNG, etc.";
pub const PREVIEW_CAPTION: &str = "Preview of the uploaded image.";
pub const SUBMIT_LABEL: &str = "3. Check Animal";
pub const SUBMIT_BUSY_LABEL: &str = "Checking...";
pub const UNKNOWN_CLASS: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct ModelOption {
    pub id: ModelId,
    pub name: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPanel {
    pub model_name: &'static str,
    pub top_class: String,
    pub confidence: Option<String>,
    pub class_probabilities: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Error(String),
    Prediction(PredictionPanel),
}

/// Everything the window shows, derived from the model alone.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub model_options: Vec<ModelOption>,
    pub selected_name: &'static str,
    pub selected_description: &'static str,
    pub preview: Option<PreviewId>,
    pub submit: SubmitButton,
    pub feedback: Option<Feedback>,
}

pub fn render(model: &Model) -> View {
    let selected = model_catalog::find(model.selected_model);

    let model_options = model_catalog::all()
        .iter()
        .map(|descriptor| ModelOption {
            id: descriptor.id,
            name: descriptor.name,
            selected: descriptor.id == model.selected_model,
        })
        .collect();

    let submit = match model.request {
        RequestState::InFlight => SubmitButton {
            label: SUBMIT_BUSY_LABEL,
            enabled: false,
        },
        _ => SubmitButton {
            label: SUBMIT_LABEL,
            enabled: true,
        },
    };

    let feedback = match &model.request {
        RequestState::Idle | RequestState::InFlight => None,
        RequestState::Failed(message) => Some(Feedback::Error(message.clone())),
        RequestState::Succeeded(result) => {
            Some(Feedback::Prediction(render_prediction(selected.name, result)))
        }
    };

    View {
        model_options,
        selected_name: selected.name,
        selected_description: selected.description,
        preview: model.upload.as_ref().map(|upload| upload.preview),
        submit,
        feedback,
    }
}

fn render_prediction(model_name: &'static str, result: &ClassificationResult) -> PredictionPanel {
    PredictionPanel {
        model_name,
        top_class: result
            .top_class
            .clone()
            .unwrap_or_else(|| UNKNOWN_CLASS.to_string()),
        confidence: result.probability.map(percentage),
        class_probabilities: result.all_probs.as_ref().map(|probs| {
            probs
                .iter()
                .map(|(class, prob)| format!("{}: {}", class, percentage(*prob)))
                .collect()
        }),
    }
}

/// `0.973` renders as `97.3%`. Ties round up, so `0.0025` renders as `0.3%`.
pub fn percentage(probability: f64) -> String {
    let tenths = (probability * 1000.0).round() / 10.0;
    format!("{:.1}%", tenths)
}
