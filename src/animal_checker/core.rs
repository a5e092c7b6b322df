use crate::device_file_picker::interface::ImageFile;
use crate::image_classifier::interface::{ClassificationResult, ClassifyError};
use crate::model_catalog::{self, ModelId};
use crate::preview_store::interface::PreviewId;

pub const MISSING_IMAGE_MESSAGE: &str = "Please upload an image of an animal first.";

#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file: ImageFile,
    pub preview: PreviewId,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded(ClassificationResult),
    Failed(String),
}

impl RequestState {
    /// Drops a shown result or error. A request still in flight stays in flight.
    fn cleared(self) -> Self {
        match self {
            RequestState::InFlight => RequestState::InFlight,
            _ => RequestState::Idle,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub selected_model: ModelId,
    pub upload: Option<Upload>,
    pub request: RequestState,
    pub(super) next_preview_id: u64,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            selected_model: model_catalog::default_model().id,
            upload: None,
            request: RequestState::Idle,
            next_preview_id: 1,
        }
    }
}

#[derive(Debug)]
pub enum Msg {
    ModelSelected(ModelId),
    FileSelected(Option<ImageFile>),
    SubmitClicked,
    ClassifyDone(Result<ClassificationResult, ClassifyError>),
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RevokePreview { id: PreviewId },
    CreatePreview { id: PreviewId, file: ImageFile },
    Classify { model_id: ModelId, file: ImageFile },
    LogError { detail: String },
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::ModelSelected(selected_model) => (
            Model {
                selected_model,
                request: model.request.cleared(),
                ..model
            },
            vec![],
        ),

        Msg::FileSelected(None) => (model, vec![]),

        Msg::FileSelected(Some(file)) => {
            let mut effects = vec![];
            if let Some(previous) = &model.upload {
                effects.push(Effect::RevokePreview {
                    id: previous.preview,
                });
            }

            let preview = PreviewId(model.next_preview_id);
            effects.push(Effect::CreatePreview {
                id: preview,
                file: file.clone(),
            });

            (
                Model {
                    upload: Some(Upload { file, preview }),
                    request: model.request.cleared(),
                    next_preview_id: model.next_preview_id + 1,
                    ..model
                },
                effects,
            )
        }

        Msg::SubmitClicked => {
            if model.request.is_in_flight() {
                return (model, vec![]);
            }

            let Some(file) = model.upload.as_ref().map(|upload| upload.file.clone()) else {
                return (
                    Model {
                        request: RequestState::Failed(MISSING_IMAGE_MESSAGE.to_string()),
                        ..model
                    },
                    vec![],
                );
            };

            let effects = vec![Effect::Classify {
                model_id: model.selected_model,
                file,
            }];
            (
                Model {
                    request: RequestState::InFlight,
                    ..model
                },
                effects,
            )
        }

        Msg::ClassifyDone(_) if !model.request.is_in_flight() => (model, vec![]),

        Msg::ClassifyDone(Ok(result)) => (
            Model {
                request: RequestState::Succeeded(result),
                ..model
            },
            vec![],
        ),

        Msg::ClassifyDone(Err(error)) => (
            Model {
                request: RequestState::Failed(error.user_message()),
                ..model
            },
            vec![Effect::LogError {
                detail: error.to_string(),
            }],
        ),

        Msg::Closed => {
            let effects = model
                .upload
                .as_ref()
                .map(|upload| Effect::RevokePreview { id: upload.preview })
                .into_iter()
                .collect();
            (
                Model {
                    upload: None,
                    ..model
                },
                effects,
            )
        }
    }
}
