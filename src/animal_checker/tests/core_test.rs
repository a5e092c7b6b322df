use super::fixture::{cat_image, dog_image, dog_result};
use crate::animal_checker::core::{
    init, transition, Effect, Model, Msg, RequestState, MISSING_IMAGE_MESSAGE,
};
use crate::image_classifier::interface::{ClassifyError, UNEXPECTED_FAILURE_MESSAGE};
use crate::model_catalog::ModelId;
use crate::preview_store::interface::PreviewId;

fn with_file() -> Model {
    let (model, _) = init();
    let (model, _) = transition(model, Msg::FileSelected(Some(dog_image())));
    model
}

fn in_flight() -> Model {
    let (model, _) = transition(with_file(), Msg::SubmitClicked);
    model
}

fn succeeded() -> Model {
    let (model, _) = transition(in_flight(), Msg::ClassifyDone(Ok(dog_result())));
    model
}

#[test]
fn test_init() {
    let (model, effects) = init();

    assert_eq!(model.selected_model, ModelId::Model1);
    assert_eq!(model.upload, None);
    assert_eq!(model.request, RequestState::Idle);
    assert!(effects.is_empty());
}

#[test]
fn test_select_model_clears_result() {
    let (model, effects) = transition(succeeded(), Msg::ModelSelected(ModelId::Model3));

    assert_eq!(model.selected_model, ModelId::Model3);
    assert_eq!(model.request, RequestState::Idle);
    assert!(model.upload.is_some());
    assert!(effects.is_empty());
}

#[test]
fn test_select_model_clears_error() {
    let (model, _) = init();
    let (model, _) = transition(model, Msg::SubmitClicked);
    assert!(matches!(model.request, RequestState::Failed(_)));

    let (model, _) = transition(model, Msg::ModelSelected(ModelId::Model2));

    assert_eq!(model.request, RequestState::Idle);
}

#[test]
fn test_select_model_keeps_request_in_flight() {
    let (model, effects) = transition(in_flight(), Msg::ModelSelected(ModelId::Model2));

    assert_eq!(model.request, RequestState::InFlight);
    assert!(effects.is_empty());
}

#[test]
fn test_cancelled_file_pick_is_noop() {
    let before = succeeded();
    let (after, effects) = transition(before.clone(), Msg::FileSelected(None));

    assert_eq!(after, before);
    assert!(effects.is_empty());
}

#[test]
fn test_first_file_creates_preview() {
    let (model, _) = init();
    let (model, effects) = transition(model, Msg::FileSelected(Some(dog_image())));

    let upload = model.upload.expect("upload stored");
    assert_eq!(upload.file, dog_image());
    assert_eq!(
        effects,
        vec![Effect::CreatePreview {
            id: upload.preview,
            file: dog_image(),
        }]
    );
}

#[test]
fn test_new_file_revokes_previous_preview_first() {
    let model = with_file();
    let previous = model.upload.as_ref().unwrap().preview;

    let (model, effects) = transition(model, Msg::FileSelected(Some(cat_image())));

    let current = model.upload.as_ref().unwrap().preview;
    assert_ne!(previous, current);
    assert_eq!(
        effects,
        vec![
            Effect::RevokePreview { id: previous },
            Effect::CreatePreview {
                id: current,
                file: cat_image(),
            },
        ]
    );
}

#[test]
fn test_new_file_clears_result_and_error() {
    let (model, _) = transition(succeeded(), Msg::FileSelected(Some(cat_image())));
    assert_eq!(model.request, RequestState::Idle);

    let (model, _) = init();
    let (model, _) = transition(model, Msg::SubmitClicked);
    let (model, _) = transition(model, Msg::FileSelected(Some(cat_image())));
    assert_eq!(model.request, RequestState::Idle);
}

#[test]
fn test_submit_without_file() {
    let (model, _) = init();
    let (model, effects) = transition(model, Msg::SubmitClicked);

    assert_eq!(
        model.request,
        RequestState::Failed(MISSING_IMAGE_MESSAGE.to_string())
    );
    assert!(effects.is_empty());
}

#[test]
fn test_submit_with_file() {
    let (model, _) = transition(with_file(), Msg::ModelSelected(ModelId::Model2));
    let (model, effects) = transition(model, Msg::SubmitClicked);

    assert_eq!(model.request, RequestState::InFlight);
    assert_eq!(
        effects,
        vec![Effect::Classify {
            model_id: ModelId::Model2,
            file: dog_image(),
        }]
    );
}

#[test]
fn test_submit_resets_previous_result() {
    let (model, effects) = transition(succeeded(), Msg::SubmitClicked);

    assert_eq!(model.request, RequestState::InFlight);
    assert_eq!(effects.len(), 1);
}

#[test]
fn test_submit_while_in_flight_is_ignored() {
    let before = in_flight();
    let (after, effects) = transition(before.clone(), Msg::SubmitClicked);

    assert_eq!(after, before);
    assert!(effects.is_empty());
}

#[test]
fn test_classify_success() {
    let (model, effects) = transition(in_flight(), Msg::ClassifyDone(Ok(dog_result())));

    assert_eq!(model.request, RequestState::Succeeded(dog_result()));
    assert!(effects.is_empty());
}

#[test]
fn test_classify_status_failure() {
    let (model, effects) = transition(
        in_flight(),
        Msg::ClassifyDone(Err(ClassifyError::Status(500))),
    );

    match model.request {
        RequestState::Failed(message) => assert!(message.contains("500")),
        other => panic!("Unexpected state: {:?}", other),
    }
    assert_eq!(
        effects,
        vec![Effect::LogError {
            detail: "Server responded with 500".to_string(),
        }]
    );
}

#[test]
fn test_classify_transport_failure() {
    let (model, effects) = transition(
        in_flight(),
        Msg::ClassifyDone(Err(ClassifyError::Transport(
            "connection refused".to_string(),
        ))),
    );

    assert_eq!(
        model.request,
        RequestState::Failed(UNEXPECTED_FAILURE_MESSAGE.to_string())
    );
    match &effects[..] {
        [Effect::LogError { detail }] => assert!(detail.contains("connection refused")),
        other => panic!("Unexpected effects: {:?}", other),
    }
}

#[test]
fn test_stale_completion_is_ignored() {
    let before = with_file();
    let (after, effects) = transition(before.clone(), Msg::ClassifyDone(Ok(dog_result())));

    assert_eq!(after, before);
    assert!(effects.is_empty());
}

#[test]
fn test_closed_revokes_preview() {
    let model = with_file();
    let preview = model.upload.as_ref().unwrap().preview;

    let (model, effects) = transition(model, Msg::Closed);

    assert_eq!(model.upload, None);
    assert_eq!(effects, vec![Effect::RevokePreview { id: preview }]);
}

#[test]
fn test_closed_without_upload() {
    let (model, _) = init();
    let (_, effects) = transition(model, Msg::Closed);

    assert!(effects.is_empty());
}

#[test]
fn test_preview_ids_are_never_reused() {
    let mut model = with_file();
    let mut seen = vec![model.upload.as_ref().unwrap().preview];

    for _ in 0..3 {
        let (next, _) = transition(model, Msg::FileSelected(Some(cat_image())));
        let id = next.upload.as_ref().unwrap().preview;
        assert!(!seen.contains(&id));
        seen.push(id);
        model = next;
    }

    assert_eq!(seen.last(), Some(&PreviewId(4)));
}
