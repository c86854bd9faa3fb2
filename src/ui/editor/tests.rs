// SPDX-License-Identifier: MPL-2.0
use super::view::status_key;
use super::*;
use crate::application::port::{InitializeReply, ServiceError};
use crate::error::Error;
use crate::media::decode_preview;
use crate::test_utils::{assert_abs_diff_eq, png_bytes};

fn cat() -> SourceImage {
    SourceImage::new("cat.png", "image/png", png_bytes(4, 4))
}

fn dog() -> SourceImage {
    SourceImage::new("dog.png", "image/png", png_bytes(3, 3))
}

fn preview(size: u32) -> PreviewImage {
    decode_preview(&png_bytes(size, size)).expect("test png decodes")
}

fn expect_schedule(effect: Effect) -> u64 {
    match effect {
        Effect::ScheduleEdit { revision, .. } => revision,
        other => panic!("expected ScheduleEdit, got {other:?}"),
    }
}

fn expect_send(effect: Effect) -> (u64, SourceImage, ParameterSet) {
    match effect {
        Effect::SendEdit {
            sequence,
            image,
            parameters,
        } => (sequence, image, parameters),
        other => panic!("expected SendEdit, got {other:?}"),
    }
}

/// Returns the session and the edit revision scheduled by an image selection.
fn expect_session(effect: Effect) -> (u64, u64) {
    match effect {
        Effect::StartSession {
            session, revision, ..
        } => (session, revision),
        other => panic!("expected StartSession, got {other:?}"),
    }
}

/// Selects `image` and completes its `initialize` call.
fn ready_with(state: &mut State, image: SourceImage) -> u64 {
    let (session, _) = expect_session(state.update(Message::ImageSelected(image)));
    state.update(Message::InitializeCompleted {
        session,
        result: Ok(InitializeReply {
            message: "ready".into(),
            status: Some("success".into()),
        }),
    });
    session
}

/// Changes `parameter`, lets the debounce fire and returns the sent request.
fn settle(state: &mut State, parameter: Parameter, input: &str) -> (u64, ParameterSet) {
    let revision = expect_schedule(
        state.update(Message::ParameterInput(parameter, input.to_string())),
    );
    let (sequence, _, parameters) = expect_send(state.update(Message::DebounceElapsed(revision)));
    (sequence, parameters)
}

#[test]
fn new_state_is_idle_and_neutral() {
    let state = State::default();
    assert!(state.parameters().is_neutral());
    assert!(state.image().is_none());
    assert!(state.preview().is_none());
    assert_eq!(state.requests(), RequestState::default());
    assert_eq!(state.debounce(), DEFAULT_DEBOUNCE);
    assert!(state.controls_enabled());
    for parameter in Parameter::ALL {
        assert_eq!(state.input(parameter), "0");
    }
}

#[test]
fn parameter_input_overwrites_exactly_one_field() {
    let mut state = State::default();
    state.update(Message::ParameterInput(Parameter::Wink, "5".into()));

    for (parameter, value) in state.parameters().iter() {
        let expected = if parameter == Parameter::Wink { 5.0 } else { 0.0 };
        assert_abs_diff_eq!(value, expected);
    }
    assert_eq!(state.input(Parameter::Wink), "5");
}

#[test]
fn changes_without_image_never_schedule_a_request() {
    let mut state = State::default();

    assert!(matches!(
        state.update(Message::ParameterInput(Parameter::Blink, "3".into())),
        Effect::None
    ));
    assert!(matches!(
        state.update(Message::SliderMoved(Parameter::Smile, 1.0)),
        Effect::None
    ));
    assert!(matches!(state.update(Message::Reset), Effect::None));
    assert!(matches!(
        state.update(Message::DebounceElapsed(0)),
        Effect::None
    ));
    assert_eq!(state.requests(), RequestState::default());
}

#[test]
fn unparsable_input_keeps_value_and_text() {
    let mut state = State::default();
    ready_with(&mut state, cat());
    expect_schedule(state.update(Message::ParameterInput(Parameter::Eee, "4".into())));

    let effect = state.update(Message::ParameterInput(Parameter::Eee, "-".into()));

    assert!(matches!(effect, Effect::None));
    assert_abs_diff_eq!(state.parameters().get(Parameter::Eee), 4.0);
    assert_eq!(state.input(Parameter::Eee), "-");
}

#[test]
fn typed_values_outside_the_slider_range_are_sent_as_is() {
    let mut state = State::default();
    ready_with(&mut state, cat());

    let (_, parameters) = settle(&mut state, Parameter::Smile, "7.5");

    assert_abs_diff_eq!(parameters.get(Parameter::Smile), 7.5);
}

#[test]
fn slider_values_snap_to_step_and_update_the_input() {
    let mut state = State::default();
    state.update(Message::SliderMoved(Parameter::Smile, 0.33));
    state.update(Message::SliderMoved(Parameter::Blink, -6.6));

    assert_abs_diff_eq!(state.parameters().get(Parameter::Smile), 0.3);
    assert_eq!(state.input(Parameter::Smile), "0.3");
    assert_abs_diff_eq!(state.parameters().get(Parameter::Blink), -7.0);
    assert_eq!(state.input(Parameter::Blink), "-7");
}

#[test]
fn reset_zeroes_every_field_and_schedules_an_edit() {
    let mut state = State::default();
    ready_with(&mut state, cat());
    for parameter in Parameter::ALL {
        state.update(Message::SliderMoved(parameter, 1.0));
    }

    let revision = expect_schedule(state.update(Message::Reset));
    let (_, _, parameters) = expect_send(state.update(Message::DebounceElapsed(revision)));

    assert!(state.parameters().is_neutral());
    assert!(parameters.is_neutral());
    for parameter in Parameter::ALL {
        assert_eq!(state.input(parameter), "0");
    }
}

#[test]
fn open_image_asks_for_the_file_dialog() {
    let mut state = State::default();
    assert!(matches!(
        state.update(Message::OpenImage),
        Effect::OpenFileDialog
    ));
}

#[test]
fn selecting_an_image_starts_a_session_and_disables_controls() {
    let mut state = State::default();

    match state.update(Message::ImageSelected(cat())) {
        Effect::StartSession {
            session,
            image,
            delay,
            ..
        } => {
            assert_eq!(session, 1);
            assert_eq!(image.file_name(), "cat.png");
            assert_eq!(delay, DEFAULT_DEBOUNCE);
        }
        other => panic!("expected StartSession, got {other:?}"),
    }

    assert!(state.requests().initializing);
    assert!(!state.controls_enabled());
    assert_eq!(state.image().map(SourceImage::file_name), Some("cat.png"));
}

#[test]
fn selecting_an_image_sends_parameters_set_beforehand() {
    let mut state = State::default();
    assert!(matches!(
        state.update(Message::ParameterInput(Parameter::Smile, "1.5".into())),
        Effect::None
    ));

    let (session, revision) = expect_session(state.update(Message::ImageSelected(cat())));
    assert!(state.requests().updating);
    assert!(!state.requests().loading);

    state.update(Message::InitializeCompleted {
        session,
        result: Ok(InitializeReply::default()),
    });
    state.update(Message::LocalPreviewDecoded {
        session,
        result: Ok(preview(4)),
    });

    let (sequence, image, parameters) =
        expect_send(state.update(Message::DebounceElapsed(revision)));
    assert_eq!(image.file_name(), "cat.png");
    assert_abs_diff_eq!(parameters.get(Parameter::Smile), 1.5);
    assert!(state.requests().loading);

    state.update(Message::EditCompleted {
        sequence,
        result: Ok(preview(6)),
    });
    assert_eq!(
        state.preview().map(|p| p.origin),
        Some(PreviewOrigin::Edited { sequence })
    );
    assert_eq!(state.requests(), RequestState::default());
}

#[test]
fn change_right_after_selection_replaces_the_scheduled_edit() {
    let mut state = State::default();
    let (_, selected) = expect_session(state.update(Message::ImageSelected(cat())));
    let changed = expect_schedule(state.update(Message::SliderMoved(Parameter::Wink, 3.0)));

    assert!(matches!(
        state.update(Message::DebounceElapsed(selected)),
        Effect::None
    ));
    let (_, _, parameters) = expect_send(state.update(Message::DebounceElapsed(changed)));
    assert_abs_diff_eq!(parameters.get(Parameter::Wink), 3.0);
}

#[test]
fn initialize_failure_still_enables_controls() {
    let mut state = State::default();
    state.update(Message::ImageSelected(cat()));

    state.update(Message::InitializeCompleted {
        session: 1,
        result: Err(ServiceError::Status {
            code: 500,
            endpoint: "initialize",
        }),
    });

    assert!(state.controls_enabled());
}

#[test]
fn initialize_reply_for_an_older_session_keeps_controls_disabled() {
    let mut state = State::default();
    state.update(Message::ImageSelected(cat()));
    state.update(Message::ImageSelected(dog()));

    state.update(Message::InitializeCompleted {
        session: 1,
        result: Err(ServiceError::Transport("connection refused".into())),
    });
    assert!(state.requests().initializing);

    state.update(Message::InitializeCompleted {
        session: 2,
        result: Ok(InitializeReply {
            message: "ok".into(),
            status: None,
        }),
    });
    assert!(!state.requests().initializing);
}

#[test]
fn local_preview_is_shown_for_the_current_session() {
    let mut state = State::default();
    let session = ready_with(&mut state, cat());

    state.update(Message::LocalPreviewDecoded {
        session,
        result: Ok(preview(4)),
    });

    let shown = state.preview().expect("local preview");
    assert_eq!(shown.origin, PreviewOrigin::Local);
    assert_eq!(shown.image.width, 4);
}

#[test]
fn local_preview_of_a_previous_image_is_ignored() {
    let mut state = State::default();
    ready_with(&mut state, cat());
    ready_with(&mut state, dog());

    state.update(Message::LocalPreviewDecoded {
        session: 1,
        result: Ok(preview(4)),
    });

    assert!(state.preview().is_none());
}

#[test]
fn late_local_preview_does_not_hide_an_edit() {
    let mut state = State::default();
    let session = ready_with(&mut state, cat());
    let (sequence, _) = settle(&mut state, Parameter::Smile, "1");
    state.update(Message::EditCompleted {
        sequence,
        result: Ok(preview(8)),
    });

    state.update(Message::LocalPreviewDecoded {
        session,
        result: Ok(preview(4)),
    });

    assert_eq!(
        state.preview().map(|p| p.origin),
        Some(PreviewOrigin::Edited { sequence })
    );
}

#[test]
fn burst_of_changes_sends_one_request_with_the_last_snapshot() {
    let mut state = State::default();
    ready_with(&mut state, cat());

    let revisions: Vec<u64> = (1..=5_u8)
        .map(|step| {
            expect_schedule(state.update(Message::SliderMoved(
                Parameter::RotateYaw,
                f64::from(step),
            )))
        })
        .collect();
    let last = *revisions.last().expect("five revisions");

    for revision in &revisions[..revisions.len() - 1] {
        assert!(matches!(
            state.update(Message::DebounceElapsed(*revision)),
            Effect::None
        ));
        assert!(state.requests().updating);
    }

    let (sequence, image, parameters) = expect_send(state.update(Message::DebounceElapsed(last)));
    assert_eq!(sequence, 1);
    assert_eq!(image.file_name(), "cat.png");
    assert_abs_diff_eq!(parameters.get(Parameter::RotateYaw), 5.0);

    // The same timer firing twice does not send again.
    assert!(matches!(
        state.update(Message::DebounceElapsed(last)),
        Effect::None
    ));
}

#[test]
fn request_flags_follow_the_edit_cycle() {
    let mut state = State::default();
    ready_with(&mut state, cat());

    let revision = expect_schedule(state.update(Message::ParameterInput(
        Parameter::Aaa,
        "2".into(),
    )));
    assert_eq!(
        state.requests(),
        RequestState {
            loading: false,
            updating: true,
            initializing: false
        }
    );

    let (sequence, _, _) = expect_send(state.update(Message::DebounceElapsed(revision)));
    assert!(state.requests().loading);
    assert!(state.requests().updating);

    state.update(Message::EditCompleted {
        sequence,
        result: Ok(preview(2)),
    });
    assert_eq!(state.requests(), RequestState::default());
}

#[test]
fn change_during_flight_keeps_updating_after_the_reply() {
    let mut state = State::default();
    ready_with(&mut state, cat());
    let (sequence, _) = settle(&mut state, Parameter::Woo, "1");

    expect_schedule(state.update(Message::ParameterInput(Parameter::Woo, "2".into())));
    state.update(Message::EditCompleted {
        sequence,
        result: Ok(preview(2)),
    });

    assert!(!state.requests().loading);
    assert!(state.requests().updating);
}

#[test]
fn successful_edit_replaces_the_preview() {
    let mut state = State::default();
    let session = ready_with(&mut state, cat());
    state.update(Message::LocalPreviewDecoded {
        session,
        result: Ok(preview(4)),
    });
    let (sequence, _) = settle(&mut state, Parameter::Smile, "1.5");

    state.update(Message::EditCompleted {
        sequence,
        result: Ok(preview(6)),
    });

    let shown = state.preview().expect("edited preview");
    assert_eq!(shown.origin, PreviewOrigin::Edited { sequence });
    assert_eq!(shown.image.width, 6);
}

#[test]
fn failed_edit_keeps_the_previous_preview_and_parameters() {
    let mut state = State::default();
    let session = ready_with(&mut state, cat());
    state.update(Message::LocalPreviewDecoded {
        session,
        result: Ok(preview(4)),
    });
    let (sequence, _) = settle(&mut state, Parameter::Eyebrow, "3");

    state.update(Message::EditCompleted {
        sequence,
        result: Err(Error::Service(ServiceError::Status {
            code: 500,
            endpoint: "edit",
        })),
    });

    assert_eq!(state.preview().map(|p| p.origin), Some(PreviewOrigin::Local));
    assert_abs_diff_eq!(state.parameters().get(Parameter::Eyebrow), 3.0);
    assert_eq!(state.requests(), RequestState::default());
}

#[test]
fn older_reply_arriving_late_is_discarded() {
    let mut state = State::default();
    ready_with(&mut state, cat());
    let (first, _) = settle(&mut state, Parameter::Smile, "0.5");
    let (second, _) = settle(&mut state, Parameter::Smile, "1");
    assert!(second > first);

    state.update(Message::EditCompleted {
        sequence: second,
        result: Ok(preview(8)),
    });
    state.update(Message::EditCompleted {
        sequence: first,
        result: Ok(preview(2)),
    });

    let shown = state.preview().expect("newest preview");
    assert_eq!(shown.origin, PreviewOrigin::Edited { sequence: second });
    assert_eq!(shown.image.width, 8);
    assert_eq!(state.requests(), RequestState::default());
}

#[test]
fn replies_for_a_previous_image_are_discarded() {
    let mut state = State::default();
    ready_with(&mut state, cat());
    let (sequence, _) = settle(&mut state, Parameter::Blink, "10");

    ready_with(&mut state, dog());
    assert!(state.preview().is_none());

    state.update(Message::EditCompleted {
        sequence,
        result: Ok(preview(4)),
    });

    assert!(state.preview().is_none());
    assert!(!state.requests().loading);
}

#[test]
fn parameters_survive_image_changes() {
    let mut state = State::default();
    ready_with(&mut state, cat());
    state.update(Message::ParameterInput(Parameter::PupilX, "-4".into()));

    let (_, revision) = expect_session(state.update(Message::ImageSelected(dog())));
    assert_abs_diff_eq!(state.parameters().get(Parameter::PupilX), -4.0);

    let (_, image, parameters) = expect_send(state.update(Message::DebounceElapsed(revision)));
    assert_eq!(image.file_name(), "dog.png");
    assert_abs_diff_eq!(parameters.get(Parameter::PupilX), -4.0);
}

#[test]
fn cat_scenario_sends_the_smile_edit_and_shows_the_result() {
    let mut state = State::new(std::time::Duration::from_millis(200));

    let session = match state.update(Message::ImageSelected(cat())) {
        Effect::StartSession { session, image, .. } => {
            assert_eq!(image.file_name(), "cat.png");
            session
        }
        other => panic!("expected StartSession, got {other:?}"),
    };
    state.update(Message::LocalPreviewDecoded {
        session,
        result: Ok(preview(4)),
    });
    state.update(Message::InitializeCompleted {
        session,
        result: Ok(InitializeReply {
            message: "initialized".into(),
            status: Some("success".into()),
        }),
    });
    assert_eq!(state.preview().map(|p| p.origin), Some(PreviewOrigin::Local));

    let (sequence, parameters) = settle(&mut state, Parameter::Smile, "1.5");
    let fields = parameters.form_fields();
    assert_eq!(fields.len(), 12);
    for (name, value) in fields {
        let expected = if name == "smile" { "1.5" } else { "0" };
        assert_eq!(value, expected, "{name}");
    }

    state.update(Message::EditCompleted {
        sequence,
        result: Ok(preview(5)),
    });
    assert_eq!(
        state.preview().map(|p| p.origin),
        Some(PreviewOrigin::Edited { sequence })
    );
    assert_eq!(state.requests(), RequestState::default());
}

#[test]
fn status_prefers_loading_over_updating_over_initializing() {
    let all = RequestState {
        loading: true,
        updating: true,
        initializing: true,
    };
    assert_eq!(status_key(all), Some("editor-status-loading"));
    assert_eq!(
        status_key(RequestState {
            loading: false,
            ..all
        }),
        Some("editor-status-updating")
    );
    assert_eq!(
        status_key(RequestState {
            initializing: true,
            ..RequestState::default()
        }),
        Some("editor-status-initializing")
    );
    assert_eq!(status_key(RequestState::default()), None);
}
