use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use kit_core::{ChangeOutcome, SliderConfig, SliderKey, SliderState, ValueFormatter};
use kit_ui::hooks::use_model;
use kit_ui::{press_slider_key, settle_slider_value, Slider};
use pretty_assertions::assert_eq;

use crate::common::{self, Recorder};

fn range(default: Vec<f64>) -> SliderState {
    SliderState::new(SliderConfig::default(), None, Some(default), None).unwrap()
}

#[test]
fn test_drag_emits_once_per_accepted_move() {
    let mut slider = range(vec![10.0]);
    let recorder = Recorder::new();

    slider.pointer_down(0.2, None, false, recorder.sink());
    slider.pointer_move(0.3, None, false, recorder.sink());
    slider.pointer_move(0.45, None, false, recorder.sink());
    slider.pointer_up();
    slider.pointer_move(0.9, None, false, recorder.sink());

    assert_eq!(
        recorder.calls(),
        vec![vec![20.0], vec![30.0], vec![45.0]],
        "moves after release must be ignored"
    );
    assert!(!slider.is_dragging());
}

#[test]
fn test_thumbs_cannot_cross() {
    let mut slider = range(vec![30.0, 60.0]);
    let recorder = Recorder::new();

    slider.pointer_down(0.35, None, false, recorder.sink());
    assert_eq!(slider.pressed_thumb(), Some(0));
    slider.pointer_move(0.9, None, false, recorder.sink());

    assert_eq!(recorder.calls().last(), Some(&vec![60.0, 60.0]));
}

#[test]
fn test_keyboard_steps_and_pages() {
    let mut slider = range(vec![50.0]);
    let mut last = Vec::new();

    slider.key(0, SliderKey::Increment, None, false, |v| last = v);
    assert_eq!(last, vec![51.0]);
    slider.key(0, SliderKey::PageDecrement, None, false, |v| last = v);
    assert_eq!(last, vec![41.0]);
    slider.key(0, SliderKey::End, None, false, |v| last = v);
    assert_eq!(last, vec![100.0]);
    slider.key(0, SliderKey::Increment, None, false, |v| last = v);
    assert_eq!(last, vec![100.0], "stepping past max clamps");
}

#[test]
fn test_disabled_slider_ignores_everything() {
    let mut slider = range(vec![50.0]);
    let recorder = Recorder::new();

    assert_eq!(
        slider.pointer_down(0.9, None, true, recorder.sink()),
        ChangeOutcome::Ignored
    );
    assert_eq!(
        slider.key(0, SliderKey::Home, None, true, recorder.sink()),
        ChangeOutcome::Ignored
    );
    assert_eq!(recorder.count(), 0);
    assert_eq!(slider.values(None), vec![50.0]);
}

#[test]
fn test_controlled_slider_reports_without_moving() {
    let external = vec![40.0];
    let mut slider =
        SliderState::new(SliderConfig::default(), Some(external.clone()), None, None).unwrap();
    let recorder = Recorder::new();

    slider.key(0, SliderKey::Increment, Some(&external), false, recorder.sink());

    assert_eq!(recorder.calls(), vec![vec![41.0]]);
    assert_eq!(slider.values(Some(&external)), vec![40.0]);
}

#[test]
fn test_tooltip_text_refreshes_only_on_interaction() {
    let celsius: ValueFormatter = Rc::new(|v: f64| format!("{v}°"));
    let mut slider =
        SliderState::new(SliderConfig::default(), None, Some(vec![20.0]), Some(celsius)).unwrap();
    assert_eq!(slider.tooltip(0), Some("20°"));

    let kelvin: ValueFormatter = Rc::new(|v: f64| format!("{}K", v + 273.0));
    slider.set_formatter(Some(kelvin));
    assert_eq!(slider.tooltip(0), Some("20°"), "a new formatter alone does not refresh");

    slider.key(0, SliderKey::Increment, None, false, |_| {});
    assert_eq!(slider.tooltip(0), Some("294K"));
}

fn range_app() -> Element {
    rsx! {
        Slider {
            label: "Budget",
            default_value: vec![200.0, 800.0],
            min: 0.0,
            max: 1000.0,
            step: 50.0,
            show_tooltip: true,
            show_min_max: true,
            format_value: |v: f64| format!("${v}"),
        }
    }
}

#[test]
fn test_range_slider_markup() {
    let html = common::render_app(range_app);

    assert_eq!(common::count(&html, r#"role="slider""#), 2);
    assert_eq!(
        common::attr_values(&html, "aria-valuenow"),
        vec!["200".to_string(), "800".to_string()]
    );
    assert_eq!(
        common::attr_values(&html, "aria-label"),
        vec!["Budget 1".to_string(), "Budget 2".to_string()]
    );
    assert!(html.contains("left: 20%; width: 60%"));
    assert_eq!(common::count(&html, "slider-tooltip"), 2);
    assert!(html.contains("$1000"));
}

fn vertical_app() -> Element {
    rsx! {
        Slider { orientation: kit_ui::Orientation::Vertical, value: vec![25.0], disabled: true }
    }
}

#[test]
fn test_vertical_disabled_slider_markup() {
    let html = common::render_app(vertical_app);

    assert!(html.contains("slider-control"));
    assert!(html.contains(r#"data-orientation="vertical""#));
    assert_eq!(common::attr_values(&html, "data-value"), vec!["25".to_string()]);
    assert!(html.contains(r#"data-disabled="true""#));
}

#[derive(Clone, Copy)]
enum Input {
    Key(usize, SliderKey),
    Settle(usize, f64),
}

thread_local! {
    static INPUTS: RefCell<Vec<Input>> = const { RefCell::new(Vec::new()) };
    static INPUT_DISABLED: Cell<bool> = const { Cell::new(false) };
    static OWNER: RefCell<Option<Vec<f64>>> = const { RefCell::new(None) };
    static REPORTED: RefCell<Vec<Vec<f64>>> = const { RefCell::new(Vec::new()) };
    static TOOLTIPS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Sends `INPUTS` through the slider's key and value handlers on first
/// render, records the tooltips they leave, and renders the values shown.
fn input_app() -> Element {
    let owner = OWNER.with_borrow(Clone::clone);
    let model = use_model(|| {
        SliderState::new(SliderConfig::default(), owner.clone(), Some(vec![20.0, 60.0]), None)
    });
    let on_change = EventHandler::new(|next: Vec<f64>| REPORTED.with_borrow_mut(|seen| seen.push(next)));

    use_hook(|| {
        let disabled = INPUT_DISABLED.get();
        for input in INPUTS.with_borrow(Clone::clone) {
            match input {
                Input::Key(thumb, key) => {
                    press_slider_key(&model, thumb, key, owner.as_ref(), disabled, Some(on_change));
                }
                Input::Settle(thumb, value) => {
                    settle_slider_value(&model, thumb, value, owner.as_ref(), disabled, Some(on_change));
                }
            }
        }
    });

    let (values, tooltips) = model.read(|state| match state {
        Ok(state) => (
            state.values(owner.as_ref()),
            (0..state.thumb_count())
                .map(|thumb| state.tooltip(thumb).unwrap_or_default().to_string())
                .collect(),
        ),
        Err(_) => (Vec::new(), Vec::new()),
    });
    TOOLTIPS.set(tooltips);
    rsx! {
        Slider { value: values, label: "Range" }
    }
}

#[test]
fn test_key_handler_moves_uncontrolled_thumbs() {
    INPUTS.set(vec![
        Input::Key(0, SliderKey::Increment),
        Input::Key(1, SliderKey::PageIncrement),
        Input::Key(0, SliderKey::End),
    ]);

    let html = common::render_app(input_app);

    assert_eq!(
        REPORTED.with_borrow(Clone::clone),
        vec![vec![21.0, 60.0], vec![21.0, 70.0], vec![70.0, 70.0]]
    );
    assert_eq!(TOOLTIPS.with_borrow(Clone::clone), vec!["70".to_string(), "70".to_string()]);
    assert_eq!(
        common::attr_values(&html, "aria-valuenow"),
        vec!["70".to_string(), "70".to_string()]
    );
}

#[test]
fn test_value_handler_snaps_and_notifies_once() {
    INPUTS.set(vec![Input::Settle(1, 42.4)]);

    let html = common::render_app(input_app);

    assert_eq!(REPORTED.with_borrow(Clone::clone), vec![vec![20.0, 42.0]]);
    assert_eq!(TOOLTIPS.with_borrow(Clone::clone), vec!["20".to_string(), "42".to_string()]);
    assert!(html.contains("left: 20%; width: 22%"));
}

#[test]
fn test_handlers_on_disabled_slider_stay_silent() {
    INPUTS.set(vec![Input::Key(0, SliderKey::Home), Input::Settle(1, 90.0)]);
    INPUT_DISABLED.set(true);

    let html = common::render_app(input_app);

    assert!(REPORTED.with_borrow(Vec::is_empty));
    assert_eq!(
        common::attr_values(&html, "aria-valuenow"),
        vec!["20".to_string(), "60".to_string()]
    );
}

#[test]
fn test_controlled_key_handler_tooltip_follows_shown_value() {
    OWNER.set(Some(vec![30.0]));
    INPUTS.set(vec![Input::Key(0, SliderKey::Increment), Input::Key(0, SliderKey::Increment)]);

    let html = common::render_app(input_app);

    assert_eq!(REPORTED.with_borrow(Clone::clone), vec![vec![31.0], vec![31.0]]);
    assert_eq!(TOOLTIPS.with_borrow(Clone::clone), vec!["30".to_string()]);
    assert_eq!(common::attr_values(&html, "data-value"), vec!["30".to_string()]);
}
