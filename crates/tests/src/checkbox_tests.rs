use std::cell::{Cell, RefCell};

use dioxus::prelude::*;
use kit_core::{checkbox_value, ChangeOutcome, CheckedState};
use kit_ui::hooks::use_model;
use kit_ui::{click_checkbox, Checkbox};
use pretty_assertions::assert_eq;

use crate::common::{self, Recorder};

#[test]
fn test_click_sequence_from_indeterminate() {
    let mut value = checkbox_value(None, Some(CheckedState::Indeterminate));
    let recorder = Recorder::new();

    value.toggle(None, false, recorder.sink());
    value.toggle(None, false, recorder.sink());
    value.toggle(None, false, recorder.sink());

    assert_eq!(
        recorder.calls(),
        vec![CheckedState::Checked, CheckedState::Unchecked, CheckedState::Checked]
    );
}

#[test]
fn test_controlled_checkbox_reports_but_does_not_move() {
    let mut value = checkbox_value(Some(CheckedState::Unchecked), None);
    let recorder = Recorder::new();

    value.toggle(Some(&CheckedState::Unchecked), false, recorder.sink());
    value.toggle(Some(&CheckedState::Unchecked), false, recorder.sink());

    assert_eq!(recorder.calls(), vec![CheckedState::Checked, CheckedState::Checked]);
    assert_eq!(value.internal(), &CheckedState::Unchecked);
}

#[test]
fn test_disabled_checkbox_never_notifies() {
    let mut value = checkbox_value(None, None);
    let recorder = Recorder::new();

    value.toggle(None, true, recorder.sink());

    assert_eq!(recorder.count(), 0);
    assert_eq!(value.resolve(None), CheckedState::Unchecked);
}

#[test]
fn test_checked_state_json_shape() {
    assert_eq!(serde_json::to_string(&CheckedState::Checked).unwrap(), "true");
    assert_eq!(serde_json::to_string(&CheckedState::Unchecked).unwrap(), "false");
    assert_eq!(
        serde_json::to_string(&CheckedState::Indeterminate).unwrap(),
        "\"indeterminate\""
    );
    let parsed: CheckedState = serde_json::from_str("\"indeterminate\"").unwrap();
    assert_eq!(parsed, CheckedState::Indeterminate);
}

fn form_app() -> Element {
    rsx! {
        form {
            label {
                Checkbox { id: "terms", name: "terms", checked: CheckedState::Checked }
                "I accept"
            }
            label {
                Checkbox { id: "news", name: "news", default_checked: CheckedState::Indeterminate }
                "Newsletter"
            }
        }
    }
}

#[test]
fn test_form_renders_one_native_input_per_named_checkbox() {
    let html = common::render_app(form_app);

    assert_eq!(common::count(&html, r#"role="checkbox""#), 2);
    assert_eq!(common::count(&html, r#"name="terms""#), 1);
    assert_eq!(common::count(&html, r#"name="news""#), 1);
    assert!(html.contains(r#"data-state="checked""#));
    assert!(html.contains(r#"data-state="indeterminate""#));
}

thread_local! {
    static OWNER_VALUE: Cell<CheckedState> = const { Cell::new(CheckedState::Unchecked) };
    static NOTIFICATIONS: Cell<usize> = const { Cell::new(0) };
}

fn controlled_app() -> Element {
    rsx! {
        Checkbox {
            checked: OWNER_VALUE.get(),
            on_checked_change: move |_| NOTIFICATIONS.set(NOTIFICATIONS.get() + 1),
        }
    }
}

#[test]
fn test_owner_driven_rerender_updates_without_notifying() {
    let mut dom = common::mount(controlled_app);
    let before = dioxus_ssr::render(&dom);
    assert!(before.contains(r#"data-state="unchecked""#));

    OWNER_VALUE.set(CheckedState::Checked);
    let after = common::rerender(&mut dom);

    assert!(after.contains(r#"data-state="checked""#));
    assert!(!after.contains("unchecked"));
    assert_eq!(NOTIFICATIONS.get(), 0, "re-rendering must not emit a change");
}

thread_local! {
    static CLICKS: Cell<usize> = const { Cell::new(0) };
    static CLICK_DISABLED: Cell<bool> = const { Cell::new(false) };
    static CLICK_OWNER: Cell<Option<CheckedState>> = const { Cell::new(None) };
    static SEEN: RefCell<Vec<CheckedState>> = const { RefCell::new(Vec::new()) };
    static OUTCOMES: RefCell<Vec<ChangeOutcome>> = const { RefCell::new(Vec::new()) };
}

/// Drives the component's click handler `CLICKS` times on first render,
/// then renders a checkbox showing whatever the handler left behind.
fn clicking_app() -> Element {
    let model = use_model(|| checkbox_value(CLICK_OWNER.get(), Some(CheckedState::Indeterminate)));
    let on_change = EventHandler::new(|next: CheckedState| SEEN.with_borrow_mut(|seen| seen.push(next)));

    use_hook(|| {
        for _ in 0..CLICKS.get() {
            let outcome =
                click_checkbox(&model, CLICK_OWNER.get(), CLICK_DISABLED.get(), Some(on_change));
            OUTCOMES.with_borrow_mut(|outcomes| outcomes.push(outcome));
        }
    });

    let shown = model.read(|value| value.resolve(CLICK_OWNER.get().as_ref()));
    rsx! {
        Checkbox { checked: shown }
    }
}

#[test]
fn test_click_handler_notifies_once_per_click() {
    CLICKS.set(2);

    let html = common::render_app(clicking_app);

    assert_eq!(
        SEEN.with_borrow(Clone::clone),
        vec![CheckedState::Checked, CheckedState::Unchecked]
    );
    assert_eq!(
        OUTCOMES.with_borrow(Clone::clone),
        vec![ChangeOutcome::Notified, ChangeOutcome::Notified]
    );
    assert!(html.contains(r#"data-state="unchecked""#));
}

#[test]
fn test_click_handler_on_disabled_checkbox_stays_silent() {
    CLICKS.set(3);
    CLICK_DISABLED.set(true);

    let html = common::render_app(clicking_app);

    assert!(SEEN.with_borrow(Vec::is_empty));
    assert_eq!(OUTCOMES.with_borrow(Clone::clone), vec![ChangeOutcome::Ignored; 3]);
    assert!(html.contains(r#"data-state="indeterminate""#));
}

#[test]
fn test_click_handler_on_controlled_checkbox_keeps_owner_value() {
    CLICKS.set(1);
    CLICK_OWNER.set(Some(CheckedState::Unchecked));

    let html = common::render_app(clicking_app);

    assert_eq!(SEEN.with_borrow(Clone::clone), vec![CheckedState::Checked]);
    assert!(html.contains(r#"data-state="unchecked""#));
    assert!(!html.contains(r#"data-state="checked""#));
}
