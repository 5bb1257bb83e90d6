use kit_core::{ChangeOutcome, ControlMode, Controllable, ModeViolation};
use pretty_assertions::assert_eq;

use crate::common::Recorder;

#[test]
fn test_uncontrolled_sequence_tracks_every_change() {
    let mut value = Controllable::new(None, Some(1), || 0);
    let recorder = Recorder::new();

    for next in [2, 3, 4] {
        let outcome = value.change(next, false, recorder.sink());
        assert_eq!(outcome, ChangeOutcome::Notified);
        assert_eq!(value.resolve(None), next, "uncontrolled value should follow each change");
    }

    assert_eq!(recorder.calls(), vec![2, 3, 4]);
}

#[test]
fn test_controlled_owner_that_ignores_changes_keeps_display() {
    let mut value = Controllable::new(Some(10), Some(1), || 0);
    let recorder = Recorder::new();

    // The owner keeps passing 10 no matter what it is told.
    for proposed in [11, 12] {
        value.sync(Some(&10));
        value.change(proposed, false, recorder.sink());
        assert_eq!(value.resolve(Some(&10)), 10);
    }

    assert_eq!(recorder.calls(), vec![11, 12], "every proposal should still be reported");
}

#[test]
fn test_controlled_owner_that_accepts_changes() {
    let mut value = Controllable::new(Some(10), None, || 0);
    let mut owner = 10;

    value.change(11, false, |next| owner = next);
    value.sync(Some(&owner));

    assert_eq!(value.resolve(Some(&owner)), 11);
    assert_eq!(value.mode(), ControlMode::Controlled);
}

#[test]
fn test_disabled_interactions_are_silent() {
    let mut value = Controllable::new(None, Some("a".to_string()), String::new);
    let recorder = Recorder::new();

    let outcome = value.change("b".to_string(), true, recorder.sink());

    assert_eq!(outcome, ChangeOutcome::Ignored);
    assert_eq!(recorder.count(), 0);
    assert_eq!(value.resolve(None), "a");
}

#[test]
fn test_dropping_the_external_value_freezes_the_last_one() {
    let mut value = Controllable::new(Some(5), Some(1), || 0);
    value.sync(Some(&7));

    let violation = value.sync(None);

    assert_eq!(violation, Some(ModeViolation::ControlledToUncontrolled));
    assert_eq!(value.resolve(None), 7, "display should not jump back to the seed");
    assert!(value.is_controlled());
}

#[test]
fn test_late_external_value_is_authoritative_but_mode_stays() {
    let mut value = Controllable::new(None, Some(1), || 0);

    let violation = value.sync(Some(&9));

    assert_eq!(violation, Some(ModeViolation::UncontrolledToControlled));
    assert_eq!(value.resolve(Some(&9)), 9);
    assert_eq!(value.mode(), ControlMode::Uncontrolled);
}
