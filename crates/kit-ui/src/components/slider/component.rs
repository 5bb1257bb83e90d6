use std::rc::Rc;

use dioxus::html::geometry::PixelsRect;
use dioxus::prelude::*;
use dioxus_primitives::slider as prim;
use kit_core::{
    ChangeOutcome, ModeViolation, SliderConfig, SliderKey, SliderState, UiError, ValueFormatter,
};

use crate::hooks::{use_model, ModelHandle};

pub use dioxus_primitives::slider::SliderValue;
pub use kit_core::Orientation;

#[derive(Props, Clone, PartialEq)]
pub struct SliderProps {
    /// Thumb values. Supplying them on first render makes the slider
    /// controlled for its whole lifetime.
    #[props(default)]
    pub value: Option<Vec<f64>>,
    /// Seed for an uncontrolled slider. Its length fixes the thumb count.
    #[props(default)]
    pub default_value: Option<Vec<f64>>,
    #[props(default = 0.0)]
    pub min: f64,
    #[props(default = 100.0)]
    pub max: f64,
    #[props(default = 1.0)]
    pub step: f64,
    #[props(default)]
    pub orientation: Orientation,
    #[props(default = false)]
    pub inverted: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Show a tooltip with the formatted value above each thumb.
    #[props(default = false)]
    pub show_tooltip: bool,
    /// Tooltip and value text. Defaults to the plain number.
    #[props(default)]
    pub format_value: Option<Callback<f64, String>>,
    #[props(default)]
    pub label: Option<String>,
    /// Render the formatted `min` and `max` under the track.
    #[props(default = false)]
    pub show_min_max: bool,
    #[props(default)]
    pub start_label: Option<String>,
    #[props(default)]
    pub end_label: Option<String>,
    #[props(default)]
    pub on_value_change: Option<EventHandler<Vec<f64>>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Slider state held by the component. A range that failed validation
/// keeps its error until the props describe a valid one.
pub type SliderModel = Result<SliderState, UiError>;

/// Run one interaction against the model and hand an accepted change to
/// the owner.
pub fn commit_slider(
    model: &ModelHandle<SliderModel>,
    on_change: Option<EventHandler<Vec<f64>>>,
    apply: impl FnOnce(&mut SliderState, &mut Option<Vec<f64>>) -> ChangeOutcome,
) -> ChangeOutcome {
    let mut emitted = None;
    let outcome = model.update(|state| match state {
        Ok(state) => apply(state, &mut emitted),
        Err(_) => ChangeOutcome::Ignored,
    });
    if let (ChangeOutcome::Notified, Some(next)) = (outcome, emitted) {
        tracing::debug!(?next, "slider changed");
        if let Some(handler) = on_change {
            handler.call(next);
        }
    }
    outcome
}

/// Keyboard step on one thumb of a multi-thumb slider.
pub fn press_slider_key(
    model: &ModelHandle<SliderModel>,
    thumb: usize,
    key: SliderKey,
    external: Option<&Vec<f64>>,
    disabled: bool,
    on_change: Option<EventHandler<Vec<f64>>>,
) -> ChangeOutcome {
    commit_slider(model, on_change, |state, emitted| {
        state.key(thumb, key, external, disabled, |next| *emitted = Some(next))
    })
}

/// Value reported by the primitive slider for a single thumb.
pub fn settle_slider_value(
    model: &ModelHandle<SliderModel>,
    thumb: usize,
    value: f64,
    external: Option<&Vec<f64>>,
    disabled: bool,
    on_change: Option<EventHandler<Vec<f64>>>,
) -> ChangeOutcome {
    commit_slider(model, on_change, |state, emitted| {
        state.set_value(thumb, value, external, disabled, |next| *emitted = Some(next))
    })
}

/// Bring the model in line with this render's props. An errored model is
/// rebuilt as soon as the range validates.
fn sync_model(
    slot: &mut SliderModel,
    config: SliderConfig,
    external: Option<&Vec<f64>>,
    default_value: Option<&Vec<f64>>,
    formatter: Option<ValueFormatter>,
) -> Option<ModeViolation> {
    match slot {
        Ok(state) => {
            if let Err(err) = state.set_config(config) {
                tracing::warn!(%err, "slider kept its previous range");
            }
            state.set_formatter(formatter);
            state.sync(external)
        }
        Err(_) => {
            if let Ok(state) =
                SliderState::new(config, external.cloned(), default_value.cloned(), formatter)
            {
                tracing::info!("slider range is valid again");
                *slot = Ok(state);
            }
            None
        }
    }
}

/// Map a key press to a slider step. Arrows follow the track direction,
/// so an inverted track swaps them.
pub fn slider_key(key: &Key, inverted: bool) -> Option<SliderKey> {
    let (forward, back) = if inverted {
        (SliderKey::Decrement, SliderKey::Increment)
    } else {
        (SliderKey::Increment, SliderKey::Decrement)
    };
    match key {
        Key::ArrowRight | Key::ArrowUp => Some(forward),
        Key::ArrowLeft | Key::ArrowDown => Some(back),
        Key::PageUp => Some(SliderKey::PageIncrement),
        Key::PageDown => Some(SliderKey::PageDecrement),
        Key::Home => Some(SliderKey::Home),
        Key::End => Some(SliderKey::End),
        _ => None,
    }
}

fn pointer_fraction(config: &SliderConfig, rect: &PixelsRect, x: f64, y: f64) -> f64 {
    match config.orientation {
        Orientation::Horizontal => config.fraction_in(rect.origin.x, rect.size.width, x),
        Orientation::Vertical => config.fraction_in(rect.origin.y, rect.size.height, y),
    }
}

/// Filled span of the track as `(start, length)` percentages.
fn range_span(config: &SliderConfig, percents: &[f64]) -> (f64, f64) {
    match percents {
        [] => (0.0, 0.0),
        [single] if config.inverted => (*single, 100.0 - single),
        [single] => (0.0, *single),
        many => {
            let start = many.iter().copied().fold(f64::INFINITY, f64::min);
            let end = many.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (start, end - start)
        }
    }
}

fn position_style(orientation: Orientation, offset: f64) -> String {
    match orientation {
        Orientation::Horizontal => format!("left: {offset}%"),
        Orientation::Vertical => format!("bottom: {offset}%"),
    }
}

fn span_style(orientation: Orientation, (start, length): (f64, f64)) -> String {
    match orientation {
        Orientation::Horizontal => format!("left: {start}%; width: {length}%"),
        Orientation::Vertical => format!("bottom: {start}%; height: {length}%"),
    }
}

fn class_attr(class: &'static str) -> Vec<Attribute> {
    vec![Attribute::new("class", class, None, false)]
}

/// One rendered thumb: index, value, track percent, value text, tooltip.
type ThumbView = (usize, f64, f64, String, String);

/// Single or multi-thumb range input.
///
/// A single thumb renders the primitive slider, which owns pointer and
/// keyboard handling and reports values back here. Several thumbs share one
/// track: pressing it moves the closest thumb there and starts a drag that
/// lasts until the pointer is released or leaves the slider, and each
/// thumb steps with the arrow, page, home and end keys.
#[component]
pub fn Slider(props: SliderProps) -> Element {
    let config = SliderConfig {
        min: props.min,
        max: props.max,
        step: props.step,
        orientation: props.orientation,
        inverted: props.inverted,
    };
    let formatter: Option<ValueFormatter> = props
        .format_value
        .map(|format| Rc::new(move |value: f64| format.call(value)) as ValueFormatter);

    let model = use_model(|| {
        SliderState::new(
            config,
            props.value.clone(),
            props.default_value.clone(),
            formatter.clone(),
        )
        .inspect_err(|err| tracing::warn!(%err, "slider rejected its range"))
    });

    let external = props.value.clone();
    let violation = model.sync(|slot| {
        sync_model(
            slot,
            config,
            external.as_ref(),
            props.default_value.as_ref(),
            formatter,
        )
    });
    if let Some(violation) = violation {
        tracing::warn!(?violation, "slider changed control mode after mount");
    }

    let snapshot = model.read(|state| {
        let state = state.as_ref().ok()?;
        if state.length_mismatch(external.as_ref()) {
            tracing::warn!(
                thumbs = state.thumb_count(),
                "slider value length differs from its thumb count"
            );
        }
        let config = *state.config();
        let thumbs: Vec<ThumbView> = state
            .values(external.as_ref())
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let tooltip = state.tooltip(index).unwrap_or_default().to_string();
                (index, value, config.percent(value), state.format(value), tooltip)
            })
            .collect();
        let bounds = (state.format(config.min), state.format(config.max));
        Some((config, thumbs, bounds, state.is_dragging()))
    });

    let invalid = snapshot.is_none();
    let disabled = props.disabled || invalid;
    let dragging = snapshot.as_ref().is_some_and(|(.., dragging)| *dragging);
    let orientation = props.orientation;
    let inverted = props.inverted;
    let show_tooltip = props.show_tooltip;
    let label = props.label.clone();
    let (min, max, step) = (props.min, props.max, props.step);
    let on_change = props.on_value_change;

    let mut track = use_signal(|| None::<Rc<MountedData>>);
    let mut rect = use_signal(|| None::<PixelsRect>);

    let base = vec![
        Attribute::new("class", "slider", None, false),
        Attribute::new("data-orientation", orientation.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    let move_model = model.clone();
    let move_external = external.clone();
    let release_model = model.clone();
    let leave_model = model.clone();
    let down_model = model.clone();
    let down_external = external.clone();
    let single_model = model.clone();
    let single_external = external.clone();

    let (span, thumbs, bounds) = match snapshot {
        Some((config, thumbs, bounds, _)) => {
            let percents: Vec<f64> = thumbs.iter().map(|(_, _, percent, ..)| *percent).collect();
            (Some(range_span(&config, &percents)), thumbs, Some(bounds))
        }
        None => (None, Vec::new(), None),
    };
    let single = match thumbs.as_slice() {
        [only] => Some(only.clone()),
        _ => None,
    };
    let thumb_count = thumbs.len();
    let thumb_label = move |index: usize| {
        label.as_ref().map(|text| {
            if thumb_count > 1 {
                format!("{text} {}", index + 1)
            } else {
                text.clone()
            }
        })
    };
    let items: Vec<_> = thumbs
        .into_iter()
        .map(|thumb| {
            let aria_label = thumb_label(thumb.0);
            (thumb, aria_label, model.clone(), external.clone())
        })
        .collect();
    let single_thumb_attrs = single.as_ref().map(|(index, value, _, value_text, _)| {
        let mut attrs = vec![
            Attribute::new("class", "slider-thumb", None, false),
            Attribute::new("aria-valuetext", value_text.clone(), None, false),
            Attribute::new("data-index", index.to_string(), None, false),
            Attribute::new("data-value", value.to_string(), None, false),
        ];
        if let Some(text) = thumb_label(*index) {
            attrs.push(Attribute::new("aria-label", text, None, false));
        }
        attrs
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "data-disabled": disabled.then_some("true"),
            "aria-disabled": disabled.then_some("true"),
            "data-invalid": invalid.then_some("true"),
            "data-dragging": dragging.then_some("true"),
            onpointermove: move |e: PointerEvent| {
                let pressed = move_model.read(|state| state.as_ref().is_ok_and(SliderState::is_dragging));
                if !pressed {
                    return;
                }
                let Some(rect) = rect() else { return };
                let point = e.client_coordinates();
                let fraction = move_model.read(|state| {
                    state.as_ref().map(|s| pointer_fraction(s.config(), &rect, point.x, point.y)).unwrap_or(0.0)
                });
                commit_slider(&move_model, on_change, |state, emitted| {
                    state.pointer_move(fraction, move_external.as_ref(), disabled, |next| *emitted = Some(next))
                });
            },
            onpointerup: move |_| {
                release_model.update(|state| {
                    if let Ok(state) = state {
                        state.pointer_up();
                    }
                });
            },
            onpointerleave: move |_| {
                if leave_model.read(|state| state.as_ref().is_ok_and(SliderState::is_dragging)) {
                    leave_model.update(|state| {
                        if let Ok(state) = state {
                            state.pointer_up();
                        }
                    });
                }
            },
            ..merged,
            if let Some(text) = props.label.clone() {
                span { class: "slider-label", "{text}" }
            }
            div {
                class: "slider-body",
                if let Some(start) = props.start_label {
                    span { class: "slider-side-label slider-start-label", "{start}" }
                }
                if let (Some((_, value, percent, _, tooltip)), Some(thumb_attrs)) = (single, single_thumb_attrs) {
                    prim::Slider {
                        value: Some(SliderValue::Single(value)),
                        min,
                        max,
                        step,
                        disabled,
                        horizontal: orientation == Orientation::Horizontal,
                        inverted,
                        on_value_change: move |next: SliderValue| {
                            let SliderValue::Single(reported) = next;
                            settle_slider_value(&single_model, 0, reported, single_external.as_ref(), disabled, on_change);
                        },
                        attributes: class_attr("slider-control"),
                        prim::SliderTrack {
                            attributes: vec![
                                Attribute::new("class", "slider-track", None, false),
                                Attribute::new("data-orientation", orientation.as_str(), None, false),
                            ],
                            prim::SliderRange { attributes: class_attr("slider-range") }
                            if show_tooltip {
                                span {
                                    class: "slider-tooltip",
                                    "aria-hidden": "true",
                                    style: position_style(orientation, percent),
                                    "{tooltip}"
                                }
                            }
                        }
                        prim::SliderThumb { attributes: thumb_attrs }
                    }
                } else {
                    div {
                        class: "slider-track",
                        "data-orientation": orientation.as_str(),
                        onmounted: move |e: MountedEvent| track.set(Some(e.data())),
                        onpointerdown: move |e: PointerEvent| {
                            let model = down_model.clone();
                            let external = down_external.clone();
                            async move {
                                if disabled {
                                    return;
                                }
                                let point = e.client_coordinates();
                                let Some(element) = track() else { return };
                                let Ok(measured) = element.get_client_rect().await else {
                                    tracing::debug!("slider track could not be measured");
                                    return;
                                };
                                rect.set(Some(measured));
                                let fraction = model.read(|state| {
                                    state.as_ref().map(|s| pointer_fraction(s.config(), &measured, point.x, point.y)).unwrap_or(0.0)
                                });
                                commit_slider(&model, on_change, |state, emitted| {
                                    state.pointer_down(fraction, external.as_ref(), disabled, |next| *emitted = Some(next))
                                });
                            }
                        },
                        if let Some(span) = span {
                            div { class: "slider-range", style: span_style(orientation, span) }
                        }
                        for ((index, value, percent, value_text, tooltip), aria_label, handle, thumb_external) in items {
                            div {
                                key: "{index}",
                                class: "slider-thumb",
                                role: "slider",
                                tabindex: if disabled { "-1" } else { "0" },
                                style: position_style(orientation, percent),
                                "aria-valuemin": "{min}",
                                "aria-valuemax": "{max}",
                                "aria-valuenow": "{value}",
                                "aria-valuetext": "{value_text}",
                                "aria-orientation": orientation.as_str(),
                                "aria-disabled": disabled.then_some("true"),
                                "aria-label": aria_label,
                                "data-index": "{index}",
                                "data-value": "{value}",
                                onkeydown: move |e: KeyboardEvent| {
                                    let Some(step) = slider_key(&e.key(), inverted) else { return };
                                    e.prevent_default();
                                    press_slider_key(&handle, index, step, thumb_external.as_ref(), disabled, on_change);
                                },
                                if show_tooltip {
                                    span { class: "slider-tooltip", "aria-hidden": "true", "{tooltip}" }
                                }
                            }
                        }
                    }
                }
                if let Some(end) = props.end_label {
                    span { class: "slider-side-label slider-end-label", "{end}" }
                }
            }
            if props.show_min_max {
                if let Some((min_text, max_text)) = bounds {
                    div {
                        class: "slider-bounds",
                        span { class: "slider-bound", "{min_text}" }
                        span { class: "slider-bound", "{max_text}" }
                    }
                }
            }
        }
    }
}
