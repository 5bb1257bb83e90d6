use std::fmt;
use std::rc::Rc;

use crate::controllable::{ChangeOutcome, Controllable, ModeViolation};
use crate::error::UiError;

/// Number of steps a PageUp/PageDown moves a thumb.
pub const PAGE_STEPS: f64 = 10.0;

/// Turns a thumb value into tooltip text.
pub type ValueFormatter = Rc<dyn Fn(f64) -> String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "vertical" => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }
}

/// Keyboard intents a thumb understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    Increment,
    Decrement,
    PageIncrement,
    PageDecrement,
    Home,
    End,
}

/// Range and geometry of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub orientation: Orientation,
    pub inverted: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            orientation: Orientation::Horizontal,
            inverted: false,
        }
    }
}

impl SliderConfig {
    pub fn validate(&self) -> Result<(), UiError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(UiError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 || !self.step.is_finite() {
            return Err(UiError::InvalidStep(self.step));
        }
        Ok(())
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Snap to the nearest step from `min`, rounded to the step's precision.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        let scale = 10f64.powi(step_decimals(self.step));
        self.clamp((snapped * scale).round() / scale)
    }

    /// Value under a position along the track, `0.0` being the track start.
    pub fn value_at(&self, fraction: f64) -> f64 {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        let fraction = if self.inverted { 1.0 - fraction } else { fraction };
        self.snap(self.min + fraction * (self.max - self.min))
    }

    /// Track fraction under a pointer coordinate, given where the rendered
    /// track starts and how long it is on the same axis. Vertical tracks
    /// grow upwards.
    pub fn fraction_in(&self, start: f64, length: f64, point: f64) -> f64 {
        if length <= 0.0 || !length.is_finite() {
            return 0.0;
        }
        let fraction = ((point - start) / length).clamp(0.0, 1.0);
        match self.orientation {
            Orientation::Horizontal => fraction,
            Orientation::Vertical => 1.0 - fraction,
        }
    }

    /// Offset of `value` along the track in percent.
    pub fn percent(&self, value: f64) -> f64 {
        let percent = (self.clamp(value) - self.min) / (self.max - self.min) * 100.0;
        if self.inverted {
            100.0 - percent
        } else {
            percent
        }
    }
}

fn step_decimals(step: f64) -> i32 {
    let text = step.to_string();
    text.split_once('.')
        .map(|(_, frac)| frac.len() as i32)
        .unwrap_or(0)
}

/// Plain tooltip text when no formatter is supplied: `50`, `2.5`.
pub fn format_plain(value: f64) -> String {
    value.to_string()
}

/// Interaction state of a slider with one or more thumbs.
#[derive(Clone)]
pub struct SliderState {
    config: SliderConfig,
    values: Controllable<Vec<f64>>,
    thumb_count: usize,
    pressed: Option<usize>,
    tooltips: Vec<String>,
    /// An interaction happened since the last `sync`; the owner's answer
    /// is read back into the tooltips there.
    readback: bool,
    formatter: Option<ValueFormatter>,
}

impl fmt::Debug for SliderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderState")
            .field("config", &self.config)
            .field("values", &self.values)
            .field("thumb_count", &self.thumb_count)
            .field("pressed", &self.pressed)
            .field("tooltips", &self.tooltips)
            .field("readback", &self.readback)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl SliderState {
    /// The thumb count is taken from whichever of `value` / `default_value`
    /// is present now and never changes afterwards.
    pub fn new(
        config: SliderConfig,
        value: Option<Vec<f64>>,
        default_value: Option<Vec<f64>>,
        formatter: Option<ValueFormatter>,
    ) -> Result<Self, UiError> {
        config.validate()?;

        let seed = value.as_ref().or(default_value.as_ref());
        let thumb_count = seed.map(|v| v.len()).filter(|n| *n > 0).unwrap_or(1);
        let values = Controllable::new(value, default_value, || vec![config.min]);

        let mut state = Self {
            config,
            values,
            thumb_count,
            pressed: None,
            tooltips: Vec::new(),
            readback: false,
            formatter,
        };
        state.refresh_tooltips(None);
        Ok(state)
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replace the range. Values are re-clamped on the next read; an
    /// invalid range is rejected and the previous one kept.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<(), UiError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Swap the formatter. Existing tooltip text is kept until the next
    /// interaction.
    pub fn set_formatter(&mut self, formatter: Option<ValueFormatter>) {
        self.formatter = formatter;
    }

    pub fn thumb_count(&self) -> usize {
        self.thumb_count
    }

    pub fn is_dragging(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn pressed_thumb(&self) -> Option<usize> {
        self.pressed
    }

    /// Tooltip text as of the last interaction with that thumb.
    pub fn tooltip(&self, thumb: usize) -> Option<&str> {
        self.tooltips.get(thumb).map(String::as_str)
    }

    pub fn format(&self, value: f64) -> String {
        match &self.formatter {
            Some(formatter) => formatter(value),
            None => format_plain(value),
        }
    }

    /// The owner supplied a sequence whose length differs from the thumb
    /// count fixed at construction.
    pub fn length_mismatch(&self, external: Option<&Vec<f64>>) -> bool {
        external.is_some_and(|v| v.len() != self.thumb_count)
    }

    /// Record the owner's value for this render. After an interaction the
    /// tooltips are re-read from the values the owner settled on.
    pub fn sync(&mut self, external: Option<&Vec<f64>>) -> Option<ModeViolation> {
        let violation = self.values.sync(external);
        if std::mem::take(&mut self.readback) {
            self.refresh_tooltips(external);
        }
        violation
    }

    /// Resolved values, clamped and in ascending order, one per thumb.
    ///
    /// Extra entries are dropped and missing ones are taken from the
    /// previously held values.
    pub fn values(&self, external: Option<&Vec<f64>>) -> Vec<f64> {
        let resolved = self.values.resolve(external);
        let held = self.values.internal();
        let mut values: Vec<f64> = (0..self.thumb_count)
            .map(|i| {
                let raw = resolved
                    .get(i)
                    .or_else(|| held.get(i))
                    .copied()
                    .unwrap_or(self.config.min);
                self.config.clamp(raw)
            })
            .collect();
        values.sort_by(f64::total_cmp);
        values
    }

    fn refresh_tooltips(&mut self, external: Option<&Vec<f64>>) {
        let tooltips = self
            .values(external)
            .iter()
            .map(|value| self.format(*value))
            .collect();
        self.tooltips = tooltips;
    }

    /// Index of the thumb nearest to `target`.
    ///
    /// When stacked thumbs tie, a target past them picks the last one so
    /// the stack can be pulled apart.
    pub fn closest_thumb(&self, values: &[f64], target: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (i, value) in values.iter().enumerate() {
            let distance = (value - target).abs();
            if distance < best_distance || (distance == best_distance && target > *value) {
                best = i;
                best_distance = distance;
            }
        }
        best
    }

    /// Pointer pressed on the track at `fraction` of its length.
    pub fn pointer_down(
        &mut self,
        fraction: f64,
        external: Option<&Vec<f64>>,
        disabled: bool,
        notify: impl FnOnce(Vec<f64>),
    ) -> ChangeOutcome {
        if disabled {
            return ChangeOutcome::Ignored;
        }
        let values = self.values(external);
        let target = self.config.value_at(fraction);
        let thumb = self.closest_thumb(&values, target);
        self.pressed = Some(thumb);
        self.move_thumb(values, thumb, target, external, notify)
    }

    /// Pointer moved. Only acts while a thumb is pressed.
    pub fn pointer_move(
        &mut self,
        fraction: f64,
        external: Option<&Vec<f64>>,
        disabled: bool,
        notify: impl FnOnce(Vec<f64>),
    ) -> ChangeOutcome {
        let Some(thumb) = self.pressed else {
            return ChangeOutcome::Ignored;
        };
        if disabled {
            return ChangeOutcome::Ignored;
        }
        let values = self.values(external);
        let target = self.config.value_at(fraction);
        self.move_thumb(values, thumb, target, external, notify)
    }

    pub fn pointer_up(&mut self) {
        self.pressed = None;
    }

    /// Keyboard step on one thumb.
    pub fn key(
        &mut self,
        thumb: usize,
        key: SliderKey,
        external: Option<&Vec<f64>>,
        disabled: bool,
        notify: impl FnOnce(Vec<f64>),
    ) -> ChangeOutcome {
        if disabled || thumb >= self.thumb_count {
            return ChangeOutcome::Ignored;
        }
        let values = self.values(external);
        let current = values[thumb];
        let step = self.config.step;
        let target = match key {
            SliderKey::Increment => current + step,
            SliderKey::Decrement => current - step,
            SliderKey::PageIncrement => current + step * PAGE_STEPS,
            SliderKey::PageDecrement => current - step * PAGE_STEPS,
            SliderKey::Home => self.config.min,
            SliderKey::End => self.config.max,
        };
        self.move_thumb(values, thumb, self.config.snap(target), external, notify)
    }

    /// A thumb was moved to `value` by something that tracks the pointer
    /// and keys on its own, such as the single-thumb primitive slider.
    pub fn set_value(
        &mut self,
        thumb: usize,
        value: f64,
        external: Option<&Vec<f64>>,
        disabled: bool,
        notify: impl FnOnce(Vec<f64>),
    ) -> ChangeOutcome {
        if disabled || thumb >= self.thumb_count {
            return ChangeOutcome::Ignored;
        }
        let values = self.values(external);
        self.move_thumb(values, thumb, self.config.snap(value), external, notify)
    }

    fn move_thumb(
        &mut self,
        mut values: Vec<f64>,
        thumb: usize,
        target: f64,
        external: Option<&Vec<f64>>,
        notify: impl FnOnce(Vec<f64>),
    ) -> ChangeOutcome {
        let lower = if thumb > 0 { values[thumb - 1] } else { self.config.min };
        let upper = values.get(thumb + 1).copied().unwrap_or(self.config.max);
        values[thumb] = target.max(lower).min(upper);

        let outcome = self.values.change(values, false, notify);
        self.refresh_tooltips(external);
        self.readback = true;
        outcome
    }
}
