/// Visual variant of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressVariant {
    /// Color follows the completion tier.
    #[default]
    Default,
    /// Single fixed color regardless of value.
    Generic,
}

impl ProgressVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressVariant::Default => "default",
            ProgressVariant::Generic => "generic",
        }
    }

    /// Unknown keys fall back to the default variant.
    pub fn from_key(s: &str) -> Self {
        match s {
            "generic" => ProgressVariant::Generic,
            _ => ProgressVariant::Default,
        }
    }
}

/// Color tier of the filled bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Low,
    Mid,
    Complete,
    /// Used by [`ProgressVariant::Generic`].
    Neutral,
}

pub const MID_THRESHOLD: f64 = 40.0;
pub const COMPLETE_THRESHOLD: f64 = 100.0;

impl ProgressTier {
    /// Tier for an already clamped percentage.
    pub fn for_percent(variant: ProgressVariant, percent: f64) -> Self {
        match variant {
            ProgressVariant::Generic => ProgressTier::Neutral,
            ProgressVariant::Default if percent >= COMPLETE_THRESHOLD => ProgressTier::Complete,
            ProgressVariant::Default if percent >= MID_THRESHOLD => ProgressTier::Mid,
            ProgressVariant::Default => ProgressTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressTier::Low => "low",
            ProgressTier::Mid => "mid",
            ProgressTier::Complete => "complete",
            ProgressTier::Neutral => "neutral",
        }
    }
}

/// Clamp to `[0, 100]`. NaN counts as no progress.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Percentage that `part` represents of `total`, clamped.
///
/// A non-positive total yields 0 rather than dividing by zero.
pub fn ratio_percent(part: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    clamp_percent(part / total * 100.0)
}

/// Everything a progress bar derives from its raw input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReading {
    pub percent: f64,
    pub tier: ProgressTier,
}

impl ProgressReading {
    pub fn new(value: f64, variant: ProgressVariant) -> Self {
        let percent = clamp_percent(value);
        Self {
            percent,
            tier: ProgressTier::for_percent(variant, percent),
        }
    }

    /// CSS width of the filled bar, e.g. `"62.5%"`.
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Rounded percentage for display, e.g. `"63%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.percent.round())
    }
}
