use dioxus::prelude::*;
use kit_core::{ratio_percent, ProgressReading, ProgressTier, ProgressVariant};
use kit_ui::ProgressBar;
use pretty_assertions::assert_eq;

use crate::common;

#[test]
fn test_tier_boundaries() {
    let cases = [
        (-20.0, 0.0, ProgressTier::Low),
        (39.9, 39.9, ProgressTier::Low),
        (40.0, 40.0, ProgressTier::Mid),
        (99.5, 99.5, ProgressTier::Mid),
        (100.0, 100.0, ProgressTier::Complete),
        (250.0, 100.0, ProgressTier::Complete),
        (f64::NAN, 0.0, ProgressTier::Low),
    ];
    for (input, percent, tier) in cases {
        let reading = ProgressReading::new(input, ProgressVariant::Default);
        assert_eq!(reading.percent, percent, "percent for input {input}");
        assert_eq!(reading.tier, tier, "tier for input {input}");
    }
}

#[test]
fn test_generic_variant_ignores_tiers() {
    for input in [0.0, 50.0, 100.0] {
        let reading = ProgressReading::new(input, ProgressVariant::Generic);
        assert_eq!(reading.tier, ProgressTier::Neutral);
    }
}

#[test]
fn test_ratio_of_total() {
    assert_eq!(ratio_percent(3.0, 4.0), 75.0);
    assert_eq!(ratio_percent(9.0, 4.0), 100.0);
    assert_eq!(ratio_percent(3.0, 0.0), 0.0);
    assert_eq!(ratio_percent(3.0, -2.0), 0.0);
}

fn dashboard_app() -> Element {
    rsx! {
        ProgressBar { value: 12.0 }
        ProgressBar { value: 64.0, show_label: true }
        ProgressBar { value: 3.0, total: 3.0 }
        ProgressBar { value: 64.0, variant: ProgressVariant::Generic }
    }
}

#[test]
fn test_dashboard_bars() {
    let html = common::render_app(dashboard_app);

    assert_eq!(common::count(&html, r#"role="progressbar""#), 4);
    assert_eq!(
        common::attr_values(&html, "data-tier"),
        vec!["low", "mid", "complete", "neutral"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(
        common::attr_values(&html, "data-percent"),
        vec!["12", "64", "100", "64"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(common::count(&html, "progress-bar-label"), 1);
}
