use log::{warn, Level};
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::error::ConfigError;
use crate::pricing::PricingPolicy;
use crate::simulation::SimulationSchedule;

/// Id of the optional inline JSON element that overrides the defaults.
pub const CONFIG_ELEMENT_ID: &str = "mcd-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Bounds of a range input. Values are snapped onto the `min + k * step` grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.min > 0.0 && self.min <= self.max && self.step >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{name} slider needs 0 < min <= max and step >= 0"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub ad_spend: SliderRange,
    pub revenue: SliderRange,
    pub base_price: SliderRange,
    pub default_ad_spend: f64,
    pub default_revenue: f64,
    pub default_base_price: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            ad_spend: SliderRange::new(1000.0, 20000.0, 500.0),
            revenue: SliderRange::new(5000.0, 50000.0, 1000.0),
            base_price: SliderRange::new(20.0, 500.0, 10.0),
            default_ad_spend: 5000.0,
            default_revenue: 15000.0,
            default_base_price: 100.0,
        }
    }
}

/// Timing of the count-up animation in the stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSchedule {
    pub duration_ms: u32,
    pub steps: u32,
}

impl CounterSchedule {
    pub fn tick_ms(&self) -> u32 {
        (self.duration_ms / self.steps.max(1)).max(1)
    }
}

impl Default for CounterSchedule {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            steps: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pricing: PricingPolicy,
    pub sliders: SliderConfig,
    pub simulation: SimulationSchedule,
    pub counters: CounterSchedule,
    pub scroll_threshold_px: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: PricingPolicy::default(),
            sliders: SliderConfig::default(),
            simulation: SimulationSchedule::default(),
            counters: CounterSchedule::default(),
            scroll_threshold_px: 50.0,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pricing.validate()?;
        self.simulation.validate()?;
        self.sliders.ad_spend.validate("ad spend")?;
        self.sliders.revenue.validate("revenue")?;
        self.sliders.base_price.validate("base price")?;

        let defaults = [
            ("ad spend", &self.sliders.ad_spend, self.sliders.default_ad_spend),
            ("revenue", &self.sliders.revenue, self.sliders.default_revenue),
            ("base price", &self.sliders.base_price, self.sliders.default_base_price),
        ];
        for (name, range, value) in defaults {
            if !range.contains(value) {
                return Err(ConfigError::Invalid(format!(
                    "default {name} {value} is outside its slider range"
                )));
            }
        }
        if self.counters.steps == 0 {
            return Err(ConfigError::Invalid("counter steps must be non-zero".into()));
        }
        Ok(())
    }

    /// Reads the inline `#mcd-config` JSON from the host page. Called once at
    /// startup; components get the result through the app context.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        Self::from_embedded(raw.as_deref())
    }

    /// Config for the given `#mcd-config` text. Missing or blank text gives the
    /// defaults; malformed text is logged and also gives the defaults.
    pub fn from_embedded(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_step_grid() {
        let range = SliderRange::new(1000.0, 20000.0, 500.0);
        assert_eq!(range.snap(1240.0), 1000.0);
        assert_eq!(range.snap(1260.0), 1500.0);
        assert_eq!(range.snap(0.0), 1000.0);
        assert_eq!(range.snap(1e9), 20000.0);
        assert_eq!(range.snap(f64::NAN), 1000.0);
    }

    #[test]
    fn empty_object_yields_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = AppConfig::from_json(r#"{"pricing": {"target_roas": 4.0}}"#).unwrap();
        assert_eq!(config.pricing.target_roas, 4.0);
        assert_eq!(config.pricing.max_adjustment_pct, 15.0);
        assert_eq!(config.sliders, SliderConfig::default());
    }

    #[test]
    fn rejects_inverted_clamp_band() {
        let err = AppConfig::from_json(
            r#"{"pricing": {"min_adjustment_pct": 10.0, "max_adjustment_pct": -10.0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_default_outside_range() {
        let err = AppConfig::from_json(r#"{"sliders": {"default_revenue": 100.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn counter_tick_matches_duration_over_steps() {
        assert_eq!(CounterSchedule::default().tick_ms(), 20);
    }

    #[test]
    fn embedded_text_falls_back_to_defaults() {
        assert_eq!(AppConfig::from_embedded(None), AppConfig::default());
        assert_eq!(AppConfig::from_embedded(Some("  \n ")), AppConfig::default());
        assert_eq!(AppConfig::from_embedded(Some("{ not json")), AppConfig::default());
        assert_eq!(
            AppConfig::from_embedded(Some(r#"{"scroll_threshold_px": 80.0}"#)).scroll_threshold_px,
            80.0
        );
    }
}
