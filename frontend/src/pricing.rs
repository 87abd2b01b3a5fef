//! Price-adjustment calculator behind the interactive demo.
//!
//! Everything here is presentation arithmetic: a ROAS shortfall is turned into
//! a clamped percentage price change, and the margins before and after are
//! projected with a fixed demand-retention factor.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PricingError};

/// Tunable constants of the calculator. The defaults are the figures the
/// marketing page has always shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    pub target_roas: f64,
    /// Below this ROAS the band is critical rather than merely below target.
    pub critical_roas: f64,
    /// ROAS under which the warning icon is shown.
    pub warning_roas: f64,
    /// Percentage points of price change per unit of ROAS shortfall.
    pub gain: f64,
    pub min_adjustment_pct: f64,
    pub max_adjustment_pct: f64,
    pub retention_factor: f64,
    /// Floor applied to ad spend before it is used as a denominator.
    pub min_ad_spend: f64,
    pub break_even_roas: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            target_roas: 3.0,
            critical_roas: 2.0,
            warning_roas: 2.5,
            gain: 5.0,
            min_adjustment_pct: -5.0,
            max_adjustment_pct: 15.0,
            retention_factor: 0.7,
            min_ad_spend: 1.0,
            break_even_roas: 1.43,
        }
    }
}

impl PricingPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if !(self.target_roas > 0.0) {
            return invalid("target_roas must be positive");
        }
        if !(self.critical_roas >= 0.0 && self.critical_roas <= self.target_roas) {
            return invalid("critical_roas must lie between 0 and target_roas");
        }
        if !(self.min_adjustment_pct <= 0.0 && self.max_adjustment_pct >= 0.0) {
            return invalid("adjustment band must contain 0");
        }
        if self.min_adjustment_pct <= -100.0 {
            return invalid("min_adjustment_pct must be above -100");
        }
        if !(0.0..=1.0).contains(&self.retention_factor) {
            return invalid("retention_factor must be within [0, 1]");
        }
        if !(self.min_ad_spend > 0.0) {
            return invalid("min_ad_spend must be positive");
        }
        if !self.gain.is_finite() {
            return invalid("gain must be finite");
        }
        Ok(())
    }
}

/// The three slider values. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoInputs {
    ad_spend: f64,
    revenue: f64,
    base_price: f64,
}

fn positive(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if !value.is_finite() {
        return Err(PricingError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(PricingError::NonPositive { field, value });
    }
    Ok(value)
}

impl Default for DemoInputs {
    fn default() -> Self {
        Self {
            ad_spend: 5000.0,
            revenue: 15000.0,
            base_price: 100.0,
        }
    }
}

impl DemoInputs {
    pub fn new(ad_spend: f64, revenue: f64, base_price: f64) -> Result<Self, PricingError> {
        Ok(Self {
            ad_spend: positive("ad spend", ad_spend)?,
            revenue: positive("revenue", revenue)?,
            base_price: positive("base price", base_price)?,
        })
    }

    pub fn ad_spend(&self) -> f64 {
        self.ad_spend
    }

    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn with_ad_spend(self, ad_spend: f64) -> Result<Self, PricingError> {
        Ok(Self {
            ad_spend: positive("ad spend", ad_spend)?,
            ..self
        })
    }

    pub fn with_revenue(self, revenue: f64) -> Result<Self, PricingError> {
        Ok(Self {
            revenue: positive("revenue", revenue)?,
            ..self
        })
    }

    pub fn with_base_price(self, base_price: f64) -> Result<Self, PricingError> {
        Ok(Self {
            base_price: positive("base price", base_price)?,
            ..self
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoasBand {
    Healthy,
    BelowTarget,
    Critical,
}

impl RoasBand {
    pub fn classify(roas: f64, policy: &PricingPolicy) -> Self {
        if roas >= policy.target_roas {
            RoasBand::Healthy
        } else if roas >= policy.critical_roas {
            RoasBand::BelowTarget
        } else {
            RoasBand::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoasBand::Healthy => "Healthy",
            RoasBand::BelowTarget => "Below Target",
            RoasBand::Critical => "Critical - Needs Optimization",
        }
    }

    /// Class for the ROAS figure itself.
    pub fn text_class(&self) -> &'static str {
        match self {
            RoasBand::Healthy => "roas-healthy",
            RoasBand::BelowTarget => "roas-below-target",
            RoasBand::Critical => "roas-critical",
        }
    }

    /// Class for the panel around the ROAS figure.
    pub fn panel_class(&self) -> &'static str {
        match self {
            RoasBand::Healthy => "roas-panel-healthy",
            RoasBand::BelowTarget => "roas-panel-below-target",
            RoasBand::Critical => "roas-panel-critical",
        }
    }

    pub fn explanation(&self, adjustment_pct: f64) -> String {
        match self {
            RoasBand::Healthy => "Your ROAS is healthy. MCD maintains current pricing to maximize volume while protecting margins.".to_string(),
            RoasBand::BelowTarget => format!(
                "ROAS is below target. MCD gradually increases price by {:.1}% to restore profitability without shocking customers.",
                adjustment_pct
            ),
            RoasBand::Critical => format!(
                "Critical ROAS detected. MCD implements a {:.1}% price adjustment to protect margins while monitoring demand elasticity.",
                adjustment_pct
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentDirection {
    Increase,
    Decrease,
    Unchanged,
}

impl AdjustmentDirection {
    pub fn of(pct: f64) -> Self {
        if pct > 0.0 {
            AdjustmentDirection::Increase
        } else if pct < 0.0 {
            AdjustmentDirection::Decrease
        } else {
            AdjustmentDirection::Unchanged
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AdjustmentDirection::Increase => "badge-increase",
            AdjustmentDirection::Decrease => "badge-decrease",
            AdjustmentDirection::Unchanged => "badge-unchanged",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub roas: f64,
    pub roas_gap: f64,
    pub price_adjustment_pct: f64,
    pub adjusted_price: f64,
    pub projected_revenue: f64,
    pub new_roas: f64,
    pub profit_margin_pct: f64,
    pub original_margin_pct: f64,
    pub ad_spend_roi_pct: f64,
    pub profit_per_sale: f64,
    pub margin_gain_pct: f64,
    pub band: RoasBand,
    pub needs_attention: bool,
}

impl DerivedMetrics {
    pub fn direction(&self) -> AdjustmentDirection {
        AdjustmentDirection::of(self.price_adjustment_pct)
    }

    /// "+7.5%", "-2.0%" or "0.0%".
    pub fn adjustment_badge(&self) -> String {
        match self.direction() {
            AdjustmentDirection::Increase => format!("+{:.1}%", self.price_adjustment_pct),
            _ => format!("{:.1}%", self.price_adjustment_pct),
        }
    }
}

fn margin_pct(revenue: f64, cost: f64) -> f64 {
    if revenue <= 0.0 {
        return 0.0;
    }
    (revenue - cost) / revenue * 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Maps the demo inputs to everything the results panel shows.
pub fn compute(inputs: &DemoInputs, policy: &PricingPolicy) -> DerivedMetrics {
    let ad_spend = inputs.ad_spend.max(policy.min_ad_spend);
    let revenue = inputs.revenue;
    let base_price = inputs.base_price;

    let roas = revenue / ad_spend;
    let roas_gap = (policy.target_roas - roas).max(0.0);
    let price_adjustment_pct = (roas_gap * policy.gain)
        .clamp(policy.min_adjustment_pct, policy.max_adjustment_pct);
    let adjusted_price = base_price * (1.0 + price_adjustment_pct / 100.0);
    let projected_revenue =
        revenue * (1.0 + policy.retention_factor * price_adjustment_pct / 100.0);
    let new_roas = projected_revenue / ad_spend;

    let profit_margin_pct = margin_pct(projected_revenue, ad_spend);
    let original_margin_pct = margin_pct(revenue, ad_spend);

    DerivedMetrics {
        roas,
        roas_gap,
        price_adjustment_pct,
        adjusted_price,
        projected_revenue,
        new_roas,
        profit_margin_pct,
        original_margin_pct,
        ad_spend_roi_pct: (revenue - ad_spend) / ad_spend * 100.0,
        profit_per_sale: adjusted_price - (ad_spend / revenue) * adjusted_price,
        margin_gain_pct: round1(profit_margin_pct) - round1(original_margin_pct),
        band: RoasBand::classify(roas, policy),
        needs_attention: roas < policy.warning_roas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn metrics(ad_spend: f64, revenue: f64, base_price: f64) -> DerivedMetrics {
        let inputs = DemoInputs::new(ad_spend, revenue, base_price).unwrap();
        compute(&inputs, &PricingPolicy::default())
    }

    #[test]
    fn on_target_roas_keeps_price() {
        let m = metrics(5000.0, 15000.0, 100.0);
        assert!((m.roas - 3.0).abs() < EPS);
        assert_eq!(m.roas_gap, 0.0);
        assert_eq!(m.price_adjustment_pct, 0.0);
        assert!((m.adjusted_price - 100.0).abs() < EPS);
        assert_eq!(format!("{:.1}", m.original_margin_pct), "66.7");
        assert_eq!(m.band, RoasBand::Healthy);
        assert_eq!(m.adjustment_badge(), "0.0%");
        assert!(!m.needs_attention);
    }

    #[test]
    fn below_target_raises_price() {
        let m = metrics(10000.0, 15000.0, 100.0);
        assert!((m.roas - 1.5).abs() < EPS);
        assert!((m.roas_gap - 1.5).abs() < EPS);
        assert!((m.price_adjustment_pct - 7.5).abs() < EPS);
        assert!((m.adjusted_price - 107.5).abs() < EPS);
        assert_eq!(m.band, RoasBand::Critical);
        assert_eq!(m.adjustment_badge(), "+7.5%");
        assert!(m.needs_attention);
    }

    #[test]
    fn deep_shortfall_stays_inside_cap() {
        let m = metrics(8000.0, 6000.0, 50.0);
        assert!((m.roas - 0.75).abs() < EPS);
        assert!((m.roas_gap - 2.25).abs() < EPS);
        assert!((m.price_adjustment_pct - 11.25).abs() < EPS);
        assert!((m.adjusted_price - 55.625).abs() < EPS);
    }

    #[test]
    fn lowest_slider_roas_stays_under_the_cap() {
        // roas 0.25, gap 2.75
        let m = metrics(20000.0, 5000.0, 100.0);
        assert!((m.price_adjustment_pct - 13.75).abs() < EPS);
        assert!((m.adjusted_price - 113.75).abs() < EPS);
    }

    #[test]
    fn steep_gain_hits_the_upper_cap() {
        let policy = PricingPolicy {
            gain: 10.0,
            ..PricingPolicy::default()
        };
        let inputs = DemoInputs::new(20000.0, 5000.0, 100.0).unwrap();
        let m = compute(&inputs, &policy);
        assert_eq!(m.price_adjustment_pct, 15.0);
        assert!((m.adjusted_price - 115.0).abs() < EPS);
        assert_eq!(m.direction(), AdjustmentDirection::Increase);
        assert_eq!(m.adjustment_badge(), "+15.0%");
    }

    #[test]
    fn negative_gain_hits_the_lower_floor() {
        let policy = PricingPolicy {
            gain: -10.0,
            ..PricingPolicy::default()
        };
        let inputs = DemoInputs::new(10000.0, 15000.0, 100.0).unwrap();
        let m = compute(&inputs, &policy);
        assert_eq!(m.price_adjustment_pct, -5.0);
        assert!((m.adjusted_price - 95.0).abs() < EPS);
        assert_eq!(m.direction(), AdjustmentDirection::Decrease);
        assert_eq!(m.direction().badge_class(), "badge-decrease");
        assert_eq!(m.adjustment_badge(), "-5.0%");
    }

    #[test]
    fn adjustment_always_within_band() {
        let policy = PricingPolicy::default();
        for ad_spend in [1.0, 10.0, 1000.0, 5000.0, 20000.0, 1e7] {
            for revenue in [1.0, 5000.0, 15000.0, 50000.0, 1e9] {
                let inputs = DemoInputs::new(ad_spend, revenue, 100.0).unwrap();
                let m = compute(&inputs, &policy);
                assert!(m.roas >= 0.0);
                assert!((m.roas - revenue / ad_spend).abs() <= EPS * m.roas.max(1.0));
                assert!(m.price_adjustment_pct >= -5.0 && m.price_adjustment_pct <= 15.0);
                if m.roas >= 3.0 {
                    assert_eq!(m.price_adjustment_pct, 0.0);
                }
            }
        }
    }

    #[test]
    fn lowering_ad_spend_never_lowers_roas_nor_raises_adjustment() {
        let policy = PricingPolicy::default();
        let mut previous: Option<DerivedMetrics> = None;
        let mut ad_spend = 20000.0;
        while ad_spend >= 1000.0 {
            let inputs = DemoInputs::new(ad_spend, 15000.0, 100.0).unwrap();
            let m = compute(&inputs, &policy);
            if let Some(prev) = previous {
                assert!(m.roas >= prev.roas);
                assert!(m.price_adjustment_pct <= prev.price_adjustment_pct);
            }
            previous = Some(m);
            ad_spend -= 500.0;
        }
    }

    #[test]
    fn recomputing_is_idempotent() {
        let inputs = DemoInputs::new(7500.0, 12000.0, 240.0).unwrap();
        let policy = PricingPolicy::default();
        assert_eq!(compute(&inputs, &policy), compute(&inputs, &policy));
    }

    #[test]
    fn non_positive_or_non_finite_inputs_are_rejected() {
        assert_eq!(
            DemoInputs::new(0.0, 15000.0, 100.0),
            Err(PricingError::NonPositive { field: "ad spend", value: 0.0 })
        );
        assert!(matches!(
            DemoInputs::new(5000.0, -1.0, 100.0),
            Err(PricingError::NonPositive { field: "revenue", .. })
        ));
        assert_eq!(
            DemoInputs::new(5000.0, 15000.0, f64::INFINITY),
            Err(PricingError::NonFinite { field: "base price" })
        );
        let inputs = DemoInputs::new(5000.0, 15000.0, 100.0).unwrap();
        assert!(inputs.with_ad_spend(f64::NAN).is_err());
        assert_eq!(inputs.with_revenue(9000.0).unwrap().revenue(), 9000.0);
    }

    #[test]
    fn tiny_ad_spend_is_floored() {
        let inputs = DemoInputs::new(1e-12, 15000.0, 100.0).unwrap();
        let m = compute(&inputs, &PricingPolicy::default());
        assert!(m.roas.is_finite());
        assert!((m.roas - 15000.0).abs() < EPS);
        assert!(m.new_roas.is_finite());
        assert!(m.ad_spend_roi_pct.is_finite());
    }

    #[test]
    fn bands_share_thresholds() {
        let policy = PricingPolicy::default();
        assert_eq!(RoasBand::classify(3.0, &policy), RoasBand::Healthy);
        assert_eq!(RoasBand::classify(2.99, &policy), RoasBand::BelowTarget);
        assert_eq!(RoasBand::classify(2.0, &policy), RoasBand::BelowTarget);
        assert_eq!(RoasBand::classify(1.99, &policy), RoasBand::Critical);

        let m = metrics(6000.0, 15000.0, 100.0);
        assert_eq!(m.band, RoasBand::BelowTarget);
        assert_eq!(
            m.band.explanation(m.price_adjustment_pct),
            "ROAS is below target. MCD gradually increases price by 2.5% to restore profitability without shocking customers."
        );
    }

    #[test]
    fn supplementary_figures() {
        let m = metrics(10000.0, 15000.0, 100.0);
        assert!((m.ad_spend_roi_pct - 50.0).abs() < EPS);
        // 107.5 - (10000 / 15000) * 107.5
        assert!((m.profit_per_sale - 107.5 / 3.0).abs() < 1e-6);
        // projected revenue 15000 * 1.0525 = 15787.5
        assert!((m.projected_revenue - 15787.5).abs() < 1e-6);
        assert!((m.new_roas - 1.57875).abs() < 1e-9);
        assert_eq!(format!("{:.1}", m.profit_margin_pct), "36.7");
        assert_eq!(format!("{:.1}", m.original_margin_pct), "33.3");
        assert!((m.margin_gain_pct - 3.4).abs() < 1e-9);
    }

    #[test]
    fn default_policy_is_valid() {
        assert!(PricingPolicy::default().validate().is_ok());
        let bad = PricingPolicy {
            retention_factor: 1.5,
            ..PricingPolicy::default()
        };
        assert!(bad.validate().is_err());
    }
}
