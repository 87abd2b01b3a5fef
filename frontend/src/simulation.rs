//! State of the "simulate declining ROAS" demo.
//!
//! The browser timers live in the component; this module only knows what a
//! tick and a completion do to the inputs, so the whole run can be stepped
//! through without a browser.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::error::{ConfigError, PricingError, SimulationError};
use crate::pricing::DemoInputs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSchedule {
    pub start_revenue: f64,
    pub step: f64,
    pub floor: f64,
    pub tick_ms: u32,
    pub duration_ms: u32,
    pub reset_revenue: f64,
}

impl Default for SimulationSchedule {
    fn default() -> Self {
        Self {
            start_revenue: 20000.0,
            step: 1000.0,
            floor: 8000.0,
            tick_ms: 500,
            duration_ms: 5000,
            reset_revenue: 15000.0,
        }
    }
}

impl SimulationSchedule {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step > 0.0) {
            return Err(ConfigError::Invalid("simulation step must be positive".into()));
        }
        if !(self.floor > 0.0 && self.floor < self.start_revenue) {
            return Err(ConfigError::Invalid(
                "simulation floor must be positive and below start_revenue".into(),
            ));
        }
        if !(self.reset_revenue > 0.0) {
            return Err(ConfigError::Invalid("reset_revenue must be positive".into()));
        }
        if self.tick_ms == 0 || self.duration_ms < self.tick_ms {
            return Err(ConfigError::Invalid(
                "simulation needs tick_ms > 0 and duration_ms >= tick_ms".into(),
            ));
        }
        Ok(())
    }

    pub fn expected_ticks(&self) -> u32 {
        self.duration_ms / self.tick_ms.max(1)
    }
}

/// Endless sawtooth of revenue values: each step drops by `step` and wraps
/// back to `start_revenue` once it falls below `floor`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclineScript {
    current: f64,
    schedule: SimulationSchedule,
}

impl DeclineScript {
    pub fn new(schedule: SimulationSchedule) -> Self {
        Self {
            current: schedule.start_revenue,
            schedule,
        }
    }
}

impl Iterator for DeclineScript {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.current -= self.schedule.step;
        if self.current < self.schedule.floor {
            self.current = self.schedule.start_revenue;
        }
        Some(self.current)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SimulationRun {
    #[default]
    Idle,
    Running { script: DeclineScript, ticks: u32 },
}

impl SimulationRun {
    pub fn is_running(&self) -> bool {
        matches!(self, SimulationRun::Running { .. })
    }

    pub fn start(&mut self, schedule: SimulationSchedule) -> Result<(), SimulationError> {
        if self.is_running() {
            return Err(SimulationError::AlreadyRunning);
        }
        *self = SimulationRun::Running {
            script: DeclineScript::new(schedule),
            ticks: 0,
        };
        Ok(())
    }

    /// Next scripted revenue, or `None` when idle.
    pub fn tick(&mut self) -> Option<f64> {
        match self {
            SimulationRun::Running { script, ticks } => {
                *ticks += 1;
                script.next()
            }
            SimulationRun::Idle => None,
        }
    }

    /// Ends the run. Returns the number of ticks it saw, or `None` when idle.
    pub fn finish(&mut self) -> Option<u32> {
        match std::mem::take(self) {
            SimulationRun::Running { ticks, .. } => Some(ticks),
            SimulationRun::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoAction {
    SetAdSpend(f64),
    SetRevenue(f64),
    SetBasePrice(f64),
    Start,
    Tick,
    Finish,
}

/// Model of the demo widget: the slider values plus the scripted run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub inputs: DemoInputs,
    pub run: SimulationRun,
    sliders: SliderConfig,
    schedule: SimulationSchedule,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            inputs: DemoInputs::default(),
            run: SimulationRun::Idle,
            sliders: SliderConfig::default(),
            schedule: SimulationSchedule::default(),
        }
    }
}

impl DemoState {
    pub fn new(sliders: SliderConfig, schedule: SimulationSchedule) -> Result<Self, PricingError> {
        let inputs = DemoInputs::new(
            sliders.default_ad_spend,
            sliders.default_revenue,
            sliders.default_base_price,
        )?;
        Ok(Self {
            inputs,
            run: SimulationRun::Idle,
            sliders,
            schedule,
        })
    }

    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    pub fn schedule(&self) -> &SimulationSchedule {
        &self.schedule
    }

    pub fn sliders(&self) -> &SliderConfig {
        &self.sliders
    }

    /// Swaps in new slider ranges and schedule, snapping the current inputs
    /// into the new ranges. A run in progress keeps the script it started with.
    pub fn reconfigure(&mut self, sliders: SliderConfig, schedule: SimulationSchedule) -> bool {
        if self.sliders == sliders && self.schedule == schedule {
            return false;
        }
        let inputs = DemoInputs::new(
            sliders.ad_spend.snap(self.inputs.ad_spend()),
            sliders.revenue.snap(self.inputs.revenue()),
            sliders.base_price.snap(self.inputs.base_price()),
        );
        self.sliders = sliders;
        self.schedule = schedule;
        self.update_inputs(inputs);
        true
    }

    /// Applies an action and reports whether anything visible changed.
    pub fn apply(&mut self, action: DemoAction) -> bool {
        match action {
            DemoAction::SetAdSpend(_) | DemoAction::SetRevenue(_) | DemoAction::SetBasePrice(_)
                if self.is_running() =>
            {
                debug!("Ignoring input change while the simulation runs");
                false
            }
            DemoAction::SetAdSpend(value) => {
                let value = self.sliders.ad_spend.snap(value);
                self.update_inputs(self.inputs.with_ad_spend(value))
            }
            DemoAction::SetRevenue(value) => {
                let value = self.sliders.revenue.snap(value);
                self.update_inputs(self.inputs.with_revenue(value))
            }
            DemoAction::SetBasePrice(value) => {
                let value = self.sliders.base_price.snap(value);
                self.update_inputs(self.inputs.with_base_price(value))
            }
            DemoAction::Start => match self.run.start(self.schedule) {
                Ok(()) => {
                    info!("Starting ROAS decline simulation");
                    true
                }
                Err(e) => {
                    warn!("{}", e);
                    false
                }
            },
            DemoAction::Tick => match self.run.tick() {
                Some(revenue) => self.update_inputs(self.inputs.with_revenue(revenue)),
                None => false,
            },
            DemoAction::Finish => match self.run.finish() {
                Some(ticks) => {
                    info!("Simulation finished after {} ticks", ticks);
                    self.update_inputs(self.inputs.with_revenue(self.schedule.reset_revenue));
                    true
                }
                None => false,
            },
        }
    }

    fn update_inputs(&mut self, next: Result<DemoInputs, PricingError>) -> bool {
        match next {
            Ok(inputs) => {
                let changed = inputs != self.inputs;
                self.inputs = inputs;
                changed
            }
            Err(e) => {
                warn!("Rejected demo input: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderRange;

    fn state() -> DemoState {
        DemoState::new(SliderConfig::default(), SimulationSchedule::default()).unwrap()
    }

    #[test]
    fn decline_script_is_a_sawtooth() {
        let values: Vec<f64> = DeclineScript::new(SimulationSchedule::default()).take(15).collect();
        assert_eq!(values[0], 19000.0);
        assert_eq!(values[11], 8000.0);
        assert_eq!(values[12], 20000.0);
        assert_eq!(values[13], 19000.0);
        assert!(values.iter().all(|v| *v >= 8000.0 && *v <= 20000.0));
    }

    #[test]
    fn full_run_restores_default_revenue() {
        let mut s = state();
        let schedule = *s.schedule();
        assert!(!s.is_running());

        assert!(s.apply(DemoAction::Start));
        assert!(s.is_running());

        for _ in 0..schedule.expected_ticks() {
            s.apply(DemoAction::Tick);
            assert!(s.is_running());
        }
        assert_eq!(s.inputs.revenue(), 10000.0);

        assert!(s.apply(DemoAction::Finish));
        assert!(!s.is_running());
        assert_eq!(s.inputs.revenue(), 15000.0);
    }

    #[test]
    fn restart_while_running_is_rejected() {
        let mut s = state();
        assert!(s.apply(DemoAction::Start));
        s.apply(DemoAction::Tick);
        assert!(!s.apply(DemoAction::Start));
        assert_eq!(
            s.run.start(SimulationSchedule::default()),
            Err(SimulationError::AlreadyRunning)
        );
        assert_eq!(s.inputs.revenue(), 19000.0);
    }

    #[test]
    fn sliders_are_locked_while_running() {
        let mut s = state();
        s.apply(DemoAction::Start);
        assert!(!s.apply(DemoAction::SetAdSpend(9000.0)));
        assert!(!s.apply(DemoAction::SetBasePrice(300.0)));
        assert_eq!(s.inputs.ad_spend(), 5000.0);
        assert_eq!(s.inputs.base_price(), 100.0);

        s.apply(DemoAction::Finish);
        assert!(s.apply(DemoAction::SetAdSpend(9000.0)));
        assert_eq!(s.inputs.ad_spend(), 9000.0);
    }

    #[test]
    fn stray_timer_messages_while_idle_are_ignored() {
        let mut s = state();
        let before = s.clone();
        assert!(!s.apply(DemoAction::Tick));
        assert!(!s.apply(DemoAction::Finish));
        assert_eq!(s, before);
    }

    #[test]
    fn slider_values_are_snapped() {
        let mut s = state();
        s.apply(DemoAction::SetAdSpend(7260.0));
        assert_eq!(s.inputs.ad_spend(), 7500.0);
        s.apply(DemoAction::SetRevenue(0.0));
        assert_eq!(s.inputs.revenue(), 5000.0);
        s.apply(DemoAction::SetBasePrice(10_000.0));
        assert_eq!(s.inputs.base_price(), 500.0);
    }

    #[test]
    fn default_state_matches_default_config() {
        assert_eq!(DemoState::default(), state());
    }

    #[test]
    fn default_schedule_is_valid() {
        let schedule = SimulationSchedule::default();
        assert!(schedule.validate().is_ok());
        assert_eq!(schedule.expected_ticks(), 10);
        let bad = SimulationSchedule { floor: 25000.0, ..schedule };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn reconfigure_snaps_inputs_into_new_ranges() {
        let mut s = state();
        assert!(!s.reconfigure(SliderConfig::default(), SimulationSchedule::default()));

        let sliders = SliderConfig {
            ad_spend: SliderRange::new(1000.0, 4000.0, 500.0),
            ..SliderConfig::default()
        };
        let schedule = SimulationSchedule {
            duration_ms: 2000,
            ..SimulationSchedule::default()
        };
        assert!(s.reconfigure(sliders.clone(), schedule));
        assert_eq!(s.inputs.ad_spend(), 4000.0);
        assert_eq!(s.inputs.revenue(), 15000.0);
        assert_eq!(s.sliders(), &sliders);
        assert_eq!(s.schedule().duration_ms, 2000);

        // the old maximum is now clamped to the new one
        assert!(!s.apply(DemoAction::SetAdSpend(20000.0)));
        assert_eq!(s.inputs.ad_spend(), 4000.0);
    }
}
