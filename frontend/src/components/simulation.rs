use gloo_timers::callback::{Interval, Timeout};
use log::{debug, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{SliderConfig, SliderRange};
use crate::format::{cents, dollars, percent};
use crate::pricing::{self, PricingPolicy};
use crate::simulation::{DemoAction, DemoState, SimulationSchedule};

#[derive(Properties, PartialEq)]
pub struct SimulationProps {
    pub policy: PricingPolicy,
    pub sliders: SliderConfig,
    pub schedule: SimulationSchedule,
    /// Class of the surrounding section, driven by the scroll-reveal state.
    pub reveal_class: &'static str,
}

/// Timers of one simulation run. The ticker is released by the completion;
/// both are released when the widget goes away.
struct SimulationTimers {
    ticker: Option<Interval>,
    _completion: Timeout,
}

pub struct SimulationSection {
    state: DemoState,
    timers: Option<SimulationTimers>,
}

impl SimulationSection {
    fn arm_timers(&mut self, ctx: &Context<Self>) {
        let schedule = *self.state.schedule();

        let ticker = {
            let link = ctx.link().clone();
            Interval::new(schedule.tick_ms, move || link.send_message(DemoAction::Tick))
        };
        let completion = {
            let link = ctx.link().clone();
            Timeout::new(schedule.duration_ms, move || link.send_message(DemoAction::Finish))
        };

        self.timers = Some(SimulationTimers {
            ticker: Some(ticker),
            _completion: completion,
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn slider(
        ctx: &Context<Self>,
        label: &'static str,
        display: String,
        display_class: &'static str,
        range: SliderRange,
        value: f64,
        disabled: bool,
        action: fn(f64) -> DemoAction,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            action(input.value_as_number())
        });

        html! {
            <div class="slider-group">
                <label class="slider-label">
                    <span class="slider-name">{label}</span>
                    <span class={display_class}>{display}</span>
                </label>
                <input
                    type="range"
                    class="slider"
                    min={range.min.to_string()}
                    max={range.max.to_string()}
                    step={range.step.to_string()}
                    value={value.to_string()}
                    {oninput}
                    {disabled}
                />
            </div>
        }
    }
}

impl Component for SimulationSection {
    type Message = DemoAction;
    type Properties = SimulationProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let state = DemoState::new(props.sliders.clone(), props.schedule).unwrap_or_else(|e| {
            warn!("Falling back to default demo inputs: {}", e);
            DemoState::default()
        });

        Self { state, timers: None }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.sliders != old_props.sliders || props.schedule != old_props.schedule {
            debug!("Demo configuration changed");
            self.state.reconfigure(props.sliders.clone(), props.schedule);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DemoAction::Start => {
                let started = self.state.apply(DemoAction::Start);
                if started {
                    self.arm_timers(ctx);
                }
                started
            }
            DemoAction::Finish => {
                if let Some(timers) = self.timers.as_mut() {
                    drop(timers.ticker.take());
                }
                self.state.apply(DemoAction::Finish)
            }
            other => self.state.apply(other),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.timers.take().is_some() {
            debug!("Simulation widget torn down, timers released");
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let inputs = &self.state.inputs;
        let sliders = self.state.sliders();
        let running = self.state.is_running();
        let m = pricing::compute(inputs, &props.policy);

        let start = ctx.link().callback(|_: MouseEvent| DemoAction::Start);

        html! {
            <section id="simulation" class={classes!(props.reveal_class, "simulation-section")}>
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"See MCD "}<span class="gradient-text">{"In Action"}</span></h2>
                        <p>{"Watch how MCD automatically adjusts prices when your ROAS changes. Try adjusting your ad spend and revenue to see real-time price optimization."}</p>
                    </div>

                    <div class="simulation-card">
                        <div class="simulation-grid">
                            <div class="simulation-controls">
                                <h3>{"Your Marketing Metrics"}</h3>
                                { Self::slider(ctx, "💵 Monthly Ad Spend", dollars(inputs.ad_spend()), "value-blue",
                                    sliders.ad_spend, inputs.ad_spend(), running, DemoAction::SetAdSpend) }
                                { Self::slider(ctx, "📈 Revenue from Ads", dollars(inputs.revenue()), "value-green",
                                    sliders.revenue, inputs.revenue(), running, DemoAction::SetRevenue) }
                                { Self::slider(ctx, "Base Product Price", dollars(inputs.base_price()), "value-plain",
                                    sliders.base_price, inputs.base_price(), running, DemoAction::SetBasePrice) }

                                <button
                                    class={classes!("simulate-button", running.then(|| "running"))}
                                    onclick={start}
                                    disabled={running}
                                >
                                    {
                                        if running {
                                            html! { <><span class="spin">{"⟳"}</span>{" Simulating ROAS Decline..."}</> }
                                        } else {
                                            html! { <>{"📉 Simulate Declining ROAS"}</> }
                                        }
                                    }
                                </button>
                            </div>

                            <div class="simulation-results">
                                <h3>{"MCD Response"}</h3>

                                <div class={classes!("roas-panel", m.band.panel_class())}>
                                    <div class="roas-panel-header">
                                        <span>{"Current ROAS"}</span>
                                        {
                                            if m.needs_attention {
                                                html! { <span class="roas-warning" title="ROAS below warning level">{"⚠"}</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                    <div class={classes!("roas-value", m.band.text_class())}>
                                        {format!("{:.2}x", m.roas)}
                                    </div>
                                    <div class="roas-label">{m.band.label()}</div>
                                </div>

                                <div class="adjustment-panel">
                                    <div class="panel-caption">{"MCD Price Adjustment"}</div>
                                    <div class="adjustment-row">
                                        <span class="price-before">{cents(inputs.base_price())}</span>
                                        <span class="arrow">{"→"}</span>
                                        <span class="price-after">{cents(m.adjusted_price)}</span>
                                        <span class={classes!("adjustment-badge", m.direction().badge_class())}>
                                            {m.adjustment_badge()}
                                        </span>
                                    </div>
                                </div>

                                <div class="margin-grid">
                                    <div class="margin-card">
                                        <div class="panel-caption">{"Original Margin"}</div>
                                        <div class="margin-value">{percent(m.original_margin_pct, 1)}</div>
                                    </div>
                                    <div class="margin-card margin-card-new">
                                        <div class="panel-caption">{"New Margin"}</div>
                                        <div class="margin-value">{percent(m.profit_margin_pct, 1)}</div>
                                    </div>
                                </div>

                                <div class="explanation">
                                    <span class="explanation-icon">{"ℹ"}</span>
                                    <span>{m.band.explanation(m.price_adjustment_pct)}</span>
                                </div>
                            </div>
                        </div>

                        <div class="simulation-stats">
                            <div>
                                <div class="panel-caption">{"Ad Spend ROI"}</div>
                                <div class="stat-value">{percent(m.ad_spend_roi_pct, 0)}</div>
                            </div>
                            <div>
                                <div class="panel-caption">{"Profit per Sale"}</div>
                                <div class="stat-value">{cents(m.profit_per_sale)}</div>
                            </div>
                            <div>
                                <div class="panel-caption">{"Break-even ROAS"}</div>
                                <div class="stat-value">{format!("{:.2}x", props.policy.break_even_roas)}</div>
                            </div>
                            <div>
                                <div class="panel-caption">{"Margin Gain"}</div>
                                <div class="stat-value stat-gain">
                                    {format!("{}{:.1}%", if m.margin_gain_pct >= 0.0 { "+" } else { "" }, m.margin_gain_pct)}
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="section-footnote">
                        <p>{"This simulation shows real-time price optimization based on your actual marketing performance."}</p>
                        <p class="muted">{"MCD makes these adjustments automatically, 24/7, across all your products."}</p>
                    </div>
                </div>
            </section>
        }
    }
}
