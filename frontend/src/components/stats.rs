use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::components::viewport::ViewportObserver;
use crate::config::CounterSchedule;
use crate::format::thousands;
use crate::shell::CounterAnimation;

#[derive(Properties, PartialEq)]
pub struct AnimatedStatProps {
    pub target: u64,
    pub active: bool,
    pub schedule: CounterSchedule,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(AnimatedStat)]
pub fn animated_stat(props: &AnimatedStatProps) -> Html {
    let count = use_state(|| 0u64);

    {
        let count = count.clone();
        let schedule = props.schedule;
        use_effect_with_deps(
            move |(active, target): &(bool, u64)| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                if *active {
                    let mut counter = CounterAnimation::new(*target, schedule.steps);
                    let handle = interval_handle.clone();
                    let interval = Interval::new(schedule.tick_ms(), move || {
                        count.set(counter.tick());
                        if counter.is_done() {
                            // Reached the target, stop ticking.
                            handle.borrow_mut().take();
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            (props.active, props.target),
        );
    }

    html! {
        <>{&props.prefix}{thousands(*count)}{&props.suffix}</>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
    pub schedule: CounterSchedule,
}

/// The three headline numbers. They start counting the first time the bar
/// scrolls into view and never restart.
#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    let seen = use_state_eq(|| false);
    let node = use_node_ref();

    {
        let seen_handle = seen.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |already_seen: &bool| {
                let mut observer = None;
                if !*already_seen {
                    if let Some(element) = node.cast::<Element>() {
                        match ViewportObserver::new(0.1, "0px", move |_| {
                            debug!("Stats bar in view");
                            seen_handle.set(true);
                        }) {
                            Ok(o) => {
                                o.observe(&element);
                                observer = Some(o);
                            }
                            Err(e) => {
                                warn!("Stats observer unavailable: {:?}", e);
                            }
                        }
                    }
                }
                move || drop(observer)
            },
            *seen,
        );
    }

    let active = *seen;
    let schedule = props.schedule;

    html! {
        <div ref={node} class="stats-bar">
            <div>
                <h3 class="gradient-text stat-number">
                    <AnimatedStat target={2_400_000} prefix="$" {active} {schedule} />
                </h3>
                <p>{"Additional profit captured"}</p>
            </div>
            <div>
                <h3 class="gradient-text stat-number">
                    <AnimatedStat target={147} {active} {schedule} />
                </h3>
                <p>{"Businesses optimizing"}</p>
            </div>
            <div>
                <h3 class="gradient-text stat-number">
                    <AnimatedStat target={0} {active} {schedule} />
                </h3>
                <p>{"Customer complaints"}</p>
            </div>
        </div>
    }
}
