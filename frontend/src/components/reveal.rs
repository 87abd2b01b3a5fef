use log::{debug, warn};
use yew::prelude::*;

use crate::components::viewport::ViewportObserver;
use crate::shell::{RevealAction, Section, VisibleSections};

const REVEAL_SELECTOR: &str = ".scroll-reveal";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Tracks which `.scroll-reveal` sections have entered the viewport.
#[hook]
pub fn use_section_reveal() -> UseReducerHandle<VisibleSections> {
    let visible = use_reducer(VisibleSections::default);

    {
        let dispatcher = visible.dispatcher();
        use_effect_with_deps(
            move |_| {
                let fallback = dispatcher.clone();
                let observer = ViewportObserver::new(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, move |el| {
                    dispatcher.dispatch(RevealAction::Reveal(el.id()));
                })
                .and_then(|observer| {
                    let count = observer.observe_all(REVEAL_SELECTOR)?;
                    debug!("Observing {} revealable sections", count);
                    Ok(observer)
                });

                let observer = match observer {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("Scroll reveal disabled, showing all sections: {:?}", e);
                        for section in Section::ALL {
                            fallback.dispatch(RevealAction::Reveal(section.id().to_string()));
                        }
                        None
                    }
                };

                move || drop(observer)
            },
            (),
        );
    }

    visible
}
