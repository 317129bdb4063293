//! Numeric counter that counts up to its target in fixed steps.
//!
//! Each target change restarts the count from zero. A running count stops as
//! soon as a newer one starts or the component is disposed.

use leptos::prelude::*;

#[component]
pub fn AnimatedCounter(#[prop(into)] target: Signal<usize>, #[prop(optional)] id: Option<&'static str>) -> impl IntoView {
    let shown = RwSignal::new(0_usize);
    let generation = StoredValue::new(0_u64);

    Effect::new(move || {
        let target = target.get();
        generation.update_value(|g| *g += 1);
        let run = generation.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let tick = std::time::Duration::from_millis(u64::from(crate::util::counter::COUNTER_TICK_MS));
            for value in crate::util::counter::counter_frames(target) {
                gloo_timers::future::sleep(tick).await;
                if generation.try_get_value() != Some(run) {
                    return;
                }
                if shown.try_set(value).is_some() {
                    return;
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = run;
            shown.set(target);
        }
    });

    view! { <span class="counter" id=id>{move || shown.get()}</span> }
}
