//! Input debouncing for form fields.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Mirror `source` into a new signal that only updates once the value
/// has been stable for `delay_ms`.
///
/// Every source change bumps a generation counter and schedules a
/// timeout; only the timeout belonging to the latest generation is
/// allowed to publish, so intermediate keystrokes never propagate.
pub fn use_debounced(source: Signal<String>, delay_ms: u32) -> Signal<String> {
    let (debounced, set_debounced) = signal(source.get_untracked());
    let generation = Rc::new(Cell::new(0u64));

    Effect::new(move |_| {
        let value = source.get();
        let current = generation.get().wrapping_add(1);
        generation.set(current);

        let generation = Rc::clone(&generation);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if generation.get() == current {
                set_debounced.set(value);
            }
        });
    });

    debounced.into()
}
