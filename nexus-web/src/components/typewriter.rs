use std::time::Duration;

use leptos::prelude::*;
use nexus_core::typewriter::Typewriter;

/// Typewriter text effect: reveals `text` one character per `step`.
///
/// The interval is cleared as soon as the reveal finishes (or with the
/// owning scope, whichever comes first).
pub fn use_typewriter(text: &'static str, step: Duration) -> ReadSignal<String> {
    let (shown, set_shown) = signal(String::new());
    let machine = StoredValue::new(Typewriter::new(text));
    let interval = StoredValue::new(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = interval.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    let handle = set_interval_with_handle(
        move || match machine.try_update_value(|m| m.tick()).flatten() {
            Some(prefix) => set_shown.set(prefix),
            None => stop(),
        },
        step,
    );
    if let Ok(handle) = handle {
        interval.set_value(Some(handle));
        on_cleanup(stop);
    }

    shown
}
