//! Debounce Primitive
//!
//! Derives a signal that trails its input by a quiet period, so rapid
//! changes (keystrokes) collapse into one downstream update.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Quiet period before a search input change reaches the network
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Emit `input`'s value once it has been stable for `delay_ms`.
///
/// Every input change cancels the pending emission and restarts the timer,
/// so the emitted value is always one the input actually held and at most
/// one emission happens per quiet period of silence.
pub fn use_debounced(input: Signal<String>, delay_ms: u32) -> ReadSignal<String> {
    let (debounced, set_debounced) = signal(input.get_untracked());
    // Timeout is not Send; dropping the handle cancels the timer
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let value = input.get();
        let timeout = Timeout::new(delay_ms, move || set_debounced.set(value));
        pending.update_value(|slot| {
            if let Some(stale) = slot.take() {
                stale.cancel();
            }
            *slot = Some(timeout);
        });
    });

    debounced
}
