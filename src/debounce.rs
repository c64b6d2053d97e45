//! Search Debouncer
//!
//! Delays propagating a rapidly-changing value until it has been stable for
//! a quiet period. The timer lives in WASM (gloo), but the supersede/emit
//! rules live in a plain [`Debouncer`] so they can be tested natively.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Tracks which scheduled emission is still current. Each new input issues a
/// fresh token and invalidates every token issued before it; only the timer
/// holding the latest token may emit.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<String>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new input value, returning the token its timer must present.
    pub fn input(&mut self, value: String) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// A timer fired for `token`. Returns the value to emit, or `None` when
    /// the token was superseded by a newer input (or already consumed).
    pub fn fire(&mut self, token: u64) -> Option<String> {
        if token == self.generation {
            self.pending.take()
        } else {
            None
        }
    }
}

/// Delayed mirror of `value`: settles to the input only after the input has
/// been stable for `delay_ms`. Nothing is emitted once the owning scope is
/// disposed.
pub fn use_debounced(value: Signal<String>, delay_ms: u32) -> Signal<String> {
    let (debounced, set_debounced) = signal(value.get_untracked());
    let core = StoredValue::new(Debouncer::new());

    Effect::new(move |prev: Option<()>| {
        let next = value.get();
        // First run only registers the dependency; the seed value already
        // matches the output.
        if prev.is_none() {
            return;
        }
        let token = core.try_update_value(|c| c.input(next)).unwrap_or(0);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(v) = core.try_update_value(|c| c.fire(token)).flatten() {
                let _ = set_debounced.try_set(v);
            }
        });
    });

    debounced.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_inputs_emit_once_with_final_value() {
        let mut core = Debouncer::new();
        let t1 = core.input("a".into());
        let t2 = core.input("ab".into());
        let t3 = core.input("abc".into());

        // Timers for superseded inputs fire in order and emit nothing.
        assert_eq!(core.fire(t1), None);
        assert_eq!(core.fire(t2), None);
        assert_eq!(core.fire(t3), Some("abc".to_string()));
    }

    #[test]
    fn a_token_emits_at_most_once() {
        let mut core = Debouncer::new();
        let t = core.input("hello".into());
        assert_eq!(core.fire(t), Some("hello".to_string()));
        assert_eq!(core.fire(t), None);
    }

    #[test]
    fn stale_token_does_not_clear_newer_pending_value() {
        let mut core = Debouncer::new();
        let t1 = core.input("old".into());
        let t2 = core.input("new".into());
        assert_eq!(core.fire(t1), None);
        assert_eq!(core.fire(t2), Some("new".to_string()));
    }

    #[test]
    fn zero_token_never_matches() {
        let mut core = Debouncer::new();
        assert_eq!(core.fire(0), None);
        core.input("x".into());
        assert_eq!(core.fire(0), None);
    }
}
