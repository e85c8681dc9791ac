use gloo_timers::callback::Interval;

use crate::shared::date_utils::now_ms;

/// One-second stopwatch of a running upload. Dropping it stops the
/// callbacks; the widget keeps it in a slot cleared on every exit path.
pub struct UploadTicker {
    _interval: Interval,
    started_ms: f64,
}

impl UploadTicker {
    /// `on_tick` receives the elapsed milliseconds
    pub fn start(on_tick: impl Fn(u64) + 'static) -> Self {
        let started_ms = now_ms();
        let interval = Interval::new(1_000, move || {
            on_tick(elapsed_since(started_ms));
        });
        Self {
            _interval: interval,
            started_ms,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        elapsed_since(self.started_ms)
    }
}

fn elapsed_since(started_ms: f64) -> u64 {
    (now_ms() - started_ms).max(0.0) as u64
}
