//! Fixed-timestep frame clock using an accumulator pattern.
//!
//! `draw_web()` calls at ~60fps with variable delta. FrameClock converts
//! this into a fixed number of discrete ticks per second, so everything
//! time-dependent (in-flight submission delay, toast expiry) advances in
//! whole ticks and is deterministic under test.

pub struct FrameClock {
    /// Milliseconds per tick (e.g. 100ms = 10 ticks/sec)
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Total elapsed ticks since creation
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    /// Create a new clock with the given tick rate.
    /// `ticks_per_sec`: how many ticks per real-time second (e.g. 10).
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `Date.now()` or similar).
    /// Returns the number of discrete ticks to process this frame.
    ///
    /// Call once per draw frame; pass the returned count to the tick pass.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => {
                let d = now_ms - prev;
                // Clamp to avoid a catch-up burst if the tab was backgrounded
                d.clamp(0.0, 500.0)
            }
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}
