//! Pointer-driven motion: the preview parallax offset and the trailing
//! cursor-outline tween.
//!
//! The outline deliberately lags the dot. Each retarget starts a fixed-length
//! eased segment from wherever the outline currently is, and a newer retarget
//! overwrites the segment in flight instead of queueing behind it. Sampling
//! past the end of a segment holds the target.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Pointer offset from the viewport center is divided by this to get the
/// preview parallax shift.
pub const PARALLAX_DIVISOR: f64 = 8.0;

/// Trail segment length in milliseconds.
pub const TRAIL_DURATION_MS: f64 = 500.0;

pub fn parallax_offset(pointer: (f64, f64), viewport: (f64, f64)) -> (f64, f64) {
    (
        (pointer.0 - viewport.0 / 2.0) / PARALLAX_DIVISOR,
        (pointer.1 - viewport.1 / 2.0) / PARALLAX_DIVISOR,
    )
}

/// One retargetable eased segment, sampled once per animation frame.
///
/// Timestamps are `DOMHighResTimeStamp` milliseconds; event timestamps and
/// `requestAnimationFrame` timestamps share that clock.
#[derive(Clone, Debug)]
pub struct TrailTween {
    from: (f64, f64),
    to: (f64, f64),
    started_at: f64,
    position: (f64, f64),
}

impl TrailTween {
    pub fn new(origin: (f64, f64)) -> Self {
        Self {
            from: origin,
            to: origin,
            started_at: 0.0,
            position: origin,
        }
    }

    /// Point the segment at a new target. The segment restarts from the
    /// current interpolated position; the previous target is forgotten.
    /// Retargeting to the current target keeps the in-flight clock.
    pub fn retarget(&mut self, now: f64, target: (f64, f64)) {
        if target == self.to {
            return;
        }
        self.from = self.position;
        self.to = target;
        self.started_at = now;
    }

    /// Interpolated position at `now`. Holds the target once the segment has
    /// run its full duration.
    pub fn sample(&mut self, now: f64) -> (f64, f64) {
        let elapsed = (now - self.started_at).max(0.0);
        let progress = (elapsed / TRAIL_DURATION_MS).clamp(0.0, 1.0);
        let eased = ease_out_cubic(progress);
        self.position = (
            self.from.0 + (self.to.0 - self.from.0) * eased,
            self.from.1 + (self.to.1 - self.from.1) * eased,
        );
        self.position
    }

    pub fn target(&self) -> (f64, f64) {
        self.to
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
