//! Step sequence for animated numeric counters.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Number of steps a counter takes to reach its target.
pub const COUNTER_TICKS: usize = 20;
/// Interval between steps.
pub const COUNTER_TICK_MS: u32 = 50;

/// Values shown on each tick while counting from zero up to `target`.
///
/// A zero target yields a single `0` frame. Every other target yields exactly
/// [`COUNTER_TICKS`] non-decreasing frames ending at `target`.
#[must_use]
pub fn counter_frames(target: usize) -> Vec<usize> {
    if target == 0 {
        return vec![0];
    }
    (1..=COUNTER_TICKS).map(|tick| target * tick / COUNTER_TICKS).collect()
}
