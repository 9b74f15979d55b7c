//! Float animation math for the decorative corner icon
//!
//! The icon drifts vertically with an ease-in-out profile: 3 second period,
//! 10 row amplitude, repeating forever. The offset is a pure function of the
//! tick counter so rendering stays deterministic and testable.

use std::f64::consts::TAU;

/// Full animation cycle in milliseconds (up and back down)
pub const FLOAT_PERIOD_MS: u64 = 3_000;

/// Peak vertical displacement in rows
pub const FLOAT_AMPLITUDE: u16 = 10;

/// Vertical offset in rows for a given tick counter.
///
/// A raised cosine gives the ease-in-out shape: zero at phase 0, peak at half
/// period, zero again at full period. `tick_rate_ms` is the wall time between
/// ticks, so the cycle length stays at [`FLOAT_PERIOD_MS`] regardless of the
/// configured tick rate.
pub fn float_offset(tick: u64, tick_rate_ms: u64) -> u16 {
    if tick_rate_ms == 0 {
        return 0;
    }
    let elapsed_ms = (tick.wrapping_mul(tick_rate_ms)) % FLOAT_PERIOD_MS;
    let phase = elapsed_ms as f64 / FLOAT_PERIOD_MS as f64;
    let eased = 0.5 * (1.0 - (TAU * phase).cos());
    (f64::from(FLOAT_AMPLITUDE) * eased).round() as u16
}
