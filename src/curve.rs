//! Timing curves shared by the animation phases
//!
//! Small total functions over elapsed time. Integer math where the original
//! hardware behavior is integer (the power-up sweep and fade ramp), `libm`
//! floats for the breathing sine.

use embassy_time::Duration;
use libm::sinf;

/// Breathing brightness floor
pub const BREATHE_MIN: u8 = 150;

/// Breathing brightness ceiling
pub const BREATHE_MAX: u8 = 255;

/// Time divisor of the breathing sine; one full period is 2π times this
const BREATHE_TIME_DIVISOR_MS: f32 = 500.0;

/// Linear interpolation from `from` to `to` over `duration`
///
/// Clamps to `to` once `elapsed` reaches `duration`, and is total for
/// zero-length durations. A monotonic clock read slightly before the phase
/// start shows up here as `elapsed == 0`, never as an out-of-range value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub const fn ramp(elapsed: Duration, duration: Duration, from: u8, to: u8) -> u8 {
    let total_ms = duration.as_millis();
    if total_ms == 0 || elapsed.as_millis() >= total_ms {
        return to;
    }

    let span = to as i64 - from as i64;
    let progressed = span * elapsed.as_millis() as i64 / total_ms as i64;
    (from as i64 + progressed) as u8
}

/// Sinusoidal breathing brightness
///
/// `150 + 105 · (sin(elapsed_ms / 500) + 1) / 2`, oscillating in
/// [`BREATHE_MIN`, `BREATHE_MAX`] with a period of about π·1000 ms. The
/// fractional result truncates, matching the reference behavior bit for bit.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn breathe(elapsed: Duration) -> u8 {
    let phase = elapsed.as_millis() as f32 / BREATHE_TIME_DIVISOR_MS;
    let wave = (sinf(phase) + 1.0) / 2.0;
    (f32::from(BREATHE_MIN) + wave * f32::from(BREATHE_MAX - BREATHE_MIN)) as u8
}
