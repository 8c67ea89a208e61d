//! Hand-raise gesture detection
//!
//! Converts raw acceleration samples into a debounced rising-edge trigger.
//! Edge-triggering keeps a sustained raise from re-firing; the debounce
//! interval suppresses double-triggers from sensor jitter at the threshold.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::GauntletConfig;
use crate::motion::AccelerationVector;

/// Debounced rising-edge detector for the hand-raise gesture
///
/// Owns its debounce state exclusively; the caller feeds it one sample per
/// poll cycle together with the cycle's timestamp.
#[derive(Debug)]
pub struct GestureDetector {
    threshold_degrees: f32,
    debounce_interval: Duration,
    was_raised: bool,
    last_trigger: Instant,
}

impl GestureDetector {
    pub fn new(config: &GauntletConfig) -> Self {
        Self {
            threshold_degrees: config.activation_angle_degrees,
            debounce_interval: config.debounce_interval,
            was_raised: false,
            last_trigger: Instant::from_millis(0),
        }
    }

    /// Process one poll cycle; returns `true` exactly on an accepted trigger
    ///
    /// A trigger requires all of: pitch above the threshold, the previous
    /// cycle below it (rising edge), and the debounce interval elapsed since
    /// the last accepted trigger. Dropping back to or below the threshold
    /// re-arms the detector. A `None` sample changes nothing.
    ///
    /// A rise that lands inside the debounce window stays unarmed, so a hand
    /// still raised when the window expires triggers then. There is no
    /// minimum dwell time: a single over-threshold sample is enough.
    pub fn poll(&mut self, sample: Option<AccelerationVector>, now: Instant) -> bool {
        let Some(sample) = sample else {
            return false;
        };

        let pitch = sample.pitch_degrees();
        let raised = pitch > self.threshold_degrees;

        if raised
            && !self.was_raised
            && now.duration_since(self.last_trigger) >= self.debounce_interval
        {
            self.was_raised = true;
            self.last_trigger = now;
            #[cfg(feature = "esp32-log")]
            println!("[GestureDetector.poll] trigger at pitch {}", pitch);
            return true;
        }

        if !raised {
            self.was_raised = false;
        }

        false
    }
}
