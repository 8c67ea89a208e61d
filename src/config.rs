//! Configuration for the gesture detector and animation engine
//!
//! All values are fixed at initialization; the only runtime-mutable knob is
//! the base brightness, adjusted through
//! [`AnimationEngine::set_base_brightness`](crate::AnimationEngine::set_base_brightness).

use embassy_time::Duration;

use crate::palette::{Palette, Rgb};

/// Default number of pixels on the strip/ring
pub const DEFAULT_LED_COUNT: u8 = 4;

/// Default base brightness (0-255)
pub const DEFAULT_BASE_BRIGHTNESS: u8 = 200;

/// Default pitch angle above which the gesture counts as raised
pub const DEFAULT_ACTIVATION_ANGLE_DEGREES: f32 = 45.0;

/// Default minimum time between accepted triggers
pub const DEFAULT_DEBOUNCE_INTERVAL: Duration = Duration::from_millis(100);

/// Default time from activation until fade-out begins
pub const DEFAULT_ACTIVE_DURATION: Duration = Duration::from_millis(3000);

/// Default power-up sweep duration
pub const DEFAULT_POWER_UP_DURATION: Duration = Duration::from_millis(500);

/// Default fade-out ramp duration
pub const DEFAULT_FADE_OUT_DURATION: Duration = Duration::from_millis(1000);

const DEFAULT_PRIMARY: Rgb = Rgb { r: 255, g: 0, b: 0 };
const DEFAULT_SECONDARY: Rgb = Rgb { r: 255, g: 180, b: 0 };

/// Configuration for the full activation pipeline
#[derive(Debug, Clone, Copy)]
pub struct GauntletConfig {
    /// Number of pixels driven by the animation
    pub led_count: u8,
    /// Brightness outside the breathing/fade phases (0-255)
    pub base_brightness: u8,
    /// Pitch threshold for the hand-raise gesture, degrees from horizontal
    pub activation_angle_degrees: f32,
    /// Minimum time between accepted triggers
    pub debounce_interval: Duration,
    /// Time from activation until fade-out begins
    pub active_duration: Duration,
    /// Power-up sweep duration
    pub power_up_duration: Duration,
    /// Fade-out ramp duration
    pub fade_out_duration: Duration,
    /// Colors alternated across the strip
    pub palette: Palette,
}

impl Default for GauntletConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            base_brightness: DEFAULT_BASE_BRIGHTNESS,
            activation_angle_degrees: DEFAULT_ACTIVATION_ANGLE_DEGREES,
            debounce_interval: DEFAULT_DEBOUNCE_INTERVAL,
            active_duration: DEFAULT_ACTIVE_DURATION,
            power_up_duration: DEFAULT_POWER_UP_DURATION,
            fade_out_duration: DEFAULT_FADE_OUT_DURATION,
            palette: Palette::new(DEFAULT_PRIMARY, DEFAULT_SECONDARY),
        }
    }
}

/// Error returned when a configuration cannot drive the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `led_count` is zero; the power-up sweep and palette indexing need at
    /// least one pixel
    NoLeds,
    /// `led_count` exceeds the engine's frame buffer capacity
    TooManyLeds,
}
