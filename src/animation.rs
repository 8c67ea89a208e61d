//! Four-phase activation animation
//!
//! The engine owns the animation state machine and a frame buffer, and
//! computes for any point in time the frame that should currently show.
//! It never touches hardware: each tick yields a [`Frame`] that the caller
//! hands to a [`LedOutput`](crate::LedOutput).
//!
//! Phases run Off → PowerUp → Steady → FadeOut → Off. Activation restarts
//! the sequence from PowerUp no matter the current phase, so repeated
//! gestures always produce a fresh full animation.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::{ConfigError, GauntletConfig};
use crate::curve::{breathe, ramp};
use crate::palette::{BLACK, Palette, Rgb};

/// Animation phase; exactly one is active at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Idle; lights cleared, re-entered after every cycle
    Off,
    /// Lit pixel count sweeps up from zero
    PowerUp,
    /// All pixels on with breathing brightness
    Steady,
    /// Brightness ramps down to zero
    FadeOut,
}

/// One tick's LED plan: pixel colors plus a global brightness
///
/// Ephemeral; borrow ends when the next tick begins. Single-color hardware
/// applies the brightness only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub pixels: &'a [Rgb],
    pub brightness: u8,
}

/// Timed animation engine
///
/// `MAX_LEDS` sizes the frame buffer; the configured `led_count` may be
/// anything from 1 up to it. All timing comes from the `now` passed into
/// [`tick`](Self::tick) and [`activate`](Self::activate) — the engine never
/// reads a clock.
pub struct AnimationEngine<const MAX_LEDS: usize> {
    state: AnimationState,
    /// Start of the current phase
    phase_start: Instant,
    /// Time of the activation that began this cycle
    cycle_start: Instant,
    /// Global brightness of the last rendered frame
    brightness: u8,
    base_brightness: u8,
    led_count: u8,
    palette: Palette,
    active_duration: Duration,
    power_up_duration: Duration,
    fade_out_duration: Duration,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> AnimationEngine<MAX_LEDS> {
    /// Create an engine from the configuration
    ///
    /// Rejects pixel counts the power-up sweep and palette indexing cannot
    /// handle instead of failing mid-animation.
    pub fn new(config: &GauntletConfig) -> Result<Self, ConfigError> {
        if config.led_count == 0 {
            return Err(ConfigError::NoLeds);
        }
        if config.led_count as usize > MAX_LEDS {
            return Err(ConfigError::TooManyLeds);
        }

        Ok(Self {
            state: AnimationState::Off,
            phase_start: Instant::from_millis(0),
            cycle_start: Instant::from_millis(0),
            brightness: config.base_brightness,
            base_brightness: config.base_brightness,
            led_count: config.led_count,
            palette: config.palette,
            active_duration: config.active_duration,
            power_up_duration: config.power_up_duration,
            fade_out_duration: config.fade_out_duration,
            frame_buffer: [Rgb::default(); MAX_LEDS],
        })
    }

    /// Begin (or restart) the activation sequence
    ///
    /// Unconditional: an activation during Steady or FadeOut restarts the
    /// full sequence from PowerUp with both timers reset.
    pub fn activate(&mut self, now: Instant) {
        self.state = AnimationState::PowerUp;
        self.phase_start = now;
        self.cycle_start = now;
        self.brightness = self.base_brightness;
        #[cfg(feature = "esp32-log")]
        println!("[AnimationEngine.activate] sequence started");
    }

    /// Force the animation to Off
    ///
    /// External cancellation path for fault handling. Clears the frame and
    /// restores the base brightness for the next cycle.
    pub fn turn_off(&mut self) {
        self.state = AnimationState::Off;
        self.brightness = self.base_brightness;
        self.frame_buffer = [BLACK; MAX_LEDS];
    }

    /// Compute the frame for `now`
    ///
    /// Due phase transitions are applied before rendering, so calling twice
    /// with the same `now` yields the same frame without double-advancing
    /// state. Never blocks; total for any `now` at or after the last
    /// activation.
    pub fn tick(&mut self, now: Instant) -> Frame<'_> {
        self.advance(now);

        match self.state {
            AnimationState::Off => {}
            AnimationState::PowerUp => self.render_power_up(now),
            AnimationState::Steady => self.render_steady(now),
            AnimationState::FadeOut => self.render_fade_out(now),
        }

        Frame {
            pixels: &self.frame_buffer[..self.led_count as usize],
            brightness: self.brightness,
        }
    }

    /// Apply every phase transition `now` is due for
    ///
    /// Checked in phase order so a sparse tick cascades through PowerUp →
    /// Steady → FadeOut → Off in one call.
    fn advance(&mut self, now: Instant) {
        if self.state == AnimationState::PowerUp
            && now.duration_since(self.phase_start) >= self.power_up_duration
        {
            self.state = AnimationState::Steady;
            self.phase_start = now;
            #[cfg(feature = "esp32-log")]
            println!("[AnimationEngine.tick] power-up complete");
        }

        if self.state == AnimationState::Steady
            && now.duration_since(self.cycle_start) >= self.active_duration
        {
            self.state = AnimationState::FadeOut;
            self.phase_start = now;
            #[cfg(feature = "esp32-log")]
            println!("[AnimationEngine.tick] fade out started");
        }

        if self.state == AnimationState::FadeOut {
            let elapsed = now.duration_since(self.phase_start);
            if elapsed >= self.fade_out_duration
                || ramp(elapsed, self.fade_out_duration, self.base_brightness, 0) == 0
            {
                self.turn_off();
                #[cfg(feature = "esp32-log")]
                println!("[AnimationEngine.tick] fade out complete");
            }
        }
    }

    /// Sweep the lit pixel count from 0 to `led_count`
    fn render_power_up(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.phase_start);
        let lit = ramp(elapsed, self.power_up_duration, 0, self.led_count);

        for index in 0..self.led_count {
            self.frame_buffer[index as usize] = if index < lit {
                self.palette.color_at(index)
            } else {
                BLACK
            };
        }
        self.brightness = self.base_brightness;
    }

    /// All pixels on, brightness breathing
    fn render_steady(&mut self, now: Instant) {
        self.fill_palette();
        self.brightness = breathe(now.duration_since(self.phase_start));
    }

    /// Palette stays, brightness ramps to zero
    fn render_fade_out(&mut self, now: Instant) {
        self.fill_palette();
        self.brightness = ramp(
            now.duration_since(self.phase_start),
            self.fade_out_duration,
            self.base_brightness,
            0,
        );
    }

    fn fill_palette(&mut self) {
        for index in 0..self.led_count {
            self.frame_buffer[index as usize] = self.palette.color_at(index);
        }
    }

    /// Adjust the base brightness for subsequent frames
    ///
    /// Also the starting level of the next fade-out ramp.
    pub fn set_base_brightness(&mut self, brightness: u8) {
        self.base_brightness = brightness;
        if self.state == AnimationState::Off {
            self.brightness = brightness;
        }
    }

    pub const fn state(&self) -> AnimationState {
        self.state
    }

    /// Whether an animation cycle is in progress
    pub fn is_active(&self) -> bool {
        self.state != AnimationState::Off
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    pub const fn base_brightness(&self) -> u8 {
        self.base_brightness
    }

    pub const fn led_count(&self) -> u8 {
        self.led_count
    }
}
