//! Poll-loop pacing and composition
//!
//! Ties the pipeline together at a fixed cadence: drain commands, read the
//! sensor, poll the gesture detector, tick the animation, write the frame.
//! No async and no platform timer; the caller sleeps between cycles using
//! the returned timing info.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LedOutput;
use crate::animation::{AnimationEngine, Frame};
use crate::command::{Command, CommandQueue};
use crate::gesture::GestureDetector;
use crate::motion::AccelerationSource;

/// Default polling cadence (50 Hz)
pub const DEFAULT_POLL_HZ: u32 = 50;

/// Default cycle duration based on the polling cadence
pub const DEFAULT_CYCLE_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_POLL_HZ as u64);

/// Half-period of the sensor-fault blink
const FAULT_BLINK_HALF_PERIOD_MS: u64 = 200;

/// Result of one poll cycle
#[derive(Debug, Clone, Copy)]
pub struct CycleResult {
    /// Deadline for the next cycle
    pub next_deadline: Instant,
    /// How long to wait before the next cycle (zero if behind schedule)
    pub sleep_duration: Duration,
    /// Whether this cycle accepted a gesture trigger
    pub triggered: bool,
}

/// Single-threaded control loop for the gesture/animation pipeline
///
/// Owns the sensor, the LED output, and both core components; they never
/// hold references to each other. Each cycle samples the clock once and
/// passes the same `now` everywhere, so a cycle sees one consistent time.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = PollScheduler::new(sensor, output, detector, engine, &COMMANDS);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct PollScheduler<'a, S, O, const MAX_LEDS: usize, const COMMANDS: usize>
where
    S: AccelerationSource,
    O: LedOutput,
{
    sensor: S,
    output: O,
    detector: GestureDetector,
    engine: AnimationEngine<MAX_LEDS>,
    commands: &'a CommandQueue<COMMANDS>,
    next_cycle: Instant,
    cycle_duration: Duration,
    fault: bool,
}

impl<'a, S, O, const MAX_LEDS: usize, const COMMANDS: usize>
    PollScheduler<'a, S, O, MAX_LEDS, COMMANDS>
where
    S: AccelerationSource,
    O: LedOutput,
{
    /// Create a scheduler at the default 50 Hz cadence
    pub fn new(
        sensor: S,
        output: O,
        detector: GestureDetector,
        engine: AnimationEngine<MAX_LEDS>,
        commands: &'a CommandQueue<COMMANDS>,
    ) -> Self {
        Self::with_cycle_duration(sensor, output, detector, engine, commands, DEFAULT_CYCLE_DURATION)
    }

    /// Create a scheduler with a custom cycle duration
    ///
    /// Probes the sensor once; if it does not respond the scheduler latches
    /// a fault and blinks the strip instead of polling.
    pub fn with_cycle_duration(
        mut sensor: S,
        output: O,
        detector: GestureDetector,
        engine: AnimationEngine<MAX_LEDS>,
        commands: &'a CommandQueue<COMMANDS>,
        cycle_duration: Duration,
    ) -> Self {
        let fault = !sensor.is_present();
        #[cfg(feature = "esp32-log")]
        if fault {
            println!("[PollScheduler.new] acceleration sensor missing");
        }

        Self {
            sensor,
            output,
            detector,
            engine,
            commands,
            next_cycle: Instant::from_millis(0),
            cycle_duration,
            fault,
        }
    }

    /// Run one cycle and return timing information
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling again. After a stall longer than two cycles the schedule
    /// resets to `now` instead of bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> CycleResult {
        let reset_threshold_ms = self.cycle_duration.as_millis() * 2;
        if now.as_millis() > self.next_cycle.as_millis() + reset_threshold_ms {
            self.next_cycle = now;
        }

        let triggered = if self.fault {
            self.blink_fault(now);
            false
        } else {
            self.run_cycle(now)
        };

        self.next_cycle += self.cycle_duration;

        let sleep_duration = if self.next_cycle.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_cycle.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        CycleResult {
            next_deadline: self.next_cycle,
            sleep_duration,
            triggered,
        }
    }

    fn run_cycle(&mut self, now: Instant) -> bool {
        self.drain_commands(now);

        let triggered = self.detector.poll(self.sensor.read(), now);
        if triggered {
            self.engine.activate(now);
        }

        let frame = self.engine.tick(now);
        Self::apply(&mut self.output, frame);
        triggered
    }

    /// Write one frame through the output capability
    #[allow(clippy::cast_possible_truncation)]
    fn apply(output: &mut O, frame: Frame<'_>) {
        for (index, color) in frame.pixels.iter().enumerate() {
            output.set_pixel(index as u8, *color);
        }
        output.set_global_brightness(frame.brightness);
        output.render();
    }

    fn drain_commands(&mut self, now: Instant) {
        while let Some(command) = self.commands.try_receive() {
            match command {
                Command::Activate => self.engine.activate(now),
                Command::TurnOff => {
                    self.engine.turn_off();
                    self.output.clear();
                    self.output.render();
                }
                Command::SetBrightness(brightness) => {
                    self.engine.set_base_brightness(brightness);
                }
            }
        }
    }

    /// Sensor-missing indication: blink the primary color at 200 ms
    fn blink_fault(&mut self, now: Instant) {
        let lit = (now.as_millis() / FAULT_BLINK_HALF_PERIOD_MS).is_multiple_of(2);
        if lit {
            self.output.set_all(self.engine.palette().primary);
            self.output.set_global_brightness(self.engine.base_brightness());
        } else {
            self.output.clear();
        }
        self.output.render();
    }

    /// Whether the startup sensor probe failed
    pub const fn is_faulted(&self) -> bool {
        self.fault
    }

    pub fn engine(&self) -> &AnimationEngine<MAX_LEDS> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AnimationEngine<MAX_LEDS> {
        &mut self.engine
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
