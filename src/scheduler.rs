//! Animation loop scheduling.
//!
//! One pass drains the command queue, then runs `speed` iterations of
//! (engine tick, try to show). Passes are spaced by a fixed delay with drift
//! correction; the caller decides how to wait, or uses [`AnimationLoop::run`].

use embassy_time::{Duration, Instant, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command_processor::CommandProcessor;
use crate::engine::EffectEngine;
use crate::pin::DataPin;
use crate::queue::RequestQueue;
use crate::strip::Ws2812;
use crate::timestamp::CycleClock;

/// Delay between two passes (one RTOS tick at 100 Hz)
pub const DEFAULT_PASS_DELAY: Duration = Duration::from_millis(10);

/// Timing of the animation loop
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub pass_delay: Duration,
}

impl LoopConfig {
    /// Config with the given delay between passes
    pub const fn new(pass_delay: Duration) -> Self {
        Self { pass_delay }
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PASS_DELAY)
    }
}

/// Result of a single pass.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// When the next pass is due
    pub next_deadline: Instant,
    /// How long to wait until the next pass (zero if behind schedule)
    pub sleep_duration: Duration,
    /// Frames transmitted during this pass
    pub frames_shown: u16,
}

/// Single owner of the strip and the effect state.
///
/// Requests from other contexts reach the engine only through the command
/// queue, so effect state and pixel buffer are never touched concurrently.
pub struct AnimationLoop<'a, P: DataPin, C: CycleClock, const N: usize, const SIZE: usize> {
    strip: Ws2812<P, C, N>,
    engine: EffectEngine,
    commands: CommandProcessor<'a, SIZE>,
    config: LoopConfig,
    next_pass: Instant,
    /// Pixels or brightness changed since the last transmitted frame
    pending: bool,
}

impl<'a, P: DataPin, C: CycleClock, const N: usize, const SIZE: usize>
    AnimationLoop<'a, P, C, N, SIZE>
{
    /// Create a loop with the default pass delay.
    ///
    /// The current buffer is sent once as soon as the strip is ready.
    pub fn new(
        strip: Ws2812<P, C, N>,
        engine: EffectEngine,
        requests: &'a RequestQueue<SIZE>,
    ) -> Self {
        Self::with_config(strip, engine, requests, LoopConfig::default())
    }

    /// Create a loop with a custom pass delay
    pub fn with_config(
        mut strip: Ws2812<P, C, N>,
        engine: EffectEngine,
        requests: &'a RequestQueue<SIZE>,
        config: LoopConfig,
    ) -> Self {
        strip.set_brightness(engine.brightness());
        Self {
            strip,
            engine,
            commands: CommandProcessor::new(requests),
            config,
            next_pass: Instant::from_ticks(0),
            pending: true,
        }
    }

    /// The driven strip
    pub fn strip(&self) -> &Ws2812<P, C, N> {
        &self.strip
    }

    /// Mutable access to the strip
    pub fn strip_mut(&mut self) -> &mut Ws2812<P, C, N> {
        &mut self.strip
    }

    /// The effect state
    pub fn engine(&self) -> &EffectEngine {
        &self.engine
    }

    /// Loop timing configuration
    pub const fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Whether a frame is waiting to be transmitted
    pub const fn has_pending_frame(&self) -> bool {
        self.pending
    }

    /// One engine iteration followed by a transmit attempt.
    ///
    /// Returns `true` if a frame went out.
    pub fn step(&mut self) -> bool {
        if self.engine.tick(&mut self.strip) {
            self.pending = true;
        }

        let brightness = self.engine.brightness();
        if self.strip.brightness() != brightness {
            self.strip.set_brightness(brightness);
            self.pending = true;
        }

        if self.pending && self.strip.show() {
            self.pending = false;
            return true;
        }
        false
    }

    /// Run one pass and return when the next one is due.
    pub fn pass(&mut self, now: Instant) -> FrameResult {
        // After a long stall, skip the backlog instead of bursting to catch up
        let max_drift = self.config.pass_delay * 2;
        if now > self.next_pass + max_drift {
            self.next_pass = now;
        }

        self.commands.process_pending(&mut self.engine);

        let mut frames_shown = 0;
        for _ in 0..self.engine.speed() {
            if self.step() {
                frames_shown += 1;
            }
        }

        self.next_pass += self.config.pass_delay;
        let sleep_duration = if self.next_pass > now {
            self.next_pass - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: self.next_pass,
            sleep_duration,
            frames_shown,
        }
    }

    /// Run passes forever, sleeping between them. Never returns.
    pub async fn run(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[AnimationLoop.run] {} pixels, pass delay {} ms",
            self.strip.pixel_count(),
            self.config.pass_delay.as_millis()
        );

        loop {
            let result = self.pass(Instant::now());
            Timer::at(result.next_deadline).await;
        }
    }
}
