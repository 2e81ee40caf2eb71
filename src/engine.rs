#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelWriter;
use crate::color::Rgb;
use crate::command::{Command, LightRequest};
use crate::effect::{EffectKind, EffectSlot, HueCursor, RAINBOW_START};
use crate::transition::ColorRamp;

/// Default engine iterations per scheduling pass
pub const DEFAULT_SPEED: u8 = 50;

/// Initial state of the effect engine
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub effect: EffectKind,
    pub speed: u8,
    pub color: Rgb,
    pub brightness: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            effect: EffectKind::Solid,
            speed: DEFAULT_SPEED,
            color: Rgb::new(0, 0, 0),
            brightness: 255,
        }
    }
}

/// Effect Engine - advances the animation one step per [`tick`](Self::tick)
///
/// The engine only writes pixels; transmitting them is up to the caller.
#[derive(Debug, Clone)]
pub struct EffectEngine {
    effect: EffectSlot,
    ramp: ColorRamp,
    speed: u8,
}

impl EffectEngine {
    /// Create an engine in the configured state
    pub fn new(config: &EngineConfig) -> Self {
        let mut engine = Self {
            effect: EffectSlot::default(),
            ramp: ColorRamp::new(config.color, config.brightness),
            speed: config.speed,
        };
        if config.effect != EffectKind::Solid {
            engine.set_effect(config.effect);
        }
        engine
    }

    /// Active effect
    pub fn effect(&self) -> EffectKind {
        self.effect.kind()
    }

    /// Iterations per scheduling pass
    pub const fn speed(&self) -> u8 {
        self.speed
    }

    /// Color of the first pixel
    pub const fn current_color(&self) -> Rgb {
        self.ramp.current()
    }

    /// Color the ramp is heading to
    pub const fn target_color(&self) -> Rgb {
        self.ramp.target()
    }

    /// Output brightness the strip should use now
    pub const fn brightness(&self) -> u8 {
        self.ramp.brightness()
    }

    /// Brightness the ramp is heading to
    pub const fn target_brightness(&self) -> u8 {
        self.ramp.target_brightness()
    }

    /// Check if the first-pixel color is still ramping
    pub const fn is_transitioning(&self) -> bool {
        self.ramp.is_transitioning()
    }

    /// Check if the brightness is still ramping
    pub const fn is_dimming(&self) -> bool {
        self.ramp.is_dimming()
    }

    /// Hue cursor of the running rainbow, if any
    pub fn cursor(&self) -> Option<HueCursor> {
        self.effect.cursor()
    }

    /// Switch effect.
    ///
    /// Rainbows restart from red with a fresh hue cursor.
    pub fn set_effect(&mut self, kind: EffectKind) {
        #[cfg(feature = "esp32-log")]
        println!("[EffectEngine.set_effect] switching to {}", kind.as_str());

        self.effect = kind.to_slot();
        self.effect.reset();
        match kind {
            EffectKind::Rainbow | EffectKind::RainbowCycle => self.ramp.set_target(RAINBOW_START),
            EffectKind::Solid => self.ramp.restart(),
        }
    }

    /// Set iterations per scheduling pass
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed;
    }

    /// Ramp the first-pixel color toward `color`
    pub fn set_target_color(&mut self, color: Rgb) {
        self.ramp.set_target(color);
    }

    /// Ramp the output brightness toward `brightness`
    pub fn set_target_brightness(&mut self, brightness: u8) {
        self.ramp.set_target_brightness(brightness);
    }

    /// Apply a single command
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::SetEffect(kind) => self.set_effect(kind),
            Command::SetSpeed(speed) => self.set_speed(speed),
            Command::SetColor(color) => self.set_target_color(color),
            Command::SetBrightness(brightness) => self.set_target_brightness(brightness),
        }
    }

    /// Apply every field of a validated request
    pub fn apply(&mut self, request: &LightRequest) {
        for command in request.commands() {
            self.execute(command);
        }
    }

    /// Advance the animation by one step.
    ///
    /// Returns `true` if pixels were written to `out`.
    pub fn tick<W: PixelWriter>(&mut self, out: &mut W) -> bool {
        self.ramp.step();
        self.effect.render(&mut self.ramp, out)
    }
}

impl Default for EffectEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
