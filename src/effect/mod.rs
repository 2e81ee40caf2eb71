//! Strip effects
//!
//! The active effect lives in an [`EffectSlot`]; each variant implements
//! [`Effect`] and renders through a [`PixelWriter`].

mod hue;
mod rainbow;
mod solid;

pub use hue::{Direction, HueCursor, Primary, next_rainbow_color};
pub use rainbow::{RAINBOW_START, RainbowEffect, RainbowVariant};
pub use solid::SolidEffect;

use crate::PixelWriter;
use crate::transition::ColorRamp;

const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";

const EFFECT_ID_SOLID: u8 = 0;
const EFFECT_ID_RAINBOW: u8 = 1;
const EFFECT_ID_RAINBOW_CYCLE: u8 = 2;

pub trait Effect {
    /// Advance the effect by one step and write its pixels.
    ///
    /// The ramp has already been stepped for this tick. Returns `true` if any
    /// pixel was written.
    fn render<W: PixelWriter>(&mut self, ramp: &mut ColorRamp, out: &mut W) -> bool;

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Single static color
    Solid(SolidEffect),
    /// Whole strip rotating through the hue wheel in unison
    Rainbow(RainbowEffect),
    /// Hue wheel spread along the strip, rotating over time
    RainbowCycle(RainbowEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum EffectKind {
    #[default]
    Solid = EFFECT_ID_SOLID,
    Rainbow = EFFECT_ID_RAINBOW,
    RainbowCycle = EFFECT_ID_RAINBOW_CYCLE,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Solid(SolidEffect)
    }
}

impl EffectKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            _ => return None,
        })
    }

    pub const fn to_raw(self) -> u8 {
        self as u8
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Solid => EffectSlot::Solid(SolidEffect),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new(RainbowVariant::Uniform)),
            Self::RainbowCycle => {
                EffectSlot::RainbowCycle(RainbowEffect::new(RainbowVariant::Cycle))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::RainbowCycle => EFFECT_NAME_RAINBOW_CYCLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_SOLID => Some(Self::Solid),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_RAINBOW_CYCLE => Some(Self::RainbowCycle),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render<W: PixelWriter>(&mut self, ramp: &mut ColorRamp, out: &mut W) -> bool {
        match self {
            Self::Solid(effect) => effect.render(ramp, out),
            Self::Rainbow(effect) | Self::RainbowCycle(effect) => effect.render(ramp, out),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Solid(effect) => Effect::reset(effect),
            Self::Rainbow(effect) | Self::RainbowCycle(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect kind for external observation
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Solid(_) => EffectKind::Solid,
            Self::Rainbow(_) => EffectKind::Rainbow,
            Self::RainbowCycle(_) => EffectKind::RainbowCycle,
        }
    }

    /// Hue cursor of a rainbow effect
    pub fn cursor(&self) -> Option<HueCursor> {
        match self {
            Self::Solid(_) => None,
            Self::Rainbow(effect) | Self::RainbowCycle(effect) => Some(effect.cursor()),
        }
    }
}
