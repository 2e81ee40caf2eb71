//! Rainbow cycling effects
//!
//! Both variants first finish the color ramp toward the anchor color, then
//! rotate the first-pixel color one hue step per tick:
//! - `Uniform`: the whole strip shows the first-pixel color
//! - `Cycle`: every following pixel is a fixed number of hue steps ahead of
//!   its predecessor

use super::Effect;
use super::hue::HueCursor;
use crate::PixelWriter;
use crate::color::Rgb;
use crate::transition::ColorRamp;

/// Color every rainbow starts from
pub const RAINBOW_START: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Hue step of the first pixel per tick
const HUE_STEP: u8 = 1;

/// Hue step between neighbouring pixels of a cycle
const PIXEL_HUE_STEP: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowVariant {
    Uniform,
    Cycle,
}

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Position of the first pixel on the wheel
    cursor: HueCursor,
    variant: RainbowVariant,
}

impl RainbowEffect {
    pub const fn new(variant: RainbowVariant) -> Self {
        Self {
            cursor: HueCursor::START,
            variant,
        }
    }

    pub const fn cursor(&self) -> HueCursor {
        self.cursor
    }

    pub const fn variant(&self) -> RainbowVariant {
        self.variant
    }

    fn render_cycle<W: PixelWriter>(&self, first: Rgb, out: &mut W) {
        out.set_pixel(0, first);

        let mut cursor = self.cursor;
        let mut color = first;
        for index in 1..out.pixel_count() {
            cursor.advance(&mut color, PIXEL_HUE_STEP);
            out.set_pixel(index, color);
        }
    }
}

impl Effect for RainbowEffect {
    fn render<W: PixelWriter>(&mut self, ramp: &mut ColorRamp, out: &mut W) -> bool {
        if ramp.is_transitioning() {
            ramp.settle();
            out.fill(ramp.current());
            return true;
        }

        self.cursor.advance(ramp.current_mut(), HUE_STEP);
        match self.variant {
            RainbowVariant::Uniform => out.fill(ramp.current()),
            RainbowVariant::Cycle => self.render_cycle(ramp.current(), out),
        }
        true
    }

    fn reset(&mut self) {
        self.cursor = HueCursor::START;
    }
}
