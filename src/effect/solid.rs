//! Static color fill effect
//!
//! Fills all LEDs with the ramp color while it moves and stays quiet once the
//! target is reached.

use super::Effect;
use crate::PixelWriter;
use crate::transition::ColorRamp;

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidEffect;

impl Effect for SolidEffect {
    fn render<W: PixelWriter>(&mut self, ramp: &mut ColorRamp, out: &mut W) -> bool {
        if !ramp.is_transitioning() {
            return false;
        }

        out.fill(ramp.current());
        ramp.settle();
        true
    }
}
