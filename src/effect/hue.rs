//! Integer hue wheel
//!
//! Walks the color wheel by moving one channel at a time toward 0 or 255.
//! When the active channel reaches a boundary, the channel two positions
//! ahead (in R, G, B order, wrapping) becomes active and the direction flips.
//! Starting from red with green rising, this visits the six segments
//! red → yellow → green → cyan → blue → magenta → red.

use crate::color::Rgb;

/// Primary channel of an RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primary {
    Red,
    Green,
    Blue,
}

impl Primary {
    /// The channel two positions ahead, wrapping modulo 3
    pub const fn two_ahead(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Green => Self::Red,
            Self::Blue => Self::Green,
        }
    }

    const fn get(self, color: &Rgb) -> u8 {
        match self {
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
        }
    }

    const fn slot(self, color: &mut Rgb) -> &mut u8 {
        match self {
            Self::Red => &mut color.r,
            Self::Green => &mut color.g,
            Self::Blue => &mut color.b,
        }
    }
}

/// Direction the active channel moves in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
}

impl Direction {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Rising => Self::Falling,
            Self::Falling => Self::Rising,
        }
    }

    pub const fn sign(self) -> i16 {
        match self {
            Self::Rising => 1,
            Self::Falling => -1,
        }
    }
}

/// Position on the hue wheel: the active channel and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueCursor {
    pub phase: Primary,
    pub direction: Direction,
}

impl HueCursor {
    /// Anchor for a wheel that starts at pure red
    pub const START: Self = Self {
        phase: Primary::Green,
        direction: Direction::Rising,
    };

    pub const fn new(phase: Primary, direction: Direction) -> Self {
        Self { phase, direction }
    }

    /// Advance `color` by `step` along the wheel.
    ///
    /// Overshoot past a boundary is clamped and carried into the channel that
    /// becomes active next, so large steps keep roughly even spacing.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance(&mut self, color: &mut Rgb, step: u8) {
        let active = self.phase;
        let next = active.two_ahead();
        let value = i16::from(active.get(color)) + self.direction.sign() * i16::from(step);

        if value < 0 {
            *active.slot(color) = 0;
            let carry = (-value) as u8;
            let slot = next.slot(color);
            *slot = slot.wrapping_add(carry);
        } else if value > 255 {
            *active.slot(color) = 255;
            let carry = (value % 255) as u8;
            let slot = next.slot(color);
            *slot = slot.wrapping_sub(carry);
        } else {
            *active.slot(color) = value as u8;
        }

        let landed = active.get(color);
        if landed == 0 || landed == 255 {
            self.phase = next;
            self.direction = self.direction.flipped();
        }
    }
}

impl Default for HueCursor {
    fn default() -> Self {
        Self::START
    }
}

/// Advance `color` by one hue step, updating `cursor`
pub fn next_rainbow_color(cursor: &mut HueCursor, color: &mut Rgb, step: u8) {
    cursor.advance(color, step);
}
