mod utils;

use smart_leds::{RGB8, RGBW, White};

pub use utils::{scale_by_brightness, step_toward};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;

/// Logical color channel of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    White = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
}

impl Channel {
    /// All channels in descriptor digit order (W, R, G, B)
    pub const ALL: [Self; 4] = [Self::White, Self::Red, Self::Green, Self::Blue];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A color that can be written into a pixel slot.
///
/// Returns `None` for channels the color does not carry, so that writing an
/// RGB color leaves the white byte of an RGBW slot untouched.
pub trait PixelColor: Copy {
    fn channel(&self, channel: Channel) -> Option<u8>;
}

impl PixelColor for Rgb {
    fn channel(&self, channel: Channel) -> Option<u8> {
        match channel {
            Channel::White => None,
            Channel::Red => Some(self.r),
            Channel::Green => Some(self.g),
            Channel::Blue => Some(self.b),
        }
    }
}

impl PixelColor for Rgbw {
    fn channel(&self, channel: Channel) -> Option<u8> {
        Some(match channel {
            Channel::White => self.a.0,
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        })
    }
}

/// Create an RGBW color
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}
