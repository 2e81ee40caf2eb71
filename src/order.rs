//! Channel order of a strip
//!
//! Strips differ in the order in which they expect the color bytes of a pixel
//! on the wire. The order is described by a 12-bit octal number `0oWRGB`: each
//! digit holds the byte offset of that channel inside the pixel slot.
//!
//! For example, a strip that expects `B R W G` uses `0o2130`:
//!
//! ```text
//! W R G B
//! 2 1 3 0
//! ```
//!
//! When a raw descriptor is decoded with [`ChannelOrder::from_octal`], equal
//! white and red digits mean the strip has no white LED and the white digit is
//! ignored. The named RGB orders state the missing white channel explicitly,
//! so their white digit may be anything.

use core::fmt;

use crate::color::Channel;

const DIGIT_MASK: u16 = 0b111;

/// Error returned for a descriptor whose offsets are not a permutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOrderError {
    pub raw: u16,
}

impl fmt::Display for ChannelOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid channel order descriptor {:#o}", self.raw)
    }
}

impl core::error::Error for ChannelOrderError {}

/// Decoded byte offsets of every channel within a pixel slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOrder {
    offsets: [u8; 4],
    has_white: bool,
}

impl ChannelOrder {
    pub const RGB: Self = Self::rgb(0o0012);
    pub const RBG: Self = Self::rgb(0o0021);
    pub const GRB: Self = Self::rgb(0o0102);
    pub const GBR: Self = Self::rgb(0o0201);
    pub const BRG: Self = Self::rgb(0o0120);
    pub const BGR: Self = Self::rgb(0o0210);

    pub const WRGB: Self = Self::rgbw(0o0123);
    pub const WRBG: Self = Self::rgbw(0o0132);
    pub const WGRB: Self = Self::rgbw(0o0213);
    pub const WGBR: Self = Self::rgbw(0o0312);
    pub const WBRG: Self = Self::rgbw(0o0231);
    pub const WBGR: Self = Self::rgbw(0o0321);
    pub const RWGB: Self = Self::rgbw(0o1023);
    pub const RWBG: Self = Self::rgbw(0o1032);
    pub const RGWB: Self = Self::rgbw(0o2013);
    pub const RGBW: Self = Self::rgbw(0o3012);
    pub const RBWG: Self = Self::rgbw(0o2031);
    pub const RBGW: Self = Self::rgbw(0o3021);
    pub const GWRB: Self = Self::rgbw(0o1203);
    pub const GWBR: Self = Self::rgbw(0o1302);
    pub const GRWB: Self = Self::rgbw(0o2103);
    pub const GRBW: Self = Self::rgbw(0o3102);
    pub const GBWR: Self = Self::rgbw(0o2301);
    pub const GBRW: Self = Self::rgbw(0o3201);
    pub const BWRG: Self = Self::rgbw(0o1230);
    pub const BWGR: Self = Self::rgbw(0o1320);
    pub const BRWG: Self = Self::rgbw(0o2130);
    pub const BRGW: Self = Self::rgbw(0o3120);
    pub const BGWR: Self = Self::rgbw(0o2310);
    pub const BGRW: Self = Self::rgbw(0o3210);

    /// Build an order with an explicit white flag.
    pub const fn new(raw: u16, has_white: bool) -> Result<Self, ChannelOrderError> {
        let order = Self {
            offsets: normalize(decode(raw), has_white),
            has_white,
        };
        if order.is_permutation() {
            Ok(order)
        } else {
            Err(ChannelOrderError { raw })
        }
    }

    /// Build an order from a descriptor, inferring the white channel.
    ///
    /// The strip is treated as RGBW iff the white digit differs from the red
    /// digit.
    pub const fn from_octal(raw: u16) -> Result<Self, ChannelOrderError> {
        let offsets = decode(raw);
        let has_white =
            offsets[Channel::White.index()] != offsets[Channel::Red.index()];
        Self::new(raw, has_white)
    }

    const fn rgb(raw: u16) -> Self {
        Self {
            offsets: normalize(decode(raw), false),
            has_white: false,
        }
    }

    const fn rgbw(raw: u16) -> Self {
        Self {
            offsets: decode(raw),
            has_white: true,
        }
    }

    /// Check if the strip has an independent white channel
    pub const fn has_white(&self) -> bool {
        self.has_white
    }

    /// Number of bytes stored per pixel
    pub const fn bytes_per_pixel(&self) -> usize {
        if self.has_white { 4 } else { 3 }
    }

    /// Byte offset of `channel` inside a pixel slot.
    ///
    /// Returns `None` for white on a strip without a white channel.
    pub const fn offset(&self, channel: Channel) -> Option<usize> {
        if !self.has_white && matches!(channel, Channel::White) {
            return None;
        }
        Some(self.offsets[channel.index()] as usize)
    }

    /// Re-encode the order as an octal descriptor.
    ///
    /// Orders without white encode the white digit equal to the red digit, so
    /// `from_octal(order.to_octal())` yields `order` again.
    pub const fn to_octal(&self) -> u16 {
        let [w, r, g, b] = self.offsets;
        ((w as u16) << 9) | ((r as u16) << 6) | ((g as u16) << 3) | b as u16
    }

    const fn is_permutation(&self) -> bool {
        let width = self.bytes_per_pixel();
        let mut seen = 0u8;
        let mut i = 0;
        while i < Channel::ALL.len() {
            let channel = Channel::ALL[i];
            i += 1;
            if !self.has_white && matches!(channel, Channel::White) {
                continue;
            }
            let offset = self.offsets[channel.index()];
            if offset as usize >= width || seen & (1 << offset) != 0 {
                return false;
            }
            seen |= 1 << offset;
        }
        true
    }
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self::GRB
    }
}

impl TryFrom<u16> for ChannelOrder {
    type Error = ChannelOrderError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::from_octal(raw)
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn decode(raw: u16) -> [u8; 4] {
    [
        ((raw >> 9) & DIGIT_MASK) as u8,
        ((raw >> 6) & DIGIT_MASK) as u8,
        ((raw >> 3) & DIGIT_MASK) as u8,
        (raw & DIGIT_MASK) as u8,
    ]
}

/// Without a white channel the white digit carries no information; pin it to
/// the red offset so equal layouts compare equal.
const fn normalize(mut offsets: [u8; 4], has_white: bool) -> [u8; 4] {
    if !has_white {
        offsets[Channel::White.index()] = offsets[Channel::Red.index()];
    }
    offsets
}
