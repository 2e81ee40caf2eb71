//! WS2812 strip handle
//!
//! Owns the pixel buffer in wire layout, the data pin and the time of the last
//! frame. Colors are stored unscaled; brightness is applied while the bytes
//! are clocked out.

use core::fmt;

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Channel, PixelColor, Rgb, Rgbw, rgbw};
use crate::order::ChannelOrder;
use crate::pin::{DataPin, PinConfig};
use crate::protocol::{transmit, wire_bytes};
use crate::timestamp::{CycleClock, Timestamp};
use crate::timing::{ClockConfig, ProtocolTimings};
use crate::PixelWriter;

/// Largest pixel slot (RGBW)
pub const MAX_BYTES_PER_PIXEL: usize = 4;

/// Buffer capacity needed for `pixel_count` pixels of any channel order
pub const fn buffer_size(pixel_count: usize) -> usize {
    pixel_count * MAX_BYTES_PER_PIXEL
}

/// Error returned when a strip cannot be created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// The pixel buffer capacity is smaller than the strip.
    ///
    /// `required` saturates at `usize::MAX`.
    BufferTooSmall { required: usize, capacity: usize },
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { required, capacity } => write!(
                f,
                "strip needs {required} buffer bytes but capacity is {capacity}"
            ),
        }
    }
}

impl core::error::Error for StripError {}

/// A WS2812-family strip on a single bit-banged data pin.
///
/// `N` is the byte capacity of the pixel buffer, see [`buffer_size`].
pub struct Ws2812<P: DataPin, C: CycleClock, const N: usize> {
    pin: P,
    clock: C,
    timings: ProtocolTimings,
    order: ChannelOrder,
    pixel_count: usize,
    brightness: u8,
    pixels: Vec<u8, N>,
    last_show: Timestamp,
}

impl<P: DataPin, C: CycleClock, const N: usize> Ws2812<P, C, N> {
    /// Create a strip and claim its pin.
    ///
    /// All pixels start black and brightness starts at 255. The strip becomes
    /// ready one reset interval after creation.
    pub fn new(
        mut pin: P,
        clock: C,
        config: &ClockConfig,
        pixel_count: usize,
        order: ChannelOrder,
    ) -> Result<Self, StripError> {
        let required = pixel_count
            .checked_mul(order.bytes_per_pixel())
            .unwrap_or(usize::MAX);
        let mut pixels = Vec::new();
        pixels
            .resize(required, 0)
            .map_err(|()| StripError::BufferTooSmall {
                required,
                capacity: N,
            })?;

        pin.configure(PinConfig::CLAIMED);
        let _ = pin.set_low();

        #[cfg(feature = "esp32-log")]
        println!(
            "[Ws2812.new] {} pixels, {} bytes per pixel",
            pixel_count,
            order.bytes_per_pixel()
        );

        let last_show = Timestamp::now(&clock);
        Ok(Self {
            pin,
            clock,
            timings: config.timings(),
            order,
            pixel_count,
            brightness: 255,
            pixels,
            last_show,
        })
    }

    /// Number of pixels on the strip
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Channel order of the strip
    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Check if pixels carry a white channel
    pub const fn has_white(&self) -> bool {
        self.order.has_white()
    }

    /// Bytes stored and sent per pixel
    pub const fn bytes_per_pixel(&self) -> usize {
        self.order.bytes_per_pixel()
    }

    /// Global brightness applied at transmit time
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Cycle thresholds used for transmission
    pub const fn timings(&self) -> &ProtocolTimings {
        &self.timings
    }

    /// Stored bytes in wire layout, without brightness applied
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes exactly as the next [`show`](Self::show) would send them
    pub fn wire_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        wire_bytes(&self.pixels, self.brightness)
    }

    /// Set every pixel to `color`
    pub fn fill<T: PixelColor>(&mut self, color: T) {
        for index in 0..self.pixel_count {
            self.write_slot(index, color);
        }
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.fill(rgbw(0, 0, 0, 0));
    }

    /// Set the color of one pixel. Indices past the end are ignored.
    pub fn set_pixel<T: PixelColor>(&mut self, index: usize, color: T) {
        if index >= self.pixel_count {
            return;
        }
        self.write_slot(index, color);
    }

    /// Read back the stored color of one pixel.
    ///
    /// The white component is 0 on strips without a white channel.
    pub fn pixel(&self, index: usize) -> Option<Rgbw> {
        if index >= self.pixel_count {
            return None;
        }
        let slot = self.slot(index);
        let read = |channel| {
            self.order
                .offset(channel)
                .and_then(|offset| slot.get(offset).copied())
                .unwrap_or(0)
        };
        Some(rgbw(
            read(Channel::Red),
            read(Channel::Green),
            read(Channel::Blue),
            read(Channel::White),
        ))
    }

    /// Read back the stored RGB part of one pixel
    pub fn pixel_rgb(&self, index: usize) -> Option<Rgb> {
        self.pixel(index).map(|color| Rgb::new(color.r, color.g, color.b))
    }

    /// Set the global brightness used at transmit time
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Check if the reset interval since the last frame has passed
    pub fn is_ready(&self) -> bool {
        self.last_show
            .elapsed_cycles(&self.clock, self.timings.cycles_per_tick)
            > u64::from(self.timings.reset)
    }

    /// Transmit the buffer.
    ///
    /// Returns `false` without touching the line if the strip is still
    /// latching the previous frame.
    pub fn show(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }

        transmit(
            &mut self.pin,
            &self.clock,
            &self.timings,
            wire_bytes(&self.pixels, self.brightness),
        );

        self.last_show = Timestamp::now(&self.clock);
        true
    }

    fn slot(&self, index: usize) -> &[u8] {
        let width = self.order.bytes_per_pixel();
        let start = index * width;
        &self.pixels[start..start + width]
    }

    fn write_slot<T: PixelColor>(&mut self, index: usize, color: T) {
        let width = self.order.bytes_per_pixel();
        let start = index * width;
        let slot = &mut self.pixels[start..start + width];
        for channel in Channel::ALL {
            if let (Some(offset), Some(value)) = (self.order.offset(channel), color.channel(channel)) {
                slot[offset] = value;
            }
        }
    }
}

impl<P: DataPin, C: CycleClock, const N: usize> Drop for Ws2812<P, C, N> {
    fn drop(&mut self) {
        self.pin.configure(PinConfig::RELEASED);
    }
}

impl<P: DataPin, C: CycleClock, const N: usize> PixelWriter for Ws2812<P, C, N> {
    fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    fn fill(&mut self, color: Rgb) {
        Ws2812::fill(self, color);
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        Ws2812::set_pixel(self, index, color);
    }
}
