#![no_std]

pub mod color;
pub mod command;
pub mod command_processor;
pub mod effect;
pub mod engine;
pub mod order;
pub mod pin;
pub mod protocol;
pub mod queue;
pub mod scheduler;
pub mod strip;
pub mod timestamp;
pub mod timing;
pub mod transition;

pub use command::{Command, CommandError, LightRequest, RawRequest};
pub use command_processor::CommandProcessor;
pub use queue::{RequestQueue, SubmitError, Submitter};
pub use effect::{EffectKind, EffectSlot, HueCursor};
pub use engine::{EffectEngine, EngineConfig};
pub use order::{ChannelOrder, ChannelOrderError};
pub use pin::{DataPin, PinConfig, PinMode};
pub use scheduler::{AnimationLoop, FrameResult, LoopConfig};
pub use strip::{StripError, Ws2812, buffer_size};
pub use timestamp::{CycleClock, Timestamp};
pub use timing::{ClockConfig, ProtocolTimings};

pub use color::{Rgb, Rgbw};
pub use embassy_time::{Duration, Instant};

/// Pixel sink the effects render into
///
/// Implemented by [`Ws2812`]; effects are generic over it so they can be
/// driven without hardware.
pub trait PixelWriter {
    /// Number of addressable pixels
    fn pixel_count(&self) -> usize;

    /// Set every pixel to `color`
    fn fill(&mut self, color: Rgb);

    /// Set one pixel; indices past the end are ignored
    fn set_pixel(&mut self, index: usize, color: Rgb);
}
