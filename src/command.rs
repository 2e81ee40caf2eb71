//! Commands accepted by the effect engine
//!
//! External handlers (an HTTP endpoint, MQTT, a button) build a
//! [`LightRequest`] from untrusted input with [`LightRequest::from_raw`]. A
//! request is validated as a whole: if any field is malformed, nothing from it
//! reaches the engine.

use core::fmt;

use crate::color::Rgb;
use crate::effect::EffectKind;

/// A single change to the effect state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch effect
    SetEffect(EffectKind),
    /// Set engine iterations per scheduling pass
    SetSpeed(u8),
    /// Set the target color
    SetColor(Rgb),
    /// Set the target brightness
    SetBrightness(u8),
}

/// Unvalidated request fields as they arrive from a transport
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRequest<'a> {
    pub effect: Option<i64>,
    pub effect_speed: Option<i64>,
    pub color: Option<&'a [i64]>,
    pub brightness: Option<i64>,
}

/// Reason a request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Effect id is not a known effect
    UnknownEffect(i64),
    /// Effect speed is outside 0-255
    SpeedOutOfRange(i64),
    /// Brightness is outside 0-255
    BrightnessOutOfRange(i64),
    /// Color does not have exactly three components
    ColorArity(usize),
    /// A color component is outside 0-255
    ColorOutOfRange(i64),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEffect(value) => write!(f, "unknown effect {value}"),
            Self::SpeedOutOfRange(value) => {
                write!(f, "effect speed {value} must be between 0 and 255")
            }
            Self::BrightnessOutOfRange(value) => {
                write!(f, "brightness {value} must be between 0 and 255")
            }
            Self::ColorArity(len) => {
                write!(f, "color must have 3 components, got {len}")
            }
            Self::ColorOutOfRange(value) => {
                write!(f, "color component {value} must be between 0 and 255")
            }
        }
    }
}

impl core::error::Error for CommandError {}

/// A validated request to change the effect state.
///
/// Fields left as `None` are not changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightRequest {
    pub effect: Option<EffectKind>,
    pub effect_speed: Option<u8>,
    pub color: Option<Rgb>,
    pub brightness: Option<u8>,
}

impl LightRequest {
    /// Validate every field of `raw`
    pub fn from_raw(raw: &RawRequest<'_>) -> Result<Self, CommandError> {
        let effect = raw
            .effect
            .map(|value| {
                u8::try_from(value)
                    .ok()
                    .and_then(EffectKind::from_raw)
                    .ok_or(CommandError::UnknownEffect(value))
            })
            .transpose()?;

        let effect_speed = raw
            .effect_speed
            .map(|value| u8::try_from(value).map_err(|_| CommandError::SpeedOutOfRange(value)))
            .transpose()?;

        let brightness = raw
            .brightness
            .map(|value| {
                u8::try_from(value).map_err(|_| CommandError::BrightnessOutOfRange(value))
            })
            .transpose()?;

        let color = raw.color.map(parse_color).transpose()?;

        Ok(Self {
            effect,
            effect_speed,
            color,
            brightness,
        })
    }

    pub const fn is_empty(&self) -> bool {
        self.effect.is_none()
            && self.effect_speed.is_none()
            && self.color.is_none()
            && self.brightness.is_none()
    }

    /// Commands in application order: speed, color, brightness, effect.
    ///
    /// A rainbow effect in the same request replaces the color target.
    pub fn commands(&self) -> impl Iterator<Item = Command> {
        [
            self.effect_speed.map(Command::SetSpeed),
            self.color.map(Command::SetColor),
            self.brightness.map(Command::SetBrightness),
            self.effect.map(Command::SetEffect),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<Command> for LightRequest {
    fn from(command: Command) -> Self {
        let mut request = Self::default();
        match command {
            Command::SetEffect(effect) => request.effect = Some(effect),
            Command::SetSpeed(speed) => request.effect_speed = Some(speed),
            Command::SetColor(color) => request.color = Some(color),
            Command::SetBrightness(brightness) => request.brightness = Some(brightness),
        }
        request
    }
}

fn parse_color(components: &[i64]) -> Result<Rgb, CommandError> {
    let [r, g, b] = components else {
        return Err(CommandError::ColorArity(components.len()));
    };
    let channel = |value: i64| u8::try_from(value).map_err(|_| CommandError::ColorOutOfRange(value));
    Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
}
