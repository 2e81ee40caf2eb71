//! Data line of the strip

use embedded_hal::digital::OutputPin;

/// Direction of a GPIO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// Electrical setup applied to the data pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    pub mode: PinMode,
    pub pull_down: bool,
    pub pull_up: bool,
    pub interrupts: bool,
}

impl PinConfig {
    /// Setup while the strip owns the pin
    pub const CLAIMED: Self = Self {
        mode: PinMode::Output,
        pull_down: true,
        pull_up: false,
        interrupts: false,
    };

    /// Setup after the strip is dropped. The pull-down keeps the line low.
    pub const RELEASED: Self = Self {
        mode: PinMode::Input,
        pull_down: true,
        pull_up: false,
        interrupts: false,
    };
}

/// Output pin that the strip can reconfigure when it claims and releases it.
///
/// Level changes go through [`OutputPin`]; errors from it are ignored during
/// transmission because there is no way to recover mid-frame.
pub trait DataPin: OutputPin {
    fn configure(&mut self, config: PinConfig);
}
