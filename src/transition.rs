use crate::color::{Rgb, step_toward};

/// Linear ramp of the first-pixel color and the output brightness.
///
/// Each [`step`](Self::step) moves every channel one unit toward its target,
/// so a ramp takes as many steps as the largest channel distance. Brightness
/// ramps on its own and never holds the color transition open.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    /// Current color of the first pixel
    current: Rgb,
    /// Color the ramp heads to
    target: Rgb,
    /// Current output brightness
    brightness: u8,
    /// Brightness the ramp heads to
    target_brightness: u8,
    /// Set while `current` may still differ from `target`
    in_transition: bool,
}

impl ColorRamp {
    pub const fn new(color: Rgb, brightness: u8) -> Self {
        Self {
            current: color,
            target: color,
            brightness,
            target_brightness: brightness,
            in_transition: false,
        }
    }

    pub const fn current(&self) -> Rgb {
        self.current
    }

    pub const fn current_mut(&mut self) -> &mut Rgb {
        &mut self.current
    }

    pub const fn target(&self) -> Rgb {
        self.target
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn target_brightness(&self) -> u8 {
        self.target_brightness
    }

    pub const fn is_transitioning(&self) -> bool {
        self.in_transition
    }

    /// Set a new target color and start transitioning
    pub fn set_target(&mut self, color: Rgb) {
        self.target = color;
        self.in_transition = true;
    }

    /// Set a new target brightness
    pub fn set_target_brightness(&mut self, brightness: u8) {
        self.target_brightness = brightness;
    }

    /// Check if brightness is still moving toward its target
    pub const fn is_dimming(&self) -> bool {
        self.brightness != self.target_brightness
    }

    /// Mark the ramp as running without changing its targets
    pub fn restart(&mut self) {
        self.in_transition = true;
    }

    /// Move brightness one unit toward its target, and the color too while a
    /// color transition is running
    pub fn step(&mut self) {
        self.brightness = step_toward(self.brightness, self.target_brightness);
        if !self.in_transition {
            return;
        }
        self.current.r = step_toward(self.current.r, self.target.r);
        self.current.g = step_toward(self.current.g, self.target.g);
        self.current.b = step_toward(self.current.b, self.target.b);
    }

    /// Clear the transition flag once the color target is reached.
    ///
    /// Returns whether the transition is still running.
    pub fn settle(&mut self) -> bool {
        self.in_transition = self.current != self.target;
        self.in_transition
    }
}
