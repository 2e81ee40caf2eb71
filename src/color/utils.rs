/// Scale a stored channel value by the strip brightness.
///
/// Matches the wire encoding: `value * brightness >> 8`, so full brightness
/// maps 255 to 254.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_by_brightness(value: u8, brightness: u8) -> u8 {
    ((value as u16 * brightness as u16) >> 8) as u8
}

/// Move `value` one unit toward `target`
#[inline]
pub const fn step_toward(value: u8, target: u8) -> u8 {
    if value < target {
        value + 1
    } else if value > target {
        value - 1
    } else {
        value
    }
}
