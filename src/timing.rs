//! Cycle thresholds of the 800 kHz WS2812 protocol

/// Platform clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// CPU frequency, which is also the rate of the fast cycle counter
    pub cpu_hz: u32,
    /// Rate of the coarse tick counter
    pub tick_hz: u32,
}

impl ClockConfig {
    /// ESP8266 at its default 80 MHz with a 100 Hz scheduler tick
    pub const ESP8266_80MHZ: Self = Self::new(80_000_000, 100);

    pub const fn new(cpu_hz: u32, tick_hz: u32) -> Self {
        Self { cpu_hz, tick_hz }
    }

    /// Derive the protocol thresholds for this clock
    pub const fn timings(&self) -> ProtocolTimings {
        ProtocolTimings::for_clock(self)
    }
}

/// Protocol thresholds expressed in CPU cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolTimings {
    /// High time of a 0 bit (~0.4 µs)
    pub zero_high: u32,
    /// High time of a 1 bit (~0.8 µs)
    pub one_high: u32,
    /// Full bit period (~1.25 µs)
    pub period: u32,
    /// Minimum idle time between frames (~50 µs)
    pub reset: u32,
    /// Cycles per coarse tick
    pub cycles_per_tick: u32,
}

impl ProtocolTimings {
    // Divisors are one above the nominal rate so the result rounds down even
    // when the clock is an exact multiple.
    const ZERO_HIGH_DIVISOR: u32 = 2_500_001;
    const ONE_HIGH_DIVISOR: u32 = 1_250_001;
    const PERIOD_DIVISOR: u32 = 800_001;
    const RESET_DIVISOR: u32 = 19_000;

    pub const fn for_clock(clock: &ClockConfig) -> Self {
        let tick_hz = if clock.tick_hz == 0 { 1 } else { clock.tick_hz };
        Self {
            zero_high: clock.cpu_hz / Self::ZERO_HIGH_DIVISOR,
            one_high: clock.cpu_hz / Self::ONE_HIGH_DIVISOR,
            period: clock.cpu_hz / Self::PERIOD_DIVISOR,
            reset: clock.cpu_hz / Self::RESET_DIVISOR,
            cycles_per_tick: clock.cpu_hz / tick_hz,
        }
    }

    /// High time for a single bit value
    #[inline]
    pub const fn high_time(&self, bit: bool) -> u32 {
        if bit { self.one_high } else { self.zero_high }
    }
}

impl Default for ProtocolTimings {
    fn default() -> Self {
        ClockConfig::ESP8266_80MHZ.timings()
    }
}
