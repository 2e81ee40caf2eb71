//! Host stand-ins for the hardware the strip drives
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use myrtio_ws2812::{DataPin, PinConfig, PixelWriter, ProtocolTimings, Rgb};

/// Cycles per tick of the default 80 MHz / 100 Hz clock
pub const CYCLES_PER_TICK: u64 = 800_000;

/// Simulated counters.
///
/// Every read of the fast counter consumes one cycle, so spin loops make
/// progress. The fast counter restarts at every tick.
#[derive(Clone)]
pub struct MockClock {
    total: Rc<Cell<u64>>,
    cycles_per_tick: u64,
}

impl MockClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(total: u64) -> Self {
        Self {
            total: Rc::new(Cell::new(total)),
            cycles_per_tick: CYCLES_PER_TICK,
        }
    }

    /// Cycles since the simulation started
    pub fn total(&self) -> u64 {
        self.total.get()
    }

    pub fn advance(&self, cycles: u64) {
        self.total.set(self.total.get() + cycles);
    }

    /// Let the strip latch its last frame
    pub fn advance_past_reset(&self) {
        self.advance(u64::from(ProtocolTimings::default().reset) + 16);
    }

    /// Jump to the start of the next tick so a frame fits inside one tick
    pub fn align_to_next_tick(&self) {
        let total = self.total.get();
        self.total
            .set((total / self.cycles_per_tick + 1) * self.cycles_per_tick);
    }
}

impl myrtio_ws2812::CycleClock for MockClock {
    fn ticks(&self) -> u32 {
        (self.total.get() / self.cycles_per_tick) as u32
    }

    fn cycles(&self) -> u32 {
        let total = self.total.get();
        self.total.set(total + 1);
        (total % self.cycles_per_tick) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub high: bool,
    pub at: u64,
}

#[derive(Default)]
pub struct PinLog {
    pub edges: Vec<Edge>,
    pub configs: Vec<PinConfig>,
}

/// Output pin that records every level change with its cycle stamp
#[derive(Clone)]
pub struct RecordingPin {
    clock: Rc<Cell<u64>>,
    log: Rc<RefCell<PinLog>>,
}

impl RecordingPin {
    pub fn new(clock: &MockClock) -> Self {
        Self {
            clock: Rc::clone(&clock.total),
            log: Rc::default(),
        }
    }

    pub fn configs(&self) -> Vec<PinConfig> {
        self.log.borrow().configs.clone()
    }

    pub fn take_edges(&self) -> Vec<Edge> {
        std::mem::take(&mut self.log.borrow_mut().edges)
    }

    fn record(&self, high: bool) {
        self.log.borrow_mut().edges.push(Edge {
            high,
            at: self.clock.get(),
        });
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true);
        Ok(())
    }
}

impl DataPin for RecordingPin {
    fn configure(&mut self, config: PinConfig) {
        self.log.borrow_mut().configs.push(config);
    }
}

/// One pulse on the data line
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    pub rise: u64,
    pub high: u64,
}

/// Pair rising and falling edges into pulses, ignoring idle low edges
pub fn pulses(edges: &[Edge]) -> Vec<Pulse> {
    let mut pulses = Vec::new();
    let mut rise = None;
    for edge in edges {
        match (edge.high, rise) {
            (true, None) => rise = Some(edge.at),
            (false, Some(start)) => {
                pulses.push(Pulse {
                    rise: start,
                    high: edge.at - start,
                });
                rise = None;
            }
            _ => {}
        }
    }
    pulses
}

/// Decode recorded pulses back into bytes, MSB first
pub fn decode_bytes(edges: &[Edge], timings: &ProtocolTimings) -> Vec<u8> {
    let threshold = u64::from(timings.zero_high + timings.one_high) / 2;
    pulses(edges)
        .chunks(8)
        .map(|bits| {
            bits.iter()
                .fold(0u8, |byte, pulse| (byte << 1) | u8::from(pulse.high > threshold))
        })
        .collect()
}

/// In-memory pixel sink for driving effects without a strip
pub struct Canvas {
    pub pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Rgb::default(); len],
        }
    }
}

impl PixelWriter for Canvas {
    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }
}
