//! Elapsed time with cycle precision
//!
//! The fast cycle counter of the target is reset by the tick interrupt, so it
//! cannot measure intervals on its own. A [`Timestamp`] pairs it with the
//! coarse tick counter: whole ticks are scaled to cycles and the fast counter
//! only contributes the position inside the current tick.

/// Source of the two counters an elapsed-time measurement needs.
///
/// Implemented by the platform (for example with `xTaskGetTickCount` and the
/// `ccount` register on Xtensa cores).
pub trait CycleClock {
    /// Coarse, monotonic tick count
    fn ticks(&self) -> u32;

    /// Fast free-running CPU cycle count
    fn cycles(&self) -> u32;
}

impl<C: CycleClock + ?Sized> CycleClock for &C {
    fn ticks(&self) -> u32 {
        (**self).ticks()
    }

    fn cycles(&self) -> u32 {
        (**self).cycles()
    }
}

/// Snapshot of both counters at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    ticks: u32,
    cycles: u32,
}

impl Timestamp {
    pub const fn from_parts(ticks: u32, cycles: u32) -> Self {
        Self { ticks, cycles }
    }

    /// Capture the current counters
    pub fn now<C: CycleClock>(clock: &C) -> Self {
        Self {
            ticks: clock.ticks(),
            cycles: clock.cycles(),
        }
    }

    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Cycles elapsed since this snapshot.
    ///
    /// All arithmetic wraps, so rollover of either counter between the two
    /// readings cancels out.
    pub fn elapsed_cycles<C: CycleClock>(&self, clock: &C, cycles_per_tick: u32) -> u64 {
        let ticks_now = clock.ticks();
        let cycles_now = clock.cycles();

        u64::from(ticks_now.wrapping_sub(self.ticks))
            .wrapping_mul(u64::from(cycles_per_tick))
            .wrapping_add(u64::from(cycles_now))
            .wrapping_sub(u64::from(self.cycles))
    }
}
