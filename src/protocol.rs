//! Bit-banged WS2812 transmission
//!
//! Every bit starts with a rising edge and lasts one fixed period. A 0 bit is
//! held high for `zero_high` cycles, a 1 bit for `one_high`; the rest of the
//! period is low. Both waits spin on the fast cycle counter, and the whole
//! frame runs inside a critical section because any stall longer than one
//! period corrupts the encoding.

use crate::color::scale_by_brightness;
use crate::pin::DataPin;
use crate::timestamp::CycleClock;
use crate::timing::ProtocolTimings;

/// Send `bytes` MSB first.
///
/// Returns after the low phase of the final bit has been honored.
pub fn transmit<P, C, I>(pin: &mut P, clock: &C, timings: &ProtocolTimings, bytes: I)
where
    P: DataPin,
    C: CycleClock,
    I: IntoIterator<Item = u8>,
{
    critical_section::with(|_| {
        // Backdate the first bit start so the first edge goes out immediately.
        let mut bit_start = clock.cycles().wrapping_sub(timings.period);

        for byte in bytes {
            let mut mask = 0x80u8;
            while mask != 0 {
                let high = timings.high_time(byte & mask != 0);

                bit_start = spin_until(clock, bit_start, timings.period);
                let _ = pin.set_high();
                spin_until(clock, bit_start, high);
                let _ = pin.set_low();

                mask >>= 1;
            }
        }

        spin_until(clock, bit_start, timings.period);
    });
}

/// Iterate over the stored bytes as they appear on the wire
pub fn wire_bytes(buffer: &[u8], brightness: u8) -> impl Iterator<Item = u8> + '_ {
    buffer
        .iter()
        .map(move |&byte| scale_by_brightness(byte, brightness))
}

/// Busy-wait until `cycles` have passed since `start`.
///
/// Returns the counter value that ended the wait.
#[inline(always)]
fn spin_until<C: CycleClock>(clock: &C, start: u32, cycles: u32) -> u32 {
    loop {
        let now = clock.cycles();
        if now.wrapping_sub(start) >= cycles {
            return now;
        }
    }
}
