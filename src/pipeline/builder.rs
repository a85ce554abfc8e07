use std::ops::RangeInclusive;

use tracing::debug;

use super::bit_string::BitString;
use super::constants::{BITS_PER_COUNTER, COUNTER_END, COUNTER_START, SEED_BIT};
use crate::utils::BitWriter;

/// Writes the seed bit, then for every counter its low byte and a parity
/// marker that is set for even counters.
pub fn build_into<W: BitWriter>(sink: &mut W, counters: RangeInclusive<u32>) {
    sink.write_bit(SEED_BIT);

    for i in counters {
        sink.write_u8((i % 256) as u8);
        sink.write_bit(i % 2 == 0);
    }
}

pub fn build_bit_string(counters: RangeInclusive<u32>) -> BitString {
    let capacity = 1 + counters.clone().count() * BITS_PER_COUNTER;
    let mut bits = BitString::with_capacity(capacity);
    build_into(&mut bits, counters);

    debug!("Built bit string of {} bits", bits.len());
    bits
}

pub fn build_default() -> BitString {
    build_bit_string(COUNTER_START..=COUNTER_END)
}
