use bitvec::prelude::*;

use crate::pipeline::BitString;

pub trait BitWriter {
    fn write_bit(&mut self, bit: bool);

    /// Writes the eight bits of `value`, most significant first.
    fn write_u8(&mut self, value: u8) {
        for shift in (0..8).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
    }

    fn write_bits<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = bool>,
    {
        for bit in bits {
            self.write_bit(bit);
        }
    }
}

impl BitWriter for BitVec<u8, Msb0> {
    fn write_bit(&mut self, bit: bool) {
        self.push(bit);
    }
}

impl BitWriter for BitString {
    fn write_bit(&mut self, bit: bool) {
        self.push(bit);
    }
}
