use std::io::{Error, ErrorKind, Result};

use bitvec::prelude::*;

pub trait BitReader {
    fn read_bit(&mut self) -> Result<bool>;

    /// Reads eight bits, most significant first.
    fn read_u8(&mut self) -> Result<u8> {
        let mut value = 0u8;
        for _ in 0..8 {
            value = (value << 1) | self.read_bit()? as u8;
        }
        Ok(value)
    }
}

pub struct BitCursor<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    position: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bits: bytes.view_bits::<Msb0>(),
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.position
    }
}

impl BitReader for BitCursor<'_> {
    fn read_bit(&mut self) -> Result<bool> {
        let bit = self
            .bits
            .get(self.position)
            .map(|bit| *bit)
            .ok_or_else(|| Error::new(ErrorKind::UnexpectedEof, "No more bits can be read"))?;
        self.position += 1;
        Ok(bit)
    }
}
