use tracing::debug;

use super::bit_string::BitString;
use super::constants::BITS_PER_BYTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingRule {
    /// `8 - (len % 8)`: an already aligned string still gets a whole zero byte.
    Literal,
    /// `(8 - (len % 8)) % 8`: aligned strings stay untouched.
    Minimal,
}

impl PaddingRule {
    pub fn pad_count(self, len: usize) -> usize {
        let count = BITS_PER_BYTE - len % BITS_PER_BYTE;
        match self {
            PaddingRule::Literal => count,
            PaddingRule::Minimal => count % BITS_PER_BYTE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padded {
    pub bits: BitString,
    pub appended: usize,
}

pub fn pad_to_byte_boundary(mut bits: BitString, rule: PaddingRule) -> Padded {
    let appended = rule.pad_count(bits.len());
    for _ in 0..appended {
        bits.push(false);
    }

    debug!("Padded {} bits with {} zeros ({:?})", bits.len() - appended, appended, rule);
    Padded { bits, appended }
}
