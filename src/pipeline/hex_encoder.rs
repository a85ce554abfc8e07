use std::fmt::Write as _;

use bitvec::prelude::*;
use tracing::debug;

use super::bit_string::BitString;
use super::constants::BITS_PER_BYTE;
use super::error::PipelineError;
use crate::utils::{BitCursor, BitReader, BitWriter};

pub fn pack(bits: &BitString) -> Result<Vec<u8>, PipelineError> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(PipelineError::UnalignedBits(bits.len()));
    }

    let mut buffer: BitVec<u8, Msb0> = BitVec::with_capacity(bits.len());
    buffer.write_bits(bits.bits());

    Ok(buffer.into_vec())
}

pub fn encode_hex(bits: &BitString) -> Result<String, PipelineError> {
    let bytes = pack(bits)?;

    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in &bytes {
        write!(hex, "{:02x}", byte)?;
    }

    debug!("Encoded {} bytes into {} hex digits", bytes.len(), hex.len());
    Ok(hex)
}

fn nibble(c: char, position: usize) -> Result<u8, PipelineError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(PipelineError::InvalidHexDigit(c, position))
}

pub fn decode_hex(hex: &str) -> Result<BitString, PipelineError> {
    let digits: Vec<char> = hex.chars().collect();
    if digits.len() % 2 != 0 {
        return Err(PipelineError::OddHexLength(digits.len()));
    }

    let bytes = digits
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| -> Result<u8, PipelineError> {
            Ok(nibble(pair[0], 2 * i)? << 4 | nibble(pair[1], 2 * i + 1)?)
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let mut reader = BitCursor::new(&bytes);
    let mut bits = BitString::with_capacity(bytes.len() * BITS_PER_BYTE);
    while reader.remaining() > 0 {
        bits.push(reader.read_bit()?);
    }

    Ok(bits)
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;
    use crate::pipeline::builder::build_default;
    use crate::pipeline::padder::{pad_to_byte_boundary, PaddingRule};

    #[test]
    fn test_pack() {
        let bits: BitString = "0000010111111111".parse().unwrap();
        assert_eq!(pack(&bits).unwrap(), [0x05, 0xff]);
    }

    #[test]
    fn test_encode_zero_padded_lowercase() {
        let bits: BitString = "000001011111111110101011".parse().unwrap();
        assert_eq!(encode_hex(&bits).unwrap(), "05ffab");
    }

    #[test]
    fn test_encode_rejects_unaligned() {
        let bits: BitString = "101".parse().unwrap();
        assert!(matches!(encode_hex(&bits), Err(PipelineError::UnalignedBits(3))));
    }

    #[test]
    fn test_encode_default() {
        let padded = pad_to_byte_boundary(build_default(), PaddingRule::Literal);
        let hex = encode_hex(&padded.bits).unwrap();

        assert_eq!(hex.len(), padded.bits.len() / BITS_PER_BYTE * 2);
        assert_eq!(hex.len(), 2250);
        assert!(hex.starts_with("8080a06048281a0e"));
        assert!(hex.ends_with("4f2b9bce00"));
    }

    #[test]
    fn test_decode_round_trip_default() {
        let padded = pad_to_byte_boundary(build_default(), PaddingRule::Literal);
        let hex = encode_hex(&padded.bits).unwrap();
        assert_eq!(decode_hex(&hex).unwrap(), padded.bits);
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(decode_hex("A5").unwrap().as_str(), "10100101");
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert!(matches!(decode_hex("abc"), Err(PipelineError::OddHexLength(3))));
    }

    #[test]
    fn test_decode_rejects_invalid_digit() {
        assert!(matches!(
            decode_hex("00g0"),
            Err(PipelineError::InvalidHexDigit('g', 2))
        ));
    }

    #[test]
    fn test_hex_symmetry() {
        let mut rng = rand::rng();

        for _ in 1..1000 {
            let byte_len = rng.random_range(0..64);
            let bits: BitString = (0..byte_len * BITS_PER_BYTE)
                .map(|_| if rng.random::<bool>() { '1' } else { '0' })
                .collect::<String>()
                .parse()
                .unwrap();

            let hex = encode_hex(&bits).unwrap();
            assert_eq!(hex.len(), byte_len * 2);
            assert_eq!(decode_hex(&hex).unwrap(), bits);
        }
    }
}
