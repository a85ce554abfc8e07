use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid bit character {0:?} at position {1}")]
    InvalidBit(char, usize),

    #[error("Bit string of length {0} is not aligned to a byte boundary")]
    UnalignedBits(usize),

    #[error("Invalid hex digit {0:?} at position {1}")]
    InvalidHexDigit(char, usize),

    #[error("Hex string has odd length {0}")]
    OddHexLength(usize),

    #[error("Formatting failed")]
    Format(#[from] std::fmt::Error),

    #[error("Bit stream read failed")]
    Io(#[from] std::io::Error),
}
