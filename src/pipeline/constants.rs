pub const SEED_BIT: bool = true;
pub const COUNTER_START: u32 = 1;
pub const COUNTER_END: u32 = 999;
pub const BITS_PER_BYTE: usize = 8;

// One byte of `counter % 256` followed by the parity marker.
pub const BITS_PER_COUNTER: usize = BITS_PER_BYTE + 1;

pub const PREVIEW_LEN: usize = 300;
pub const LINE_WIDTH: usize = 32;
pub const GROUP_WIDTH: usize = 2;
