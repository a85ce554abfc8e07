mod bit_reader;
mod bit_writer;

pub use bit_reader::{BitCursor, BitReader};
pub use bit_writer::BitWriter;
