mod bit_string;
pub mod builder;
pub mod constants;
mod error;
pub mod formatter;
pub mod hex_encoder;
pub mod padder;

use std::io::Write;

use tracing::info;

pub use bit_string::BitString;
pub use error::PipelineError;
pub use formatter::Layout;
pub use padder::{Padded, PaddingRule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub appended: usize,
    pub hex: String,
    pub lines: Vec<String>,
}

/// Pads `bits` with `rule`, encodes them as hex and formats the preview.
pub fn run(bits: BitString, rule: PaddingRule, layout: Layout) -> Result<Report, PipelineError> {
    let Padded { bits, appended } = padder::pad_to_byte_boundary(bits, rule);
    let hex = hex_encoder::encode_hex(&bits)?;
    let lines = formatter::format_preview(&hex, layout);

    info!(
        "Padded to {} bits, {} hex digits, {} preview lines",
        bits.len(),
        hex.len(),
        lines.len()
    );

    Ok(Report {
        appended,
        hex,
        lines,
    })
}

pub fn run_default() -> Result<Report, PipelineError> {
    run(builder::build_default(), PaddingRule::Literal, Layout::default())
}

pub fn render<W: Write>(report: &Report, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "es wurden {} 0en angefügt", report.appended)?;
    for line in &report.lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
