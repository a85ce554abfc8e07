use std::fmt;
use std::str::FromStr;

use super::error::PipelineError;

/// Growable buffer of `'0'`/`'1'` characters.
///
/// Every constructor keeps the buffer free of any other character, so the
/// encoder can read it back without validating again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString(String);

impl BitString {
    pub fn new() -> Self {
        Self(String::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(String::with_capacity(capacity))
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(if bit { '1' } else { '0' });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }
}

impl FromStr for BitString {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((position, c)) = s.chars().enumerate().find(|(_, c)| *c != '0' && *c != '1') {
            return Err(PipelineError::InvalidBit(c, position));
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
