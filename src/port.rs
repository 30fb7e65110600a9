use anyhow::Result;
use std::io::Write;

use crate::leds::leds_to_string;

/// Output device written by `out (0),a`.
pub trait Port {
    fn write(&mut self, value: u8) -> Result<()>;
}

/// Prints each written value as one line of LED glyphs.
pub struct LedPanel<W: Write> {
    out: W,
}

impl<W: Write> LedPanel<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Port for LedPanel<W> {
    fn write(&mut self, value: u8) -> Result<()> {
        writeln!(self.out, "{}", leds_to_string(value))?;
        Ok(())
    }
}

/// Keeps every written value; handy for tests and tools.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub writes: Vec<u8>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.writes.iter().map(|&v| leds_to_string(v)).collect()
    }
}

impl Port for Recorder {
    fn write(&mut self, value: u8) -> Result<()> {
        self.writes.push(value);
        Ok(())
    }
}
