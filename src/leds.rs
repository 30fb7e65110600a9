use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leds: u8 {
const LED0 = 1 << 0; // rightmost glyph
const LED1 = 1 << 1;
const LED2 = 1 << 2;
const LED3 = 1 << 3;
const LED4 = 1 << 4;
const LED5 = 1 << 5;
const LED6 = 1 << 6;
const LED7 = 1 << 7; // leftmost glyph
}
}

/// Panel order, most significant LED first.
const PANEL: [Leds; 8] = [
    Leds::LED7,
    Leds::LED6,
    Leds::LED5,
    Leds::LED4,
    Leds::LED3,
    Leds::LED2,
    Leds::LED1,
    Leds::LED0,
];

pub const ON: char = '*';
pub const OFF: char = '.';

impl fmt::Display for Leds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for led in PANEL {
            let glyph = if self.contains(led) { ON } else { OFF };
            fmt::Write::write_char(f, glyph)?;
        }
        Ok(())
    }
}

/// Render register A as eight glyphs, bit 7 first: `129` becomes `*......*`.
pub fn leds_to_string(register_a: u8) -> String {
    Leds::from_bits_retain(register_a).to_string()
}

/// Inverse of [`leds_to_string`]. Returns `None` unless `s` is exactly eight
/// `*`/`.` glyphs.
pub fn parse_leds(s: &str) -> Option<u8> {
    let mut leds = Leds::empty();
    let mut glyphs = s.chars();
    for led in PANEL {
        match glyphs.next()? {
            ON => leds.insert(led),
            OFF => {}
            _ => return None,
        }
    }
    if glyphs.next().is_some() {
        return None;
    }
    Some(leds.bits())
}
