// RGB color value plus the `#RRGGBB` string format used by the color
// controls, and packing into the 0x00RRGGBB layout the window buffer wants.

use crate::error::{Error, Result};

/// One opaque paint color. Transparency is modeled by the grid slot being
/// unset, never by the color itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The preset swatch row, declared as hex strings the way the original
/// palette declares its colors. Parsed once at startup.
pub const PRESET_HEX: [&str; 9] = [
    "#000000", "#FFFFFF", "#FF0000", "#FF7F00", "#FFFF00", "#00FF00",
    "#00FFFF", "#0000FF", "#FF00FF",
];

impl Rgb {
    /// Parse a `#RRGGBB` string: strip the marker, read the remaining six
    /// hex digits as one 24-bit integer, then split it into channels
    /// (red = bits 16-23, green = bits 8-15, blue = bits 0-7).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(hex.to_string()))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| Error::InvalidColor(hex.to_string()))?;
        Ok(Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Pack as 0x00RRGGBB for the window framebuffer.
    #[inline]
    pub fn pack(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Build the preset palette from its declarative hex table.
pub fn preset_palette() -> Result<Vec<Rgb>> {
    PRESET_HEX.iter().map(|hex| Rgb::from_hex(hex)).collect()
}
