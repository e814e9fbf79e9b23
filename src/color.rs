//! Colors

use crate::error::{Error, Result};
use crate::math::{pack, unpack};

use std::str::FromStr;

/// Color as Red, Green, Blue, and Alpha
///
/// Packs into a Pixel with red in the least significant byte:
///
///     use mapcore::Color;
///
///     let c = Color::new(0x11, 0x22, 0x33, 0x44);
///     assert_eq!(c.rgba(), 0x4433_2211);
///     assert_eq!(Color::from_rgba(0x4433_2211), c);
///
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Fully transparent black (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
    /// Create new opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
    /// Unpack a Pixel
    pub fn from_rgba(pixel: u32) -> Self {
        let [r,g,b,a] = unpack(pixel);
        Self::new(r as u8, g as u8, b as u8, a as u8)
    }
    /// Pack into a Pixel
    pub fn rgba(&self) -> u32 {
        pack([u32::from(self.r), u32::from(self.g),
              u32::from(self.b), u32::from(self.a)])
    }
}

impl From<u32> for Color {
    fn from(pixel: u32) -> Color {
        Color::from_rgba(pixel)
    }
}
impl From<Color> for u32 {
    fn from(c: Color) -> u32 {
        c.rgba()
    }
}

/// Parse `#rrggbb` or `#rrggbbaa`; alpha defaults to 255
impl FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i+2], 16).map_err(|_| bad());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parse_hex() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::rgb(255,128,0));
        assert_eq!("#00000080".parse::<Color>().unwrap(), Color::new(0,0,0,128));
        assert!("ff8000".parse::<Color>().is_err());
        assert!("#ff80".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }
    #[test]
    fn pixel_layout() {
        assert_eq!(Color::rgb(255,0,0).rgba(), 0xff00_00ff);
        assert_eq!(Color::rgb(0,0,255).rgba(), 0xffff_0000);
        assert_eq!(u32::from(Color::transparent()), 0);
    }
}
