//! RGB color values and CSS-style hex parsing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An opaque RGB color
///
/// Colors are written as CSS-style hex strings (`#2563eb`, or the short form
/// `#fff`) in configuration files and on the command line.
///
/// # Examples
///
/// ```
/// let c: iconforge::Rgb = "#2563eb".parse().unwrap();
/// assert_eq!(c.channels(), [0x25, 0x63, 0xeb]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// White, used for the outline and glyph of the default icon
pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

/// Background blue of the default icon
pub const BLUE: Rgb = Rgb { r: 0x25, g: 0x63, b: 0xeb };

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `#rgb` hex string
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let expand = |h: u8| (h << 4) | h;
        let digit = |c: char| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| Error::ColorError(format!("bad hex digit in {:?}", s)))
        };
        let digits: Vec<u8> = hex.chars().map(digit).collect::<Result<_, _>>()?;
        match digits.as_slice() {
            &[r, g, b] => Ok(Self::new(expand(r), expand(g), expand(b))),
            &[r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(Error::ColorError(format!(
                "expected #rgb or #rrggbb, got {:?}",
                s
            ))),
        }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> String {
        c.to_string()
    }
}
