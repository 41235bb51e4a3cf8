use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB display colour as written in the layout table (`#rrggbb`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("colour `{0}` must start with '#'")]
    MissingHash(String),
    #[error("colour `{0}` must have exactly six hex digits")]
    BadLength(String),
    #[error("colour `{0}` contains a non-hex digit")]
    BadDigit(String),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// CSS form used by the Canvas 2D `fillStyle` and DOM `background-color`.
    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// Normalised RGBA with the sRGB transfer removed, for linear render targets.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        #[inline]
        fn channel(c: u8) -> f32 {
            let s = c as f32 / 255.0;
            if s <= 0.04045 {
                s / 12.92
            } else {
                ((s + 0.055) / 1.055).powf(2.4)
            }
        }
        [channel(self.r), channel(self.g), channel(self.b), 1.0]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 {
            return Err(ParseColorError::BadLength(s.to_string()));
        }
        // from_str_radix alone would accept a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::BadDigit(s.to_string()));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| ParseColorError::BadDigit(s.to_string()))?;
        Ok(Self::from_hex(packed))
    }
}
