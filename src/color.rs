use anyhow::{bail, Context, Result};

/// Core color type used throughout the pipeline.
///
/// Field order matters: the derived `Ord` compares (R, G, B, A)
/// lexicographically, which is the canonical palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorRecord {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRecord {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color. Pixels read from sprites always go through here.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string like `#FF8800` or `ff8800`. Alpha is 255.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            bail!(
                "invalid hex color: expected 6 hex digits, got {}",
                hex.len()
            );
        }
        let channel = |range: std::ops::Range<usize>| -> Result<u8> {
            let digits = hex
                .get(range)
                .with_context(|| format!("invalid hex color: {hex}"))?;
            Ok(u8::from_str_radix(digits, 16)?)
        };
        Ok(Self::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Uppercase `#RRGGBB`. Alpha is not part of the hex form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// The 4-field text block used in the `.txt` palette output.
    pub fn to_block(self) -> String {
        format!("[\n    {},{},{},{}\n]", self.r, self.g, self.b, self.a)
    }

    pub fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for ColorRecord {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<ColorRecord> for [u8; 4] {
    fn from(color: ColorRecord) -> Self {
        color.channels()
    }
}

impl From<ColorRecord> for image::Rgba<u8> {
    fn from(color: ColorRecord) -> Self {
        image::Rgba(color.channels())
    }
}

impl std::fmt::Display for ColorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
