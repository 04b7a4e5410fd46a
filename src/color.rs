//! Display colors of groups.

use std::fmt;

/// An RGB color with an alpha channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, from 0.0 (transparent) to 1.0 (opaque).
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `[r, g, b, a]` with all channels scaled to `0.0..=1.0`.
    pub fn to_normalized(self) -> [f64; 4] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a,
        ]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Default colors of groups 0 to 5.
pub const DEFAULT_COLORS: [Rgba; 6] = [
    Rgba::new(92, 192, 98, 0.5),
    Rgba::new(90, 155, 212, 0.5),
    Rgba::new(246, 236, 86, 0.6),
    Rgba::new(241, 90, 96, 0.4),
    Rgba::new(255, 117, 0, 0.3),
    Rgba::new(82, 82, 190, 0.2),
];
