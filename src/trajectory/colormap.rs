use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Evenly spaced stops sampled from the matplotlib maps of the same name.
const PLASMA: [Rgb; 5] = [
    Rgb::new(13, 8, 135),
    Rgb::new(126, 3, 168),
    Rgb::new(204, 71, 120),
    Rgb::new(248, 149, 64),
    Rgb::new(240, 249, 33),
];

const VIRIDIS: [Rgb; 5] = [
    Rgb::new(68, 1, 84),
    Rgb::new(59, 82, 139),
    Rgb::new(33, 145, 140),
    Rgb::new(94, 201, 98),
    Rgb::new(253, 231, 37),
];

/// Sequential colormap used to shade segments by altitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Palette {
    #[default]
    Plasma,
    Viridis,
}

impl Palette {
    fn stops(self) -> &'static [Rgb] {
        match self {
            Palette::Plasma => &PLASMA,
            Palette::Viridis => &VIRIDIS,
        }
    }

    /// Color at `t`, clamped to `[0, 1]`.
    pub fn color(self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f64;
        let i = (scaled.floor() as usize).min(stops.len() - 2);
        stops[i].lerp(stops[i + 1], scaled - i as f64)
    }
}
