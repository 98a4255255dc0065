//! Display colors for clusters.
//!
//! Colors are cosmetic: the engine only guarantees that one call yields `k`
//! mutually distinguishable colors and that the sequence stays stable per
//! cluster index for the lifetime of the session.

use palette::{FromColor, Hsl, Srgb};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;

const SATURATION: f32 = 0.65;
const LIGHTNESS: f32 = 0.55;

/// An opaque sRGB display color for one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClusterColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ClusterColor {
    /// CSS hex form, e.g. `#1fa2c8`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for ClusterColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Generate `k` distinguishable colors.
///
/// Hues are spaced evenly (360°/k apart) from a random base hue, at fixed
/// saturation and lightness, so any two clusters in one session differ in
/// hue by at least 360°/k.
pub fn distinct_colors(k: usize, rng: &mut ChaCha8Rng) -> Vec<ClusterColor> {
    let base_hue = rng.gen_range(0.0f32..360.0);

    (0..k)
        .map(|i| {
            let hue = (base_hue + i as f32 * 360.0 / k as f32) % 360.0;
            let rgb = Srgb::from_color(Hsl::new(hue, SATURATION, LIGHTNESS));
            let bytes: Srgb<u8> = rgb.into_format();
            ClusterColor {
                r: bytes.red,
                g: bytes.green,
                b: bytes.blue,
            }
        })
        .collect()
}
