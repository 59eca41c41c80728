// bands.rs
// Banded lookup tables mapping potential to color and field strength to arrow size

use crate::config::{FIELD_MAX, POT_MAX, POT_MIN};
use palette::Srgb;

/// Color type handed to the canvas.
pub type Rgb = Srgb<u8>;

/// One entry of a banded lookup table covering `[lower, upper)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band<T> {
    pub lower: f64,
    pub upper: f64,
    pub value: T,
}

impl<T> Band<T> {
    pub const fn new(lower: f64, upper: f64, value: T) -> Self {
        Self { lower, upper, value }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x < self.upper
    }
}

/// Index of the first band (in table order) whose half-open range holds `x`.
pub fn bucket_index<T>(table: &[Band<T>], x: f64) -> Option<usize> {
    table.iter().position(|band| band.contains(x))
}

/// Value of the first band (in table order) whose half-open range holds `x`.
pub fn bucket_lookup<T>(table: &[Band<T>], x: f64) -> Option<&T> {
    bucket_index(table, x).map(|i| &table[i].value)
}

// ====================
// Potential -> Color
// ====================
/// Gradient swatches from coolest (very negative) to warmest (very positive).
pub const POTENTIAL_BANDS: [Band<[u8; 3]>; 11] = [
    Band::new(POT_MIN, -8.0e7, [66, 66, 245]),
    Band::new(-8.0e7, -4.0e7, [66, 120, 245]),
    Band::new(-4.0e7, -4.0e6, [66, 194, 245]),
    Band::new(-4.0e6, -9.0e5, [66, 225, 225]),
    Band::new(-9.0e5, -8.0e5, [66, 245, 194]),
    Band::new(-8.0e5, 8.0e5, [120, 245, 120]),
    Band::new(8.0e5, 9.0e5, [194, 245, 66]),
    Band::new(9.0e5, 4.0e6, [225, 225, 66]),
    Band::new(4.0e6, 4.0e7, [245, 194, 66]),
    Band::new(4.0e7, 8.0e7, [245, 120, 66]),
    Band::new(8.0e7, POT_MAX, [245, 66, 66]),
];

/// Band index for a potential; outside the table the value clamps to the nearest end.
pub fn potential_band(potential: i64) -> usize {
    let v = potential as f64;
    match bucket_index(&POTENTIAL_BANDS, v) {
        Some(i) => i,
        None if v >= POT_MAX => POTENTIAL_BANDS.len() - 1,
        None => 0,
    }
}

pub fn potential_color(potential: i64) -> Rgb {
    let [r, g, b] = POTENTIAL_BANDS[potential_band(potential)].value;
    Srgb::new(r, g, b)
}

// ====================
// Field Magnitude -> Arrow Size
// ====================
/// Quantized arrow geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowStyle {
    /// Arrow length in pixels (discrete mode only).
    pub length: u32,
    /// Stroke width in pixels; 0 means nothing is stroked.
    pub width: u32,
}

impl ArrowStyle {
    pub const NONE: ArrowStyle = ArrowStyle { length: 0, width: 0 };

    const fn new(length: u32, width: u32) -> Self {
        Self { length, width }
    }
}

/// Tiers over `|E| / FIELD_MAX`, strongest first.
pub const LENGTH_BANDS: [Band<ArrowStyle>; 13] = [
    Band::new(1.0e4, f64::INFINITY, ArrowStyle::new(45, 4)),
    Band::new(7500.0, 1.0e4, ArrowStyle::new(40, 3)),
    Band::new(5000.0, 7500.0, ArrowStyle::new(35, 3)),
    Band::new(1000.0, 5000.0, ArrowStyle::new(30, 3)),
    Band::new(100.0, 1000.0, ArrowStyle::new(25, 3)),
    Band::new(10.0, 100.0, ArrowStyle::new(20, 2)),
    Band::new(0.1, 10.0, ArrowStyle::new(17, 2)),
    Band::new(0.01, 0.1, ArrowStyle::new(13, 2)),
    Band::new(1.0e-3, 0.01, ArrowStyle::new(10, 1)),
    Band::new(2.0e-4, 1.0e-3, ArrowStyle::new(6, 1)),
    Band::new(1.0 / 7500.0, 2.0e-4, ArrowStyle::new(4, 1)),
    Band::new(1.0e-4, 1.0 / 7500.0, ArrowStyle::new(2, 1)),
    Band::new(f64::NEG_INFINITY, 1.0e-4, ArrowStyle::NONE),
];

/// Arrow size for a field magnitude. The sign is ignored.
pub fn arrow_style(magnitude: f64) -> ArrowStyle {
    let ratio = magnitude.abs() / FIELD_MAX;
    bucket_lookup(&LENGTH_BANDS, ratio)
        .copied()
        .unwrap_or(ArrowStyle::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potential_bands_are_contiguous() {
        for pair in POTENTIAL_BANDS.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
        assert_eq!(POTENTIAL_BANDS[0].lower, POT_MIN);
        assert_eq!(POTENTIAL_BANDS[10].upper, POT_MAX);
    }

    #[test]
    fn length_bands_are_contiguous() {
        for pair in LENGTH_BANDS.windows(2) {
            assert_eq!(pair[0].lower, pair[1].upper);
        }
    }

    #[test]
    fn boundaries_belong_to_the_upper_band() {
        assert_eq!(potential_band(-80_000_001), 0);
        assert_eq!(potential_band(-80_000_000), 1);
        assert_eq!(potential_band(-800_001), 4);
        assert_eq!(potential_band(-800_000), 5);
        assert_eq!(potential_band(0), 5);
        assert_eq!(potential_band(799_999), 5);
        assert_eq!(potential_band(800_000), 6);
        assert_eq!(potential_band(80_000_000), 10);
    }

    #[test]
    fn warmth_never_decreases_with_potential() {
        let mut samples: Vec<i64> = POTENTIAL_BANDS
            .iter()
            .flat_map(|b| [b.lower as i64 - 1, b.lower as i64, b.upper as i64 - 1, b.upper as i64])
            .collect();
        samples.extend([i64::MIN / 2, -20_000_000_000, 20_000_000_000, i64::MAX / 2]);
        samples.sort_unstable();

        let mut last = 0;
        for v in samples {
            let band = potential_band(v);
            assert!(band >= last, "band dropped from {} to {} at {}", last, band, v);
            last = band;
        }
    }

    #[test]
    fn out_of_range_potentials_clamp() {
        assert_eq!(potential_color(9_000_000_000), Srgb::new(245, 66, 66));
        assert_eq!(potential_color(50_000_000_000), Srgb::new(245, 66, 66));
        assert_eq!(potential_color(-9_000_000_000), Srgb::new(66, 66, 245));
        assert_eq!(potential_color(-50_000_000_000), Srgb::new(66, 66, 245));
        assert_eq!(potential_color(0), Srgb::new(120, 245, 120));
    }

    #[test]
    fn arrow_style_tiers() {
        // 9e5 V/m, the field 100 px from a unit charge.
        assert_eq!(arrow_style(9.0e5), ArrowStyle { length: 17, width: 2 });
        assert_eq!(arrow_style(1.0e9), ArrowStyle { length: 45, width: 4 });
        assert_eq!(arrow_style(7.5e8), ArrowStyle { length: 40, width: 3 });
        assert_eq!(arrow_style(-9.0e5), ArrowStyle { length: 17, width: 2 });
        // 1e6 / FIELD_MAX = 10 opens the next tier.
        assert_eq!(arrow_style(-1.0e6), ArrowStyle { length: 20, width: 2 });
        assert_eq!(arrow_style(1.0e3), ArrowStyle { length: 13, width: 2 });
        assert_eq!(arrow_style(10.0), ArrowStyle { length: 2, width: 1 });
        assert_eq!(arrow_style(0.0), ArrowStyle::NONE);
        assert_eq!(arrow_style(1.0), ArrowStyle::NONE);
        assert_eq!(arrow_style(f64::NAN), ArrowStyle::NONE);
    }

    #[test]
    fn bucket_lookup_uses_table_order() {
        let table = [Band::new(0.0, 10.0, 'a'), Band::new(5.0, 20.0, 'b')];
        assert_eq!(bucket_lookup(&table, 7.0), Some(&'a'));
        assert_eq!(bucket_lookup(&table, 12.0), Some(&'b'));
        assert_eq!(bucket_lookup(&table, 20.0), None);
    }
}
