//! Blue (low) to red (high) gradient for the choropleth map.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Linear value range the gradient is stretched over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Scale spanning the given values; `(0, 0)` for no values.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Self::new(0.0, 0.0);
        };
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Self::new(min, max)
    }

    /// Position of `value` in the range, clamped to `[0, 1]`.
    /// A zero-width range maps everything to 0.
    pub fn position(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        let t = (value - self.min) / span;
        if t.is_nan() {
            0.0
        } else {
            t.clamp(0.0, 1.0)
        }
    }

    /// Fill color for a prefecture with sales `value`.
    ///
    /// Blue at `min`, red at `max`. Green fades from 100 to 0 along the way,
    /// which keeps the middle of the range a readable purple. Values outside
    /// the range are clamped to the nearest end.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontend::dashboards::d400_sales_overview::color::{ColorScale, Rgb};
    ///
    /// let scale = ColorScale::from_values([120_000.0, 80_000.0, 40_000.0]);
    ///
    /// assert_eq!(scale.color_for(40_000.0), Rgb { r: 0, g: 100, b: 255 });
    /// assert_eq!(scale.color_for(120_000.0).to_string(), "rgb(255, 0, 0)");
    /// assert_eq!(scale.color_for(80_000.0).to_string(), "rgb(128, 50, 128)");
    ///
    /// // Below the range stays blue
    /// assert_eq!(scale.color_for(0.0), scale.color_for(40_000.0));
    ///
    /// // A single region has nothing to compare against
    /// let flat = ColorScale::from_values([500.0]);
    /// assert_eq!(flat.color_for(500.0), Rgb { r: 0, g: 100, b: 255 });
    /// ```
    pub fn color_for(&self, value: f64) -> Rgb {
        let t = self.position(value);
        Rgb {
            r: (255.0 * t).round() as u8,
            g: (100.0 * (1.0 - t)).round() as u8,
            b: (255.0 * (1.0 - t)).round() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let scale = ColorScale::new(100.0, 500.0);
        assert_eq!(scale.color_for(100.0), Rgb { r: 0, g: 100, b: 255 });
        assert_eq!(scale.color_for(500.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(scale.color_for(300.0).to_string(), "rgb(128, 50, 128)");
    }

    #[test]
    fn test_position_stays_in_unit_range() {
        let scale = ColorScale::new(-50.0, 50.0);
        for v in [-50.0, -12.5, 0.0, 33.3, 50.0] {
            let t = scale.position(v);
            assert!((0.0..=1.0).contains(&t), "t = {} for {}", t, v);
        }
        assert_eq!(scale.position(-1000.0), 0.0);
        assert_eq!(scale.position(1000.0), 1.0);
    }

    #[test]
    fn test_flat_range_falls_back_to_low_end() {
        let scale = ColorScale::new(42.0, 42.0);
        assert_eq!(scale.position(42.0), 0.0);
        assert_eq!(scale.color_for(42.0).to_string(), "rgb(0, 100, 255)");
    }

    #[test]
    fn test_from_values() {
        assert_eq!(
            ColorScale::from_values([300.0, 100.0, 500.0]),
            ColorScale::new(100.0, 500.0)
        );
        assert_eq!(ColorScale::from_values(Vec::new()), ColorScale::new(0.0, 0.0));
    }
}
