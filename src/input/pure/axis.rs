// Raw evdev axis values to normalized stick positions

/// Reported range of one absolute axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub minimum: i32,
    pub maximum: i32,
}

impl AxisRange {
    /// Signed 16-bit, what most XInput-style pads report.
    pub const SIGNED_16: AxisRange = AxisRange {
        minimum: -32768,
        maximum: 32767,
    };

    /// Map a raw reading into [-1, 1] around the range center.
    pub fn normalize(self, raw: i32) -> f32 {
        let span = self.maximum as f32 - self.minimum as f32;
        if span <= 0.0 {
            return 0.0;
        }
        let center = (self.maximum as f32 + self.minimum as f32) / 2.0;
        ((raw as f32 - center) / (span / 2.0)).clamp(-1.0, 1.0)
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::SIGNED_16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_range_center_is_zero() {
        assert!(AxisRange::SIGNED_16.normalize(0).abs() < 0.001);
        assert!((AxisRange::SIGNED_16.normalize(32767) - 1.0).abs() < 0.001);
        assert!((AxisRange::SIGNED_16.normalize(-32768) + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_unsigned_range() {
        let range = AxisRange { minimum: 0, maximum: 255 };
        assert!(range.normalize(128).abs() < 0.01);
        assert!((range.normalize(255) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_range() {
        let range = AxisRange { minimum: 5, maximum: 5 };
        assert_eq!(range.normalize(5), 0.0);
    }
}
