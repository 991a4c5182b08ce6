use crate::errors::AppError;

/// A shortwave international broadcast band, named by its wavelength in meters.
/// Limits are inclusive and in kHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterBand {
    pub meters: u32,
    pub low_khz: u32,
    pub high_khz: u32,
}

impl MeterBand {
    const fn new(meters: u32, low_khz: u32, high_khz: u32) -> Self {
        Self { meters, low_khz, high_khz }
    }

    /// Looks up a band by meters; anything outside the table is a caller error.
    pub fn from_meters(meters: u32) -> Result<Self, AppError> {
        BROADCAST_BANDS
            .iter()
            .copied()
            .find(|b| b.meters == meters)
            .ok_or(AppError::UnknownBand(meters))
    }

    /// Inclusive range test, with both edges widened by `tolerance_khz`.
    pub fn contains(&self, freq_khz: u32, tolerance_khz: u32) -> bool {
        let low = self.low_khz.saturating_sub(tolerance_khz);
        let high = self.high_khz.saturating_add(tolerance_khz);
        (low..=high).contains(&freq_khz)
    }
}

// https://en.wikipedia.org/wiki/Shortwave_bands#International_broadcast_bands
pub const BROADCAST_BANDS: &[MeterBand] = &[
    MeterBand::new(120, 2_300, 2_495),
    MeterBand::new(90, 3_200, 3_400),
    MeterBand::new(75, 3_900, 4_000),
    MeterBand::new(60, 4_750, 5_060),
    MeterBand::new(49, 5_800, 6_200),
    MeterBand::new(41, 7_200, 7_450),
    MeterBand::new(31, 9_400, 9_900),
    MeterBand::new(25, 11_600, 12_100),
    MeterBand::new(22, 13_570, 13_870),
    MeterBand::new(19, 15_100, 15_830),
    MeterBand::new(16, 17_480, 17_900),
    MeterBand::new(15, 18_900, 19_020),
    MeterBand::new(13, 21_450, 21_850),
    MeterBand::new(11, 25_600, 26_100),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_band_edges(meters: u32, low: u32, high: u32) {
        let band = MeterBand::from_meters(meters).unwrap();
        assert!(!band.contains(low - 1, 0));
        assert!(band.contains(low, 0));
        assert!(band.contains(high, 0));
        assert!(!band.contains(high + 1, 0));
        assert!(band.contains((low + high) / 2, 0));

        assert!(!band.contains(low - 10, 5));
        assert!(band.contains(low - 5, 10));
        assert!(band.contains(high + 5, 10));
        assert!(!band.contains(high + 10, 5));

        let tol = 20;
        assert!(!band.contains(low - tol - 1, tol));
        assert!(band.contains(low - tol, tol));
        assert!(band.contains(high + tol, tol));
        assert!(!band.contains(high + tol + 1, tol));
    }

    #[test]
    fn test_every_band_edge() {
        assert_band_edges(120, 2300, 2495);
        assert_band_edges(90, 3200, 3400);
        assert_band_edges(75, 3900, 4000);
        assert_band_edges(60, 4750, 5060);
        assert_band_edges(49, 5800, 6200);
        assert_band_edges(41, 7200, 7450);
        assert_band_edges(31, 9400, 9900);
        assert_band_edges(25, 11600, 12100);
        assert_band_edges(22, 13570, 13870);
        assert_band_edges(19, 15100, 15830);
        assert_band_edges(16, 17480, 17900);
        assert_band_edges(15, 18900, 19020);
        assert_band_edges(13, 21450, 21850);
        assert_band_edges(11, 25600, 26100);
        assert_eq!(BROADCAST_BANDS.len(), 14);
    }

    #[test]
    fn test_wrong_band() {
        assert!(!MeterBand::from_meters(120).unwrap().contains(3300, 0));
        assert!(!MeterBand::from_meters(60).unwrap().contains(5900, 0));
        assert!(!MeterBand::from_meters(49).unwrap().contains(7300, 0));
        assert!(!MeterBand::from_meters(31).unwrap().contains(11950, 0));
        assert!(!MeterBand::from_meters(25).unwrap().contains(15240, 0));
    }

    #[test]
    fn test_unknown_band_is_error() {
        for m in [80, 43, 40, 20, 17] {
            assert!(matches!(MeterBand::from_meters(m), Err(AppError::UnknownBand(x)) if x == m));
        }
    }
}
