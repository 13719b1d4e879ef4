//! Maturity band classification.

use super::scorer::round2;
use crate::model::{standard_bands, MaturityBand};
use std::sync::LazyLock;

/// Used when a caller passes no bands at all.
static STANDARD_BANDS: LazyLock<Vec<MaturityBand>> = LazyLock::new(standard_bands);

/// Map a total score to its maturity band.
///
/// The total is rounded to two decimals before the range lookup, so float
/// noise cannot land between two-decimal band edges. Scores outside every
/// band (e.g. 0 for an empty assessment) fall back to the lowest band. An
/// empty `bands` slice is classified against [`standard_bands`].
#[must_use]
pub fn classify(total: f64, bands: &[MaturityBand]) -> &MaturityBand {
    let bands: &[MaturityBand] = if bands.is_empty() {
        tracing::warn!("No maturity bands given, using the standard bands");
        &STANDARD_BANDS
    } else {
        bands
    };
    let total = round2(total);
    bands
        .iter()
        .find(|band| band.contains(total))
        .or_else(|| bands.iter().min_by_key(|band| band.level))
        .unwrap_or(&STANDARD_BANDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        let bands = standard_bands();
        assert_eq!(classify(1.0, &bands).level, 1);
        assert_eq!(classify(1.80, &bands).level, 1);
        assert_eq!(classify(1.81, &bands).level, 2);
        assert_eq!(classify(2.61, &bands).level, 3);
        assert_eq!(classify(3.0, &bands).level, 3);
        assert_eq!(classify(3.40, &bands).level, 3);
        assert_eq!(classify(4.21, &bands).level, 5);
        assert_eq!(classify(5.0, &bands).level, 5);
    }

    #[test]
    fn test_out_of_range_falls_back_to_lowest() {
        let bands = standard_bands();
        assert_eq!(classify(0.0, &bands).level, 1);
        assert_eq!(classify(7.5, &bands).level, 1);
        assert_eq!(classify(f64::NAN, &bands).level, 1);
    }

    #[test]
    fn test_float_noise_at_edges() {
        let bands = standard_bands();
        // 2.61 reached by accumulation carries float noise
        let noisy = (0..261).fold(0.0, |acc, _| acc + 0.01);
        assert_eq!(classify(noisy, &bands).level, 3);
    }

    #[test]
    fn test_empty_bands_never_panic() {
        assert_eq!(classify(3.0, &[]).name, "Definido");
        assert_eq!(classify(0.0, &[]).level, 1);
    }

    #[test]
    fn test_fallback_uses_lowest_level_not_first_entry() {
        let mut bands = standard_bands();
        bands.reverse();
        assert_eq!(classify(0.0, &bands).level, 1);
    }
}
