//! Numeric helpers: range mapping, axis padding, binning and number labels.

use crate::error::{PlotError, Result};

/// Smallest and largest value in `values`, or `None` when empty.
#[must_use]
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

/// Linearly map `values` from `[value_min, value_max]` onto
/// `[target_min, target_max]`.
///
/// Missing bounds are taken from the data. When the source range collapses to
/// a single value every output is `target_min`. `target_min` may exceed
/// `target_max`, which inverts the mapping.
#[must_use]
pub fn scale_values(
    values: &[f64],
    target_min: f64,
    target_max: f64,
    value_min: Option<f64>,
    value_max: Option<f64>,
) -> Vec<f64> {
    let Some((data_min, data_max)) = min_max(values) else {
        return Vec::new();
    };
    let value_min = value_min.unwrap_or(data_min);
    let value_max = value_max.unwrap_or(data_max);

    if value_max == value_min {
        return vec![target_min; values.len()];
    }

    let factor = span_factor(value_min, value_max);
    let low = value_min * factor;
    let value_range = value_max * factor - low;
    let target_range = target_max - target_min;
    values
        .iter()
        .map(|v| (v * factor - low) / value_range * target_range + target_min)
        .collect()
}

/// `1.0`, or `0.5` when `high - low` overflows. Both bounds are multiplied by
/// the factor before subtracting so the difference stays finite.
fn span_factor(low: f64, high: f64) -> f64 {
    if (high - low).is_finite() {
        1.0
    } else {
        0.5
    }
}

/// Midpoint of `a` and `b` without overflowing for large magnitudes.
#[must_use]
pub fn midpoint(a: f64, b: f64) -> f64 {
    a / 2.0 + b / 2.0
}

/// Default fractional padding applied by [`get_axis_range`].
pub const AXIS_PADDING: f64 = 0.1;

/// Axis bounds enclosing `values` with `padding` (a fraction of the data
/// range) added on both sides.
///
/// All-equal data gets a fixed ±1 margin instead. Empty data yields `(0, 1)`.
/// The result is clamped to the finite `f64` range.
#[must_use]
pub fn get_axis_range(values: &[f64], padding: f64) -> (f64, f64) {
    let Some((min, max)) = min_max(values) else {
        return (0.0, 1.0);
    };
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let factor = span_factor(min, max);
    let pad = (max * factor - min * factor) * padding / factor;
    ((min - pad).max(f64::MIN), (max + pad).min(f64::MAX))
}

/// Equal-width histogram bins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bins {
    /// Bin boundaries; one more entry than `counts`.
    pub edges: Vec<f64>,
    /// Number of values falling in each bin.
    pub counts: Vec<usize>,
}

impl Bins {
    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether there are no bins (empty input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of binned values.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Split `[min, max]` of `values` into `n_bins` equal-width bins and count
/// the values in each.
///
/// A value equal to the maximum lands in the last bin. If every value is the
/// same, a single bin `[min, min + 1]` holds them all.
pub fn compute_bins(values: &[f64], n_bins: usize) -> Result<Bins> {
    if n_bins == 0 {
        return Err(PlotError::InvalidBins(n_bins));
    }
    let Some((min, max)) = min_max(values) else {
        return Ok(Bins::default());
    };

    if min == max {
        return Ok(Bins {
            edges: vec![min, min + 1.0],
            counts: vec![values.len()],
        });
    }

    let factor = span_factor(min, max);
    let low = min * factor;
    let bin_width = (max * factor - low) / n_bins as f64;
    let mut edges: Vec<f64> = (0..n_bins)
        .map(|i| (low + i as f64 * bin_width) / factor)
        .collect();
    edges.push(max);

    let mut counts = vec![0usize; n_bins];
    for &value in values {
        let idx = if value >= max {
            n_bins - 1
        } else {
            (((value * factor - low) / bin_width).floor() as usize).min(n_bins - 1)
        };
        counts[idx] += 1;
    }

    Ok(Bins { edges, counts })
}

/// Format a number for axis ticks and value columns with two decimals.
///
/// See [`format_number_with_precision`].
#[must_use]
pub fn format_number(value: f64) -> String {
    format_number_with_precision(value, 2)
}

/// Compact magnitude-aware number formatting.
///
/// - `|v| >= 1e6` prints millions with an `M` suffix
/// - `|v| >= 1e3` prints thousands with a `K` suffix
/// - nonzero `|v| < 0.01` prints scientific notation (`1.50e-03`)
/// - anything else prints fixed-point
#[must_use]
pub fn format_number_with_precision(value: f64, precision: usize) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.*}M", precision, value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.*}K", precision, value / 1_000.0)
    } else if magnitude < 0.01 && value != 0.0 {
        scientific(value, precision)
    } else {
        format!("{:.*}", precision, value)
    }
}

/// Scientific notation with a signed, at least two-digit exponent.
fn scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =====================================================
    // scale_values
    // =====================================================

    #[test]
    fn test_scale_values_basic() {
        assert_eq!(
            scale_values(&[0.0, 5.0, 10.0], 0.0, 100.0, None, None),
            vec![0.0, 50.0, 100.0]
        );
    }

    #[test]
    fn test_scale_values_collapsed_range_maps_to_target_min() {
        assert_eq!(
            scale_values(&[5.0, 5.0, 5.0], 0.0, 10.0, None, None),
            vec![0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_scale_values_inverted_target() {
        assert_eq!(
            scale_values(&[0.0, 10.0], 79.0, 0.0, None, None),
            vec![79.0, 0.0]
        );
    }

    #[test]
    fn test_scale_values_explicit_bounds() {
        let scaled = scale_values(&[2.0], 0.0, 10.0, Some(0.0), Some(4.0));
        assert_eq!(scaled, vec![5.0]);
    }

    #[test]
    fn test_scale_values_huge_span() {
        assert_eq!(
            scale_values(&[-f64::MAX, 0.0, f64::MAX], 0.0, 10.0, None, None),
            vec![0.0, 5.0, 10.0]
        );
    }

    #[test]
    fn test_scale_values_empty() {
        assert!(scale_values(&[], 0.0, 1.0, None, None).is_empty());
    }

    // =====================================================
    // get_axis_range
    // =====================================================

    #[test]
    fn test_axis_range_padding() {
        let (lo, hi) = get_axis_range(&[0.0, 10.0], AXIS_PADDING);
        assert!((lo + 1.0).abs() < 1e-12);
        assert!((hi - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_range_all_equal() {
        assert_eq!(get_axis_range(&[3.0, 3.0], AXIS_PADDING), (2.0, 4.0));
    }

    #[test]
    fn test_axis_range_huge_span_stays_finite() {
        let (lo, hi) = get_axis_range(&[-f64::MAX, f64::MAX], AXIS_PADDING);
        assert_eq!((lo, hi), (f64::MIN, f64::MAX));
    }

    #[test]
    fn test_midpoint_large_values() {
        assert_eq!(midpoint(f64::MAX, f64::MAX), f64::MAX);
        assert_eq!(midpoint(f64::MIN, f64::MAX), 0.0);
        assert_eq!(midpoint(1.0, 4.0), 2.5);
    }

    #[test]
    fn test_axis_range_empty() {
        assert_eq!(get_axis_range(&[], AXIS_PADDING), (0.0, 1.0));
    }

    // =====================================================
    // compute_bins
    // =====================================================

    #[test]
    fn test_bins_max_value_in_last_bin() {
        let bins = compute_bins(&[1.0, 1.0, 1.0, 10.0], 2).unwrap();
        assert_eq!(bins.edges, vec![1.0, 5.5, 10.0]);
        assert_eq!(bins.counts, vec![3, 1]);
    }

    #[test]
    fn test_bins_huge_span() {
        let bins = compute_bins(&[-f64::MAX, 0.0, f64::MAX], 3).unwrap();
        assert_eq!(bins.counts, vec![1, 1, 1]);
        assert_eq!(bins.edges.first().copied(), Some(-f64::MAX));
        assert_eq!(bins.edges.last().copied(), Some(f64::MAX));
        assert!(bins.edges.iter().all(|e| e.is_finite()));
        assert!(bins.edges.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_bins_single_value() {
        let bins = compute_bins(&[4.0, 4.0, 4.0], 10).unwrap();
        assert_eq!(bins.edges, vec![4.0, 5.0]);
        assert_eq!(bins.counts, vec![3]);
    }

    #[test]
    fn test_bins_empty() {
        let bins = compute_bins(&[], 5).unwrap();
        assert!(bins.is_empty());
        assert!(bins.edges.is_empty());
    }

    #[test]
    fn test_bins_zero_rejected() {
        assert_eq!(compute_bins(&[1.0], 0), Err(PlotError::InvalidBins(0)));
    }

    #[test]
    fn test_bins_edges_count() {
        let bins = compute_bins(&[0.0, 1.0, 2.0, 3.0], 3).unwrap();
        assert_eq!(bins.edges.len(), 4);
        assert_eq!(bins.len(), 3);
    }

    // =====================================================
    // format_number
    // =====================================================

    #[test]
    fn test_format_millions() {
        assert_eq!(format_number(1_500_000.0), "1.50M");
        assert_eq!(format_number(-2_000_000.0), "-2.00M");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_number(1_500.0), "1.50K");
        assert_eq!(format_number(1_000.0), "1.00K");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_number(0.0), "0.00");
    }

    #[test]
    fn test_format_small_is_scientific() {
        assert_eq!(format_number(0.0015), "1.50e-03");
        assert_eq!(format_number(-0.005), "-5.00e-03");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_number(0.01), "0.01");
        assert_eq!(format_number(999.994), "999.99");
        assert_eq!(format_number(42.0), "42.00");
    }

    #[test]
    fn test_format_precision() {
        assert_eq!(format_number_with_precision(5.5, 1), "5.5");
        assert_eq!(format_number_with_precision(12_345.0, 1), "12.3K");
        assert_eq!(format_number_with_precision(3.0, 0), "3");
    }

    proptest! {
        #[test]
        fn prop_bins_count_every_value(
            values in prop::collection::vec(-1e6f64..1e6, 1..200),
            n in 1usize..40,
        ) {
            let bins = compute_bins(&values, n).unwrap();
            prop_assert_eq!(bins.total(), values.len());
            prop_assert_eq!(bins.edges.len(), bins.counts.len() + 1);
        }

        #[test]
        fn prop_bins_max_lands_in_last_bin(
            values in prop::collection::vec(-1e3f64..1e3, 2..100),
            n in 1usize..20,
        ) {
            let (min, max) = min_max(&values).unwrap();
            prop_assume!(min < max);
            let bins = compute_bins(&values, n).unwrap();
            let at_max = values.iter().filter(|&&v| v == max).count();
            prop_assert!(bins.counts[n - 1] >= at_max);
        }

        #[test]
        fn prop_bins_max_lands_in_last_bin_at_any_magnitude(
            values in prop::collection::vec(prop::num::f64::NORMAL, 2..50),
            n in 1usize..20,
        ) {
            let (min, max) = min_max(&values).unwrap();
            prop_assume!(min < max);
            let bins = compute_bins(&values, n).unwrap();
            let at_max = values.iter().filter(|&&v| v == max).count();
            prop_assert!(bins.counts[n - 1] >= at_max);
            prop_assert_eq!(bins.total(), values.len());
            prop_assert!(bins.edges.iter().all(|e| e.is_finite()));
        }

        #[test]
        fn prop_scale_stays_in_target(
            values in prop::collection::vec(-1e6f64..1e6, 1..100),
        ) {
            for v in scale_values(&values, 0.0, 79.0, None, None) {
                prop_assert!((-1e-9..=79.0 + 1e-9).contains(&v));
            }
        }

        #[test]
        fn prop_axis_range_encloses_data(
            values in prop::collection::vec(-1e6f64..1e6, 1..100),
        ) {
            let (lo, hi) = get_axis_range(&values, AXIS_PADDING);
            let (min, max) = min_max(&values).unwrap();
            prop_assert!(lo <= min && hi >= max && lo < hi);
        }
    }
}
