//! Strong-scaling speedup/efficiency and the weak-efficiency approximation.
//!
//! All ratios are relative to the smallest concurrency present in a node
//! group, which is not necessarily 1. When the smallest run already uses
//! several processes the "speedup" is relative to that run, not to a serial
//! baseline.

use crate::model::MetricError;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrongScaling {
    /// Smallest concurrency observed; every ratio is relative to it.
    pub base: u32,
    pub speedup: BTreeMap<u32, f64>,
    pub efficiency: BTreeMap<u32, f64>,
}

/// Linear speedup relative to `base`.
pub fn ideal_speedup(concurrency: u32, base: u32) -> f64 {
    f64::from(concurrency) / f64::from(base)
}

/// Speedup `T(base) / T(c)` and efficiency `speedup / (c / base)` for every
/// concurrency in `means`.
pub fn compute_scaling(means: &BTreeMap<u32, f64>) -> Result<StrongScaling, MetricError> {
    let (base, t_base) = baseline(means)?;

    let mut speedup = BTreeMap::new();
    let mut efficiency = BTreeMap::new();
    for (&c, &t) in means {
        let s = finite(c, t, t_base / t)?;
        speedup.insert(c, s);
        efficiency.insert(c, finite(c, t, s / ideal_speedup(c, base))?);
    }

    Ok(StrongScaling {
        base,
        speedup,
        efficiency,
    })
}

/// Weak-scaling efficiency approximation: `T(base) / T(c)`.
///
/// This is the strong-scaling speedup formula unchanged. It only matches true
/// weak-scaling efficiency if the workload grew with concurrency between runs;
/// it is kept as-is so results line up with earlier reports.
pub fn compute_weak_efficiency(
    means: &BTreeMap<u32, f64>,
) -> Result<BTreeMap<u32, f64>, MetricError> {
    let (_, t_base) = baseline(means)?;
    means
        .iter()
        .map(|(&c, &t)| Ok((c, finite(c, t, t_base / t)?)))
        .collect()
}

/// A ratio that overflowed (tiny mean against a large base) is as degenerate
/// as a zero mean.
fn finite(concurrency: u32, mean: f64, ratio: f64) -> Result<f64, MetricError> {
    if ratio.is_finite() {
        Ok(ratio)
    } else {
        Err(MetricError::DegenerateMeasurement { concurrency, mean })
    }
}

/// Validate every mean and return the smallest concurrency with its mean.
fn baseline(means: &BTreeMap<u32, f64>) -> Result<(u32, f64), MetricError> {
    for (&concurrency, &mean) in means {
        if concurrency == 0 {
            return Err(MetricError::ZeroConcurrency);
        }
        if !(mean.is_finite() && mean > 0.0) {
            return Err(MetricError::DegenerateMeasurement { concurrency, mean });
        }
    }

    means
        .first_key_value()
        .map(|(&c, &t)| (c, t))
        .ok_or_else(|| MetricError::empty("no concurrency values to scale"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn means(pairs: &[(u32, f64)]) -> BTreeMap<u32, f64> {
        pairs.iter().copied().collect()
    }

    fn assert_close(actual: Option<&f64>, expected: f64) {
        let actual = *actual.expect("missing value");
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn unit_base() {
        let m = means(&[(1, 10.0), (2, 6.0), (4, 3.0)]);
        let s = compute_scaling(&m).unwrap();

        assert_eq!(s.base, 1);
        assert_close(s.speedup.get(&1), 1.0);
        assert_close(s.speedup.get(&2), 1.667);
        assert_close(s.speedup.get(&4), 3.333);
        assert_close(s.efficiency.get(&1), 1.0);
        assert_close(s.efficiency.get(&2), 0.833);
        assert_close(s.efficiency.get(&4), 0.833);
    }

    #[test]
    fn base_is_smallest_concurrency_not_one() {
        let m = means(&[(2, 10.0), (4, 6.0)]);
        let s = compute_scaling(&m).unwrap();

        assert_eq!(s.base, 2);
        assert_close(s.speedup.get(&2), 1.0);
        assert_close(s.efficiency.get(&2), 1.0);
        assert_close(s.speedup.get(&4), 1.667);
        assert_close(s.efficiency.get(&4), 0.833);
    }

    #[test]
    fn zero_base_mean_is_degenerate() {
        let m = means(&[(2, 0.0), (4, 3.0)]);
        assert_eq!(
            compute_scaling(&m),
            Err(MetricError::DegenerateMeasurement {
                concurrency: 2,
                mean: 0.0
            })
        );
        assert!(compute_weak_efficiency(&m).is_err());
    }

    #[test]
    fn non_finite_mean_is_degenerate() {
        let m = means(&[(1, 5.0), (8, f64::INFINITY)]);
        assert!(matches!(
            compute_scaling(&m),
            Err(MetricError::DegenerateMeasurement { concurrency: 8, .. })
        ));
    }

    #[test]
    fn overflowing_speedup_is_degenerate() {
        // Both means are finite and positive, but 1000 / 1e-320 is not.
        let tiny = 1e-320;
        let m = means(&[(1, 1000.0), (2, tiny)]);
        assert_eq!(
            compute_scaling(&m),
            Err(MetricError::DegenerateMeasurement {
                concurrency: 2,
                mean: tiny
            })
        );
        assert_eq!(
            compute_weak_efficiency(&m),
            Err(MetricError::DegenerateMeasurement {
                concurrency: 2,
                mean: tiny
            })
        );
    }

    #[test]
    fn empty_means_are_rejected() {
        assert!(matches!(
            compute_scaling(&BTreeMap::new()),
            Err(MetricError::EmptyInput(_))
        ));
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let m = means(&[(0, 1.0)]);
        assert_eq!(compute_scaling(&m), Err(MetricError::ZeroConcurrency));
    }

    #[test]
    fn weak_efficiency_reuses_speedup_formula() {
        let m = means(&[(2, 10.0), (4, 12.5), (8, 20.0)]);
        let weak = compute_weak_efficiency(&m).unwrap();
        let strong = compute_scaling(&m).unwrap();

        assert_eq!(weak, strong.speedup);
        assert_close(weak.get(&4), 0.8);
        assert_close(weak.get(&8), 0.5);
    }

    #[test]
    fn ideal_is_relative_to_base() {
        assert_eq!(ideal_speedup(8, 2), 4.0);
        assert_eq!(ideal_speedup(3, 3), 1.0);
    }
}
