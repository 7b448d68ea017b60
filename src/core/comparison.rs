use crate::models::{ComparisonReport, MatchSet, Tier, TierThresholds};

/// Compare a predicted price against the sale prices of its comparables
///
/// Returns `None` for an empty match set, so callers never divide by a
/// missing mean.
pub fn summarize(
    matches: &MatchSet,
    predicted: f64,
    thresholds: &TierThresholds,
) -> Option<ComparisonReport> {
    if matches.is_empty() {
        return None;
    }

    let prices = matches.records.iter().map(|r| r.sale_price);
    let count = matches.len();
    let mean = prices.clone().sum::<f64>() / count as f64;
    let min = prices.clone().fold(f64::INFINITY, f64::min);
    let max = prices.fold(f64::NEG_INFINITY, f64::max);

    let delta = predicted - mean;
    let pct_error = if mean != 0.0 {
        delta.abs() / mean * 100.0
    } else {
        0.0
    };

    Some(ComparisonReport {
        count,
        mean,
        min,
        max,
        delta,
        pct_error,
        tier: classify(delta, thresholds),
    })
}

/// Tier for a prediction error in dollars
#[inline]
pub fn classify(delta: f64, thresholds: &TierThresholds) -> Tier {
    let abs = delta.abs();
    if abs < thresholds.excellent_below {
        Tier::Excellent
    } else if abs < thresholds.good_below {
        Tier::Good
    } else {
        Tier::Fair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HouseRecord, MatchPass};

    fn match_set(prices: &[f64]) -> MatchSet {
        MatchSet {
            pass: MatchPass::Strict,
            records: prices
                .iter()
                .map(|&p| HouseRecord {
                    living_area_sq_ft: 2000.0,
                    bedrooms: 3,
                    full_baths: 2,
                    year_built: 2010,
                    overall_quality: 7,
                    sale_price: p,
                })
                .collect(),
        }
    }

    #[test]
    fn test_tier_boundaries() {
        let t = TierThresholds::default();
        assert_eq!(classify(9_999.0, &t), Tier::Excellent);
        assert_eq!(classify(10_000.0, &t), Tier::Good);
        assert_eq!(classify(24_999.0, &t), Tier::Good);
        assert_eq!(classify(25_000.0, &t), Tier::Fair);
        assert_eq!(classify(-9_999.0, &t), Tier::Excellent);
        assert_eq!(classify(-30_000.0, &t), Tier::Fair);
    }

    #[test]
    fn test_summarize_stats() {
        let report = summarize(
            &match_set(&[200_000.0, 250_000.0, 300_000.0]),
            270_000.0,
            &TierThresholds::default(),
        )
        .unwrap();

        assert_eq!(report.count, 3);
        assert_eq!(report.mean, 250_000.0);
        assert_eq!(report.min, 200_000.0);
        assert_eq!(report.max, 300_000.0);
        assert_eq!(report.delta, 20_000.0);
        assert!((report.pct_error - 8.0).abs() < 1e-9);
        assert_eq!(report.tier, Tier::Good);
    }

    #[test]
    fn test_summarize_underestimate() {
        let report =
            summarize(&match_set(&[300_000.0]), 250_000.0, &TierThresholds::default()).unwrap();

        assert_eq!(report.delta, -50_000.0);
        assert_eq!(report.tier, Tier::Fair);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&match_set(&[]), 250_000.0, &TierThresholds::default()).is_none());
    }
}
