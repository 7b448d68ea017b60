use crate::core::filters::{matches_fallback, matches_strict};
use crate::models::{HouseRecord, MatchPass, MatchSet, MatchingParams, QueryConfig};

/// Similarity matcher - finds comparable records for a query
///
/// # Passes
/// 1. Strict: tight area/year windows, exact rooms, quality ±1
/// 2. Fallback: only when the strict pass is empty; wider windows
///
/// Each pass keeps the first N matches in record store order. There is no
/// closeness ranking, so results depend on the order of the store.
#[derive(Debug, Clone)]
pub struct Matcher {
    params: MatchingParams,
}

impl Matcher {
    pub fn new(params: MatchingParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: MatchingParams::default(),
        }
    }

    pub fn params(&self) -> &MatchingParams {
        &self.params
    }

    /// Find comparable records for a query
    ///
    /// # Arguments
    /// * `store` - All records of the record store, in load order
    /// * `query` - The house being estimated
    ///
    /// # Returns
    /// MatchSet from the strict pass, or from the fallback pass when the
    /// strict pass found nothing. An empty fallback set means there are no
    /// comparable records.
    pub fn find_matches(&self, store: &[HouseRecord], query: &QueryConfig) -> MatchSet {
        let strict: Vec<HouseRecord> = store
            .iter()
            .filter(|record| matches_strict(record, query, &self.params))
            .take(self.params.strict_limit)
            .copied()
            .collect();

        if !strict.is_empty() {
            tracing::debug!("Strict pass found {} comparables", strict.len());
            return MatchSet {
                pass: MatchPass::Strict,
                records: strict,
            };
        }

        let fallback: Vec<HouseRecord> = store
            .iter()
            .filter(|record| matches_fallback(record, query, &self.params))
            .take(self.params.fallback_limit)
            .copied()
            .collect();

        tracing::debug!(
            "Strict pass empty, fallback pass found {} comparables",
            fallback.len()
        );

        MatchSet {
            pass: MatchPass::Fallback,
            records: fallback,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_params()
    }
}
