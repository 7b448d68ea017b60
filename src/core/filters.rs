use crate::models::{HouseRecord, MatchingParams, QueryConfig};

const MIN_QUALITY: u8 = 1;
const MAX_QUALITY: u8 = 10;
const MIN_BEDROOMS: u32 = 1;

/// Inclusive range check
#[inline]
fn within<T: PartialOrd>(value: T, low: T, high: T) -> bool {
    value >= low && value <= high
}

/// Strict pass predicate
///
/// Area within the strict tolerance, exact bedroom and bath counts, year
/// within the strict window, and quality within one step clamped to [1, 10].
#[inline]
pub fn matches_strict(record: &HouseRecord, query: &QueryConfig, params: &MatchingParams) -> bool {
    let area_low = query.area * (1.0 - params.strict_area_tolerance);
    let area_high = query.area * (1.0 + params.strict_area_tolerance);
    if !within(record.living_area_sq_ft, area_low, area_high) {
        return false;
    }

    if record.bedrooms != query.bedrooms || record.full_baths != query.full_baths {
        return false;
    }

    if !within(
        record.year_built,
        query.year_built - params.strict_year_window,
        query.year_built + params.strict_year_window,
    ) {
        return false;
    }

    let quality_low = query
        .overall_quality
        .saturating_sub(params.strict_quality_window)
        .max(MIN_QUALITY);
    let quality_high = query
        .overall_quality
        .saturating_add(params.strict_quality_window)
        .min(MAX_QUALITY);

    within(record.overall_quality, quality_low, quality_high)
}

/// Fallback pass predicate
///
/// Wider area and year windows, bedrooms within one of the query (floored
/// at one bedroom). Bathrooms and quality are ignored.
#[inline]
pub fn matches_fallback(
    record: &HouseRecord,
    query: &QueryConfig,
    params: &MatchingParams,
) -> bool {
    let area_low = query.area * (1.0 - params.fallback_area_tolerance);
    let area_high = query.area * (1.0 + params.fallback_area_tolerance);
    if !within(record.living_area_sq_ft, area_low, area_high) {
        return false;
    }

    let bedrooms_low = query
        .bedrooms
        .saturating_sub(params.fallback_bedroom_window)
        .max(MIN_BEDROOMS);
    let bedrooms_high = query.bedrooms.saturating_add(params.fallback_bedroom_window);
    if !within(record.bedrooms, bedrooms_low, bedrooms_high) {
        return false;
    }

    within(
        record.year_built,
        query.year_built - params.fallback_year_window,
        query.year_built + params.fallback_year_window,
    )
}
