use serde::Serialize;

use crate::models::HouseRecord;

/// Column names in dataset order
pub const COLUMNS: [&str; 6] = [
    "GrLivArea",
    "BedroomAbvGr",
    "FullBath",
    "YearBuilt",
    "OverallQual",
    "SalePrice",
];

/// Dataset-level summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub mean_sale_price: Option<f64>,
    pub mean_living_area: Option<f64>,
}

/// Pearson correlation matrix over the six dataset columns
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// One histogram bucket, `[lower, upper)` except for the last which is closed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// One point of the living-area versus sale-price scatter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub area: f64,
    pub price: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn row(record: &HouseRecord) -> [f64; 6] {
    let f = record.features();
    [f[0], f[1], f[2], f[3], f[4], record.sale_price]
}

pub fn summarize_dataset(records: &[HouseRecord]) -> DatasetSummary {
    DatasetSummary {
        total_records: records.len(),
        mean_sale_price: mean(records.iter().map(|r| r.sale_price)),
        mean_living_area: mean(records.iter().map(|r| r.living_area_sq_ft)),
    }
}

/// Pearson correlation of every column pair
///
/// A pair involving a constant column has no defined correlation and is
/// reported as `None`.
pub fn correlation_matrix(records: &[HouseRecord]) -> CorrelationMatrix {
    let rows: Vec<[f64; 6]> = records.iter().map(row).collect();
    let n = rows.len() as f64;

    let means: Vec<Option<f64>> = (0..6).map(|c| mean(rows.iter().map(|r| r[c]))).collect();

    let mut values = vec![vec![None; 6]; 6];
    for i in 0..6 {
        for j in i..6 {
            let (Some(mi), Some(mj)) = (means[i], means[j]) else {
                continue;
            };

            let (mut cov, mut var_i, mut var_j) = (0.0, 0.0, 0.0);
            for r in &rows {
                let di = r[i] - mi;
                let dj = r[j] - mj;
                cov += di * dj;
                var_i += di * di;
                var_j += dj * dj;
            }

            let denom = (var_i * var_j).sqrt();
            let corr = if n > 1.0 && denom > 0.0 {
                Some((cov / denom).clamp(-1.0, 1.0))
            } else {
                None
            };

            values[i][j] = corr;
            values[j][i] = corr;
        }
    }

    CorrelationMatrix {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        values,
    }
}

/// Equal-width histogram of sale prices
pub fn price_histogram(records: &[HouseRecord], bins: usize) -> Vec<HistogramBin> {
    if records.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = records.iter().map(|r| r.sale_price).fold(f64::INFINITY, f64::min);
    let max = records.iter().map(|r| r.sale_price).fold(f64::NEG_INFINITY, f64::max);

    // A single distinct price collapses into one bucket
    if max <= min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: records.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for record in records {
        let idx = (((record.sale_price - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

/// Living area against sale price for every record, in store order
pub fn area_price_points(records: &[HouseRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| ScatterPoint {
            area: r.living_area_sq_ft,
            price: r.sale_price,
        })
        .collect()
}
