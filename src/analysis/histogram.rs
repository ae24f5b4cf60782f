//! Windowed histogram bucketing
//!
//! The bar chart and the pie chart present the same partition of solve
//! times into fixed-width ranges plus an overflow bucket. The bucketing
//! lives here so the two presentations cannot drift apart.

/// A single fixed-width bucket
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// Inclusive lower bound of the bucket's range
    pub lower: f64,
    /// Exclusive upper bound, `None` for the overflow bucket
    pub upper: Option<f64>,
    /// Number of values that fell into the bucket
    pub count: usize,
}

impl Bucket {
    /// Whether this is the open-ended overflow bucket
    pub fn is_overflow(&self) -> bool {
        self.upper.is_none()
    }
}

/// Partition values into `bucket_count` fixed-width ranges plus an
/// overflow bucket
///
/// Buckets start at zero. Values at or above `bucket_width *
/// bucket_count` land in the overflow bucket; values below zero count
/// toward the first bucket so that every input lands in exactly one
/// bucket and counts sum to the input length.
pub fn bucket_by_range(values: &[f64], bucket_width: f64, bucket_count: usize) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = (0..bucket_count)
        .map(|i| Bucket {
            lower: i as f64 * bucket_width,
            upper: Some((i + 1) as f64 * bucket_width),
            count: 0,
        })
        .collect();
    buckets.push(Bucket {
        lower: bucket_count as f64 * bucket_width,
        upper: None,
        count: 0,
    });

    for &value in values {
        let index = if value < 0.0 {
            0
        } else {
            ((value / bucket_width).floor() as usize).min(bucket_count)
        };
        buckets[index].count += 1;
    }

    buckets
}

/// A single bin of a density histogram
#[derive(Debug, Clone, PartialEq)]
pub struct DensityBin {
    /// Center of the bin's range
    pub center: f64,
    /// Bin width
    pub width: f64,
    /// Normalized density (counts integrate to 1 over all bins)
    pub density: f64,
}

/// Compute a normalized density histogram over `bin_count` equal bins
/// spanning the value range
///
/// Returns an empty vector for empty input or a degenerate range.
pub fn density_histogram(values: &[f64], bin_count: usize) -> Vec<DensityBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range <= 0.0 {
        return Vec::new();
    }

    let width = range / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for &value in values {
        let index = (((value - min) / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    let norm = values.len() as f64 * width;
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| DensityBin {
            center: min + (i as f64 + 0.5) * width,
            width,
            density: count as f64 / norm,
        })
        .collect()
}
