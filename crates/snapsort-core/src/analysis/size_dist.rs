/// Size-distribution histogram — file sizes across equal-width buckets.
use crate::model::FileEntry;
use serde::Serialize;

/// File sizes bucketed into `counts.len()` equal-width bins spanning
/// `0..=max_size`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SizeHistogram {
    /// Width of each bucket in bytes (at least 1).
    pub bucket_width: u64,
    /// Largest file size observed.
    pub max_size: u64,
    /// Number of files per bucket, smallest sizes first.
    pub counts: Vec<u64>,
}

impl SizeHistogram {
    /// Inclusive byte range covered by bucket `i`.
    pub fn bucket_range(&self, i: usize) -> (u64, u64) {
        let lo = self.bucket_width * i as u64;
        let hi = self.bucket_width * (i as u64 + 1) - 1;
        (lo, hi)
    }

    /// Largest bucket count, for chart scaling.
    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bucket the file sizes in `entries` into `bins` equal-width buckets.
///
/// Directories are ignored. With no files (or `bins == 0`) the histogram is
/// empty. The largest file lands in the last bucket, not one past it.
pub fn size_distribution(entries: &[FileEntry], bins: usize) -> SizeHistogram {
    let sizes: Vec<u64> = entries
        .iter()
        .filter(|e| !e.is_dir)
        .map(|e| e.size)
        .collect();

    let max_size = sizes.iter().copied().max().unwrap_or(0);
    if sizes.is_empty() || bins == 0 {
        return SizeHistogram::default();
    }

    // Width chosen so max_size falls inside the final bucket.
    let bucket_width = (max_size / bins as u64 + 1).max(1);
    let mut counts = vec![0u64; bins];
    for size in sizes {
        let idx = ((size / bucket_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    SizeHistogram {
        bucket_width,
        max_size,
        counts,
    }
}
