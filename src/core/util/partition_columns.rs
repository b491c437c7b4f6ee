use std::num::NonZeroUsize;
use std::ops::Range;

/// Never more bands than columns, so no band is empty.
pub fn calculate_bands_for_width(max_bands: NonZeroUsize, width: u32) -> usize {
    max_bands.get().min(width as usize)
}

/// Splits `[0, width)` into contiguous, non-overlapping column ranges, one
/// per band. Every band is `width / bands` columns wide except the last,
/// which also takes the remainder.
pub fn partition_columns(width: u32, max_bands: NonZeroUsize) -> Vec<Range<u32>> {
    let bands = calculate_bands_for_width(max_bands, width) as u32;

    if bands == 0 {
        return Vec::new();
    }

    let band_width = width / bands;

    (0..bands)
        .map(|band| {
            let start = band * band_width;
            let end = if band == bands - 1 {
                width
            } else {
                start + band_width
            };

            start..end
        })
        .collect()
}

/// Worker count used when the caller has no preference.
#[must_use]
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
