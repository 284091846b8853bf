//! Row-band partitioning of an image across workers.

use std::ops::Range;

use crate::error::{Error, Result};

/// Half-open row range `[start_row, end_row)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub start_row: usize,
    pub end_row: usize,
}

impl Band {
    #[inline]
    pub fn len(&self) -> usize {
        self.end_row - self.start_row
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_row == self.end_row
    }

    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.end_row
    }

    #[inline]
    pub fn contains(&self, y: usize) -> bool {
        self.rows().contains(&y)
    }
}

/// Split rows `[0, height)` into `num_workers` contiguous bands.
///
/// Every band gets `height / num_workers` rows and the last band also takes
/// the remainder. Fails when `num_workers` is zero or exceeds `height`, so no
/// band is ever empty.
pub fn partition(height: usize, num_workers: usize) -> Result<Vec<Band>> {
    if num_workers == 0 {
        return Err(Error::InvalidConfiguration(
            "num_workers must be at least 1".to_string(),
        ));
    }
    if num_workers > height {
        return Err(Error::InvalidConfiguration(format!(
            "num_workers ({num_workers}) must not exceed image height ({height})"
        )));
    }

    let rows_per_worker = height / num_workers;
    let bands = (0..num_workers)
        .map(|i| Band {
            start_row: i * rows_per_worker,
            end_row: if i == num_workers - 1 {
                height
            } else {
                (i + 1) * rows_per_worker
            },
        })
        .collect();

    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_cover_all_rows_without_gaps_or_overlap() {
        for height in 1..48 {
            for num_workers in 1..=height {
                let bands = partition(height, num_workers).unwrap();
                assert_eq!(bands.len(), num_workers);
                assert_eq!(bands[0].start_row, 0);
                assert_eq!(bands[num_workers - 1].end_row, height);

                for pair in bands.windows(2) {
                    assert_eq!(
                        pair[0].end_row, pair[1].start_row,
                        "gap or overlap for height={height} workers={num_workers}"
                    );
                }
                for band in &bands {
                    assert!(!band.is_empty());
                }

                let total: usize = bands.iter().map(Band::len).sum();
                assert_eq!(total, height);
            }
        }
    }

    #[test]
    fn test_last_band_absorbs_remainder() {
        let bands = partition(10, 4).unwrap();
        assert_eq!(
            bands,
            vec![
                Band { start_row: 0, end_row: 2 },
                Band { start_row: 2, end_row: 4 },
                Band { start_row: 4, end_row: 6 },
                Band { start_row: 6, end_row: 10 },
            ]
        );
    }

    #[test]
    fn test_one_row_per_worker() {
        let bands = partition(3, 3).unwrap();
        assert!(bands.iter().all(|b| b.len() == 1));
        assert!(bands[1].contains(1));
        assert!(!bands[1].contains(2));
    }

    #[test]
    fn test_zero_workers_is_invalid() {
        assert!(matches!(
            partition(10, 0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_more_workers_than_rows_is_invalid() {
        assert!(matches!(
            partition(3, 4),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            partition(0, 1),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
