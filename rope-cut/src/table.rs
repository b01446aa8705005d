use tracing::{debug, trace};

use crate::{error::CutError, rope_length, Cut, CutResult};

/// longest rope whose maximum product (3^39 * 4) still fits into a u64
pub const MAX_TABLE_LENGTH: usize = 121;

/// Bottom-up table where `best[i]` is the maximum product of a rope of length `i`
/// that has been cut at least once.
///
/// Indices 0..=2 stay at 0; length 2 is answered before the table is consulted.
/// For the first cut `j` the remainder `i - j` is either kept whole or cut further,
/// so both `(i - j) * j` and `best[i - j] * j` have to be compared. Dropping the
/// whole-remainder term gives wrong answers from `i = 3` onwards.
struct BestProductTable {
    best: Vec<u64>,
    /// first cut length that produced `best[i]`
    first_cut: Vec<usize>,
    /// whether `best[i]` keeps the remainder after `first_cut[i]` uncut
    remainder_whole: Vec<bool>,
}

impl BestProductTable {
    fn build(length: usize) -> CutResult<Self> {
        // best[] never decreases with the length, so past the limit the answer
        // overflows and there is no point in allocating the table
        if length > MAX_TABLE_LENGTH {
            return Err(CutError::ProductOverflow { length });
        }
        let mut best = vec![0u64; length + 1];
        let mut first_cut = vec![0usize; length + 1];
        let mut remainder_whole = vec![false; length + 1];

        for i in 3..=length {
            for j in 1..i {
                let rest = i - j;
                // every candidate is <= best[i] <= best[length], so overflow here
                // means the final answer overflows too
                let cut_further = best[rest]
                    .checked_mul(j as u64)
                    .ok_or(CutError::ProductOverflow { length })?;
                let keep_whole = (rest as u64)
                    .checked_mul(j as u64)
                    .ok_or(CutError::ProductOverflow { length })?;

                let (candidate, whole) = if keep_whole >= cut_further {
                    (keep_whole, true)
                } else {
                    (cut_further, false)
                };
                if candidate > best[i] {
                    best[i] = candidate;
                    first_cut[i] = j;
                    remainder_whole[i] = whole;
                }
            }
            trace!(i, best = best[i], first_cut = first_cut[i], "filled row");
        }
        debug!(length, product = best[length], "best product table complete");

        Ok(Self {
            best,
            first_cut,
            remainder_whole,
        })
    }

    fn segments(&self, length: usize) -> Vec<u64> {
        let mut segments = Vec::new();
        let mut i = length;
        loop {
            let j = self.first_cut[i];
            segments.push(j as u64);
            if self.remainder_whole[i] {
                segments.push((i - j) as u64);
                break;
            }
            // a remainder of 2 or less always wins as a whole piece, so i stays >= 3
            i -= j;
        }
        segments.sort_unstable_by(|a, b| b.cmp(a));
        segments
    }
}

/// Maximum product of segment lengths after cutting a rope of length `n`
/// into at least two integer pieces.
///
/// ```
/// assert_eq!(rope_cut::max_product_after_cutting(8), Ok(18));
/// ```
pub fn max_product_after_cutting(n: i64) -> CutResult<u64> {
    let length = rope_length(n)?;
    if length == 2 {
        return Ok(1);
    }
    let table = BestProductTable::build(length)?;
    Ok(table.best[length])
}

/// Like [`max_product_after_cutting`] but also returns one set of segments
/// reaching the product, longest first.
pub fn best_cut(n: i64) -> CutResult<Cut> {
    let length = rope_length(n)?;
    if length == 2 {
        return Ok(Cut {
            product: 1,
            segments: vec![1, 1],
        });
    }
    let table = BestProductTable::build(length)?;
    Ok(Cut {
        product: table.best[length],
        segments: table.segments(length),
    })
}
