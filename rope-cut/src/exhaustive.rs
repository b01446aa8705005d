use std::fmt::Display;

use im::{vector, Vector};
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{error::CutError, rope_length, CutResult};

/// partition counts explode past this (p(60) is already close to a million)
pub const EXHAUSTIVE_LIMIT: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Parti {
    /// non-increasing
    values: Vector<u64>,
    remaining: u64,
}

impl Display for Parti {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parti {{ values: {:?}, remaining: {} }}",
            self.values, self.remaining
        )
    }
}

impl Parti {
    fn first(target_n: u64, value: u64) -> Self {
        debug_assert!(target_n >= value);
        Self {
            values: vector![value],
            remaining: target_n - value,
        }
    }

    fn prod(&self) -> u64 {
        self.values.iter().product()
    }

    fn largest_next(&self) -> u64 {
        let last = self.values.last().copied().unwrap_or(self.remaining);
        last.min(self.remaining)
    }

    fn take(&self, value: u64) -> Self {
        debug_assert!(value != 0 && value <= self.largest_next());
        let mut values = self.values.clone();
        values.push_back(value);
        Self {
            values,
            remaining: self.remaining - value,
        }
    }
}

/// Every way to cut a rope of length `n` at least once that reaches the maximal product.
///
/// Partitions come fewest segments first, ties broken by larger leading segments.
pub fn max_products(n: i64) -> CutResult<(Vec<Vec<u64>>, u64)> {
    let length = rope_length(n)?;
    if length > EXHAUSTIVE_LIMIT {
        return Err(CutError::EnumerationTooLarge {
            length,
            limit: EXHAUSTIVE_LIMIT,
        });
    }
    let n = length as u64;

    // first segment shorter than n so there is always a second one
    let mut open: Vec<Parti> = (1..n).rev().map(|first| Parti::first(n, first)).collect();
    let mut done = Vec::new();
    while let Some(parti) = open.pop() {
        if parti.remaining == 0 {
            trace!(%parti, "complete partition");
            done.push(parti);
            continue;
        }
        for next in 1..=parti.largest_next() {
            open.push(parti.take(next));
        }
    }
    debug!(length, partitions = done.len(), "enumerated partitions");

    let mut max_partis = done.iter().max_set_by_key(|parti| parti.prod());
    max_partis.sort_unstable_by(|left, right| {
        left.values
            .len()
            .cmp(&right.values.len())
            .then_with(|| right.values.cmp(&left.values))
    });

    let product = max_partis.first().map(|p| p.prod()).unwrap_or(0);
    Ok((
        max_partis
            .iter()
            .map(|parti| parti.values.iter().copied().collect_vec())
            .collect_vec(),
        product,
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parti_display() {
        let parti = Parti::first(5, 3).take(1);
        assert_eq!(parti.to_string(), "Parti { values: [3, 1], remaining: 1 }");
        assert_eq!(parti.largest_next(), 1);
    }

    #[test]
    fn ties_are_all_reported() {
        assert_eq!(max_products(4), Ok((vec![vec![2, 2]], 4)));
        assert_eq!(max_products(7), Ok((vec![vec![4, 3], vec![3, 2, 2]], 12)));
        assert_eq!(
            max_products(10),
            Ok((vec![vec![4, 3, 3], vec![3, 3, 2, 2]], 36))
        );
    }

    #[test]
    fn must_cut_at_least_once() {
        assert_eq!(max_products(2), Ok((vec![vec![1, 1]], 1)));
        assert_eq!(max_products(3), Ok((vec![vec![2, 1]], 2)));
    }

    #[test]
    #[ignore = "enumerates about a million partitions"]
    fn limit_itself_is_accepted() {
        let (partis, product) = max_products(EXHAUSTIVE_LIMIT as i64).unwrap();
        assert_eq!(product, 3u64.pow(20));
        assert_eq!(partis, vec![vec![3; 20]]);
    }

    #[test]
    fn refuses_huge_ropes() {
        assert_eq!(
            max_products(61),
            Err(CutError::EnumerationTooLarge {
                length: 61,
                limit: EXHAUSTIVE_LIMIT
            })
        );
    }
}
