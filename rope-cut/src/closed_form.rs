use crate::{error::CutError, rope_length, Cut, CutResult};

/// Arithmetic answer without a table.
///
/// Rules:
/// 1. A segment of 1 never helps, except when the rope is too short to avoid it (n = 2, 3)
///
/// 2. [4, _] and [_, 2, 2] are equivalent, we report the 2s
///
/// 3. Anything of 5 or more is worth cutting again, 3 beats 2 wherever both fit
///
/// So: as many 3s as possible, then fix up the remainder.
pub fn max_product(n: i64) -> CutResult<Cut> {
    let length = rope_length(n)?;
    match length {
        2 => {
            return Ok(Cut {
                product: 1,
                segments: vec![1, 1],
            })
        }
        3 => {
            return Ok(Cut {
                product: 2,
                segments: vec![2, 1],
            })
        }
        _ => {}
    }

    let overflow = CutError::ProductOverflow { length };
    let threes = length / 3;
    let (n_threes, tail): (usize, Vec<u64>) = match length % 3 {
        0 => (threes, vec![]),
        // [_, 3, 1] is no good -> [_, 2, 2]
        1 => (threes - 1, vec![2, 2]),
        2 => (threes, vec![2]),
        _ => unreachable!(),
    };

    let tail_product: u64 = tail.iter().product();
    let product = u32::try_from(n_threes)
        .ok()
        .and_then(|exp| 3u64.checked_pow(exp))
        .and_then(|threes| threes.checked_mul(tail_product))
        .ok_or(overflow)?;

    let mut segments = vec![3; n_threes];
    segments.extend(tail);
    Ok(Cut { product, segments })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_ropes() {
        let expected: [(i64, u64, &[u64]); 8] = [
            (2, 1, &[1, 1]),
            (3, 2, &[2, 1]),
            (4, 4, &[2, 2]),
            (5, 6, &[3, 2]),
            (6, 9, &[3, 3]),
            (7, 12, &[3, 2, 2]),
            (8, 18, &[3, 3, 2]),
            (10, 36, &[3, 3, 2, 2]),
        ];
        for (n, product, segments) in expected {
            assert_eq!(
                max_product(n),
                Ok(Cut {
                    product,
                    segments: segments.to_vec()
                }),
                "n={n}"
            );
        }
    }

    #[test]
    fn overflows_like_the_table() {
        assert!(max_product(121).is_ok());
        assert_eq!(
            max_product(122),
            Err(CutError::ProductOverflow { length: 122 })
        );
        assert_eq!(
            max_product(i64::MAX),
            Err(CutError::ProductOverflow {
                length: i64::MAX as usize
            })
        );
    }

    #[test]
    fn rejects_short_ropes() {
        assert_eq!(max_product(1), Err(CutError::InvalidLength { length: 1 }));
    }
}
