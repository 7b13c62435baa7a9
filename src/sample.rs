//! Distinct-value sampling over an integer range
//!
//! Generates `k` pairwise-distinct values from `[0, n)` in uniformly random
//! order. A rejection loop would be correct but its cost blows up as `k`
//! approaches `n`; instead a partial Fisher-Yates shuffle over a materialized
//! `[0, n)` array does `k` swaps and stops, which is linear in `n` and makes
//! every size-`k` subset (and every ordering of it) equally likely.

use log::debug;
use rand::Rng;

use crate::error::{GraphGenError, Result};

/// Sample exactly `k` distinct values uniformly from `[0, n)`, in random order.
///
/// Each call draws an independent sequence from `rng`; there is no hidden
/// cursor state between calls.
pub fn sample<R: Rng>(rng: &mut R, n: usize, k: usize) -> Result<Vec<usize>> {
    if k > n {
        return Err(GraphGenError::InvalidArgument(format!(
            "cannot sample {k} distinct values from a range of {n}"
        )));
    }

    debug!("sampling {k} distinct values from [0, {n})");

    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n);
        pool.swap(i, j);
    }
    pool.truncate(k);
    Ok(pool)
}

/// Uniformly random permutation of `[0, n)`.
pub fn permutation<R: Rng>(rng: &mut R, n: usize) -> Vec<usize> {
    sample(rng, n, n).expect("k == n never exceeds n")
}
