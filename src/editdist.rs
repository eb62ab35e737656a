//! Parallel string edit distance. Bundled utility with no relation to the
//! puzzle solver.
//!
//! Computes Levenshtein distance (unit insert/delete/substitute costs) by
//! walking the anti-diagonals of the DP matrix: every cell on a diagonal
//! depends only on the previous two diagonals, so a whole diagonal can be
//! filled in parallel. Only the last two diagonals are retained.

use rayon::prelude::*;

/// Diagonals shorter than this are filled sequentially; fan-out overhead
/// dwarfs the work below it.
const PARALLEL_CUTOFF: usize = 512;

pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // prev holds diagonal d-1, prev2 diagonal d-2. Diagonal d covers cells
    // (i, d - i) of the (m+1)x(n+1) matrix for i in lo..=hi; a diagonal's
    // slice index for cell (i, _) is i minus that diagonal's lo.
    let mut prev2: Vec<usize> = Vec::new();
    let mut prev: Vec<usize> = vec![0];
    for d in 1..=m + n {
        let lo = d.saturating_sub(n);
        let hi = d.min(m);
        let prev_lo = (d - 1).saturating_sub(n);
        let prev2_lo = d.saturating_sub(2).saturating_sub(n);

        let cell = |i: usize| -> usize {
            let j = d - i;
            if i == 0 {
                return j;
            }
            if j == 0 {
                return i;
            }
            let delete = prev[i - 1 - prev_lo] + 1;
            let insert = prev[i - prev_lo] + 1;
            let substitute =
                prev2[i - 1 - prev2_lo] + usize::from(a[i - 1] != b[j - 1]);
            delete.min(insert).min(substitute)
        };

        let current: Vec<usize> = if hi - lo + 1 >= PARALLEL_CUTOFF {
            (lo..=hi).into_par_iter().map(cell).collect()
        } else {
            (lo..=hi).map(cell).collect()
        };
        prev2 = std::mem::replace(&mut prev, current);
    }

    // The last diagonal is the single cell (m, n).
    prev[0]
}
