use nalgebra::{DMatrix, DVector, Vector2};
use tracing::warn;

use crate::utils::{Result, VortexError};

/// Pivots smaller than this fraction of the largest pivot (scaled by the
/// system size) mark the matrix as numerically rank deficient.
const RELATIVE_PIVOT_TOLERANCE: f64 = 1.0e-12;

/// Solve the dense system `a * x = b` by LU decomposition with partial pivoting.
///
/// A pivot below `RELATIVE_PIVOT_TOLERANCE * n * max|U_ii|`, or a solution
/// containing non-finite values, is reported as `SingularSystem` rather than
/// handed back to the caller.
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(VortexError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(VortexError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let lu = a.clone().lu();
    let pivots = lu.u().diagonal().map(|p| p.abs());
    let max_pivot = pivots.max();
    let min_pivot = pivots.min();
    if n > 0 && min_pivot <= RELATIVE_PIVOT_TOLERANCE * n as f64 * max_pivot {
        warn!(size = n, min_pivot, max_pivot, "rank-deficient linear system");
        return Err(VortexError::SingularSystem { size: n });
    }

    let solution = lu
        .solve(b)
        .ok_or(VortexError::SingularSystem { size: n })?;

    if solution.iter().all(|x| x.is_finite()) {
        Ok(solution)
    } else {
        warn!(size = n, "linear solve produced non-finite strengths");
        Err(VortexError::SingularSystem { size: n })
    }
}

/// Unit vector along `v`, or `None` for a zero-length input.
#[inline]
pub fn unit(v: &Vector2<f64>) -> Option<Vector2<f64>> {
    let norm = v.norm();
    if norm > 0.0 {
        Some(v / norm)
    } else {
        None
    }
}

/// Rotate a vector by -90 degrees: (x, y) -> (y, -x).
#[inline]
pub fn perp_cw(v: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(v.y, -v.x)
}
