//! Linear algebra routines for the unit-root regression.
//!
//! Provides a Householder QR decomposition and a QR-based least-squares
//! solver. The matrices involved are small (at most a handful of predictors),
//! so everything is hand-rolled over plain slices; numerical-rank detection
//! uses a tolerance scaled to the matrix Frobenius norm.

use crate::errors::{MarkovAnalysisError, MarkovResult};

/// Diagonal entries below this magnitude mark a singular system.
pub(crate) const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Validates that a matrix is rectangular and non-empty, returning (rows, cols).
fn ensure_rectangular_matrix(a: &[Vec<f64>]) -> MarkovResult<(usize, usize)> {
    if a.is_empty() || a[0].is_empty() {
        return Err(MarkovAnalysisError::NumericalError {
            reason: "empty matrix".to_string(),
            operation: Some("householder_qr".to_string()),
        });
    }
    let cols = a[0].len();
    if a.iter().any(|row| row.len() != cols) {
        return Err(MarkovAnalysisError::NumericalError {
            reason: "ragged matrix rows".to_string(),
            operation: Some("householder_qr".to_string()),
        });
    }
    Ok((a.len(), cols))
}

/// Householder QR decomposition with adaptive rank-deficiency detection.
///
/// Each column carries its own rank tolerance, scaled to that column's
/// original norm. A shared tolerance derived from the matrix norm would
/// misclassify a small-but-independent column (such as an intercept next to
/// an exploding level column) as rank-deficient.
///
/// Returns `(Q, R)` with `A = Q * R`, `Q` orthogonal `m×m`, `R` upper
/// trapezoidal `m×n`.
pub fn householder_qr(a: &[Vec<f64>]) -> MarkovResult<(Vec<Vec<f64>>, Vec<Vec<f64>>)> {
    let (m, n) = ensure_rectangular_matrix(a)?;

    for row in a {
        for &val in row {
            if !val.is_finite() {
                return Err(MarkovAnalysisError::NumericalError {
                    reason: format!("non-finite matrix entry: {}", val),
                    operation: Some("householder_qr".to_string()),
                });
            }
        }
    }

    let mut col_norms = vec![0.0; n];
    for (j, norm) in col_norms.iter_mut().enumerate() {
        *norm = a.iter().map(|row| row[j] * row[j]).sum::<f64>().sqrt();
    }

    let mut r = a.to_vec();
    let mut q = vec![vec![0.0; m]; m];
    for (i, row) in q.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    // The last row needs no reflector.
    let steps = n.min(m.saturating_sub(1));
    for k in 0..steps {
        let rank_tol = 10.0 * f64::EPSILON * (m.max(n) as f64) * col_norms[k];

        let mut v = vec![0.0; m - k];
        for i in k..m {
            v[i - k] = r[i][k];
        }

        let norm_x = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm_x <= rank_tol {
            // Rank-deficient column; zero it and move on.
            for row in r.iter_mut().take(m).skip(k) {
                row[k] = 0.0;
            }
            continue;
        }

        let sign = if v[0] >= 0.0 { 1.0 } else { -1.0 };
        v[0] += sign * norm_x;

        let norm_v = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm_v <= rank_tol {
            continue;
        }
        for x in &mut v {
            *x /= norm_v;
        }

        // Apply the reflector to R from the left.
        for j in k..n {
            let mut dot = 0.0;
            for i in k..m {
                dot += v[i - k] * r[i][j];
            }
            for i in k..m {
                r[i][j] -= 2.0 * v[i - k] * dot;
            }
        }

        // Accumulate Q = Q * H_k (reflectors are symmetric).
        for row in q.iter_mut().take(m) {
            let mut dot = 0.0;
            for i in k..m {
                dot += row[i] * v[i - k];
            }
            for i in k..m {
                row[i] -= 2.0 * dot * v[i - k];
            }
        }
    }

    Ok((q, r))
}

/// Ordinary least squares for multiple predictors via QR decomposition.
///
/// # Arguments
/// * `x` - Predictors in predictor-major format: `x[predictor][observation]`,
///   including the intercept column if one is wanted
/// * `y` - Response vector
///
/// # Returns
/// * `Ok(coefficients)` - One coefficient per predictor, in input order
/// * `Err(MarkovAnalysisError::NumericalError)` - Singular or ill-formed system
pub fn multiple_regression(x: &[Vec<f64>], y: &[f64]) -> MarkovResult<Vec<f64>> {
    let k = x.len();
    let n = y.len();

    if k == 0 || n < k {
        return Err(MarkovAnalysisError::InsufficientData {
            required: k.max(1),
            actual: n,
        });
    }
    for (i, col) in x.iter().enumerate() {
        if col.len() != n {
            return Err(MarkovAnalysisError::NumericalError {
                reason: format!("predictor column {} has inconsistent length", i),
                operation: Some("multiple_regression".to_string()),
            });
        }
    }

    // Transpose to the n×k design matrix QR expects.
    let mut design = vec![vec![0.0; k]; n];
    for (i, row) in design.iter_mut().enumerate() {
        for (j, col) in x.iter().enumerate() {
            row[j] = col[i];
        }
    }

    let (q, r) = householder_qr(&design)?;

    // qty = Qᵀ y, only the leading k entries are needed.
    let mut qty = vec![0.0; k];
    for (i, entry) in qty.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (j, &yj) in y.iter().enumerate() {
            sum += q[j][i] * yj;
        }
        *entry = sum;
    }

    // Back-substitution on the leading k×k block of R.
    let mut coeffs = vec![0.0; k];
    for i in (0..k).rev() {
        let mut sum = qty[i];
        for j in (i + 1)..k {
            sum -= r[i][j] * coeffs[j];
        }
        if r[i][i].abs() < SINGULAR_TOLERANCE {
            return Err(MarkovAnalysisError::NumericalError {
                reason: format!("singular design matrix (pivot {} vanished)", i),
                operation: Some("multiple_regression".to_string()),
            });
        }
        coeffs[i] = sum / r[i][i];
    }

    Ok(coeffs)
}

/// Compute residuals from a fitted regression.
///
/// # Arguments
/// * `x` - Predictors in predictor-major format (`k` predictors × `n` observations)
/// * `y` - Response vector (`n` observations)
/// * `coeffs` - Regression coefficients (`k` values)
pub fn compute_residuals(x: &[Vec<f64>], y: &[f64], coeffs: &[f64]) -> Vec<f64> {
    debug_assert_eq!(coeffs.len(), x.len());
    debug_assert!(x.iter().all(|col| col.len() == y.len()));

    let mut residuals = Vec::with_capacity(y.len());
    for (t, &yt) in y.iter().enumerate() {
        let mut fitted = 0.0;
        for (i, coeff) in coeffs.iter().enumerate() {
            fitted += coeff * x[i][t];
        }
        residuals.push(yt - fitted);
    }
    residuals
}
