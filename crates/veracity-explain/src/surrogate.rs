//! Weighted ridge surrogate fit
//!
//! Fits the interpretable linear model that locally approximates the
//! classifier: target-class probability regressed on sparse n-gram counts,
//! sample-weighted by similarity to the original document, with a small L2
//! penalty for numerical stability.
//!
//! The regularized normal equations are solved matrix-free with conjugate
//! gradient, so the Gram matrix is never materialized even at full
//! vocabulary width. Degenerate systems (constant target, empty rows, zero
//! total weight) yield exactly-zero coefficients instead of an error.

use crate::vocab::SparseRow;
use ndarray::Array1;
use tracing::debug;

/// Right-hand sides below this magnitude are rounding noise left over from
/// weighted centering (a constant target cancels exactly in math, not in
/// floats) and collapse to the zero model.
const RHS_NOISE_FLOOR: f64 = 1e-10;

/// Options for the ridge fit.
#[derive(Debug, Clone)]
pub struct RidgeOptions {
    /// L2 penalty on the (centered) coefficients. The intercept is
    /// recovered from weighted means and never penalized.
    pub l2: f64,

    /// Conjugate-gradient iteration cap.
    pub max_iter: usize,

    /// Relative residual tolerance for convergence.
    pub tol: f64,
}

impl Default for RidgeOptions {
    fn default() -> Self {
        Self {
            l2: 1e-3,
            max_iter: 256,
            tol: 1e-10,
        }
    }
}

/// The fitted linear surrogate, scoped to one explanation request.
#[derive(Debug, Clone, PartialEq)]
pub struct SurrogateModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl SurrogateModel {
    /// Model from explicit parts.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// All-zero model over `num_features` features.
    pub fn zeros(num_features: usize) -> Self {
        Self::new(vec![0.0; num_features], 0.0)
    }

    /// Per-feature coefficients in vocabulary order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Intercept term.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Predicted target-class score for a sparse count row.
    pub fn predict(&self, row: &SparseRow) -> f64 {
        self.intercept
            + row
                .iter()
                .map(|(index, count)| self.coefficients.get(*index).copied().unwrap_or(0.0) * count)
                .sum::<f64>()
    }
}

/// Fit a weighted ridge regression of `targets` on sparse `rows`.
///
/// `rows[i]` holds the count row of neighbor `i`, `targets[i]` its
/// target-class probability, `weights[i]` its similarity weight. Indices in
/// the rows must be < `num_features`.
pub fn fit_weighted_ridge(
    rows: &[SparseRow],
    targets: &[f64],
    weights: &[f64],
    num_features: usize,
    options: &RidgeOptions,
) -> SurrogateModel {
    let n = rows.len();
    if n == 0 || num_features == 0 || targets.len() != n || weights.len() != n {
        return SurrogateModel::zeros(num_features);
    }

    let total_weight: f64 = weights.iter().sum();
    if total_weight <= 0.0 || !total_weight.is_finite() {
        return SurrogateModel::zeros(num_features);
    }

    // Weighted means of the target and of each feature column.
    let target_mean = targets
        .iter()
        .zip(weights)
        .map(|(y, w)| y * w)
        .sum::<f64>()
        / total_weight;
    let mut column_means = Array1::<f64>::zeros(num_features);
    for (row, &w) in rows.iter().zip(weights) {
        for &(index, count) in row {
            column_means[index] += w * count;
        }
    }
    column_means /= total_weight;

    // Right-hand side of the centered normal equations:
    //   b = X_cᵀ W y_c = Σ wᵢ (yᵢ - ȳ) xᵢ - (Σ wᵢ (yᵢ - ȳ)) μ
    let mut rhs = Array1::<f64>::zeros(num_features);
    let mut centered_weight_sum = 0.0;
    for ((row, &y), &w) in rows.iter().zip(targets).zip(weights) {
        let wy = w * (y - target_mean);
        centered_weight_sum += wy;
        for &(index, count) in row {
            rhs[index] += wy * count;
        }
    }
    rhs.scaled_add(-centered_weight_sum, &column_means);

    let rhs_scale = rhs.iter().fold(0.0f64, |scale, b| scale.max(b.abs()));
    if rhs_scale < RHS_NOISE_FLOOR {
        return SurrogateModel::new(vec![0.0; num_features], target_mean);
    }

    // (X_cᵀ W X_c + λI) v, matrix-free over the sparse rows.
    let matvec = |v: &Array1<f64>| -> Array1<f64> {
        let mean_dot = column_means.dot(v);
        let mut result = v * options.l2;
        let mut projected_weight_sum = 0.0;
        for (row, &w) in rows.iter().zip(weights) {
            let mut projected = -mean_dot;
            for &(index, count) in row {
                projected += count * v[index];
            }
            let weighted = w * projected;
            projected_weight_sum += weighted;
            for &(index, count) in row {
                result[index] += weighted * count;
            }
        }
        result.scaled_add(-projected_weight_sum, &column_means);
        result
    };

    let coefficients = conjugate_gradient(&matvec, &rhs, options);
    if !coefficients.iter().all(|c| c.is_finite()) {
        debug!("surrogate solve produced non-finite coefficients, returning zero model");
        return SurrogateModel::zeros(num_features);
    }

    let intercept = target_mean - column_means.dot(&coefficients);
    SurrogateModel {
        coefficients: coefficients.to_vec(),
        intercept,
    }
}

/// Standard linear conjugate gradient for a symmetric positive definite
/// operator. Returns the exact zero vector when the right-hand side is
/// zero (the degenerate-fit case).
fn conjugate_gradient<F>(matvec: &F, rhs: &Array1<f64>, options: &RidgeOptions) -> Array1<f64>
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    let mut x = Array1::<f64>::zeros(rhs.len());
    let mut residual = rhs.clone();
    let mut direction = residual.clone();
    let mut residual_norm_sq = residual.dot(&residual);

    let initial_norm = residual_norm_sq.sqrt();
    if initial_norm == 0.0 {
        return x;
    }
    let threshold = options.tol * initial_norm.max(1.0);

    for _ in 0..options.max_iter {
        let a_direction = matvec(&direction);
        let curvature = direction.dot(&a_direction);
        if curvature <= 0.0 || !curvature.is_finite() {
            break;
        }

        let step = residual_norm_sq / curvature;
        x.scaled_add(step, &direction);
        residual.scaled_add(-step, &a_direction);

        let next_norm_sq = residual.dot(&residual);
        if next_norm_sq.sqrt() <= threshold {
            break;
        }

        let ratio = next_norm_sq / residual_norm_sq;
        direction = &residual + &(&direction * ratio);
        residual_norm_sq = next_norm_sq;
    }

    x
}
