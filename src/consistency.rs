use crate::error::{EstimationError, Result};
use crate::models::to_state;
use itertools::izip;
use log::{debug, warn};
use nalgebra::{DVector, Vector4};

/// Root-mean-square error per state dimension between index-aligned
/// estimates and ground truth.
///
/// Fails with [`EstimationError::Validity`] if the sequences differ in length
/// or are empty, and with [`EstimationError::Shape`] if any vector is not a
/// 4-dimensional state.
pub fn calculate_rmse(
    estimations: &[DVector<f64>],
    ground_truth: &[DVector<f64>],
) -> Result<Vector4<f64>> {
    let n = estimations.len();
    if n != ground_truth.len() || n == 0 {
        warn!(
            "Invalid estimation or ground truth data: {} estimations, {} ground truth",
            n,
            ground_truth.len()
        );
        return Err(EstimationError::Validity {
            estimations: n,
            ground_truth: ground_truth.len(),
        });
    }

    let mut rmse = Vector4::zeros();
    for (x_est, x_gt) in izip!(estimations, ground_truth) {
        let residual = to_state(x_est)? - to_state(x_gt)?;
        rmse += residual.component_mul(&residual);
    }
    let rmse = (rmse / n as f64).map(f64::sqrt);

    debug!("rmse = {:?}", rmse.as_slice());
    Ok(rmse)
}

/// Same as [`calculate_rmse`], but any error yields `[0, 0, 0, 0]`.
pub fn calculate_rmse_or_zero(
    estimations: &[DVector<f64>],
    ground_truth: &[DVector<f64>],
) -> Vector4<f64> {
    calculate_rmse(estimations, ground_truth).unwrap_or_else(|_| Vector4::zeros())
}
