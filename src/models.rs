pub mod measurement;

use crate::error::{EstimationError, Result};
use log::warn;
use nalgebra::{DVector, Vector4};

/// Dimension of the CV state `[px, py, vx, vy]`.
pub const STATE_DIM: usize = 4;

pub trait MeasurementModel {
    type State;
    type Measurement;
    type Jacobian;
    type Covariance;

    fn h(&self, x: &Self::State) -> Result<Self::Measurement>;
    fn H(&self, x: &Self::State) -> Result<Self::Jacobian>;
    fn R(&self) -> Self::Covariance;
}

/// Reads a dynamically sized state into the fixed CV state.
pub(crate) fn to_state(x: &DVector<f64>) -> Result<Vector4<f64>> {
    if x.len() != STATE_DIM {
        warn!(
            "State has dimension {}, expected {}",
            x.len(),
            STATE_DIM
        );
        return Err(EstimationError::Shape {
            expected: STATE_DIM,
            found: x.len(),
        });
    }
    Ok(x.fixed_rows::<STATE_DIM>(0).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_state() {
        let x = DVector::from_row_slice(&[1., 2., 3., 4.]);
        assert_eq!(to_state(&x).unwrap(), Vector4::new(1., 2., 3., 4.));

        let x = DVector::from_row_slice(&[1., 2., 3., 4., 0.1]);
        assert_eq!(
            to_state(&x),
            Err(EstimationError::Shape {
                expected: 4,
                found: 5
            })
        );
    }
}
