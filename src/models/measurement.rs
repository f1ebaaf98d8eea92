use super::{to_state, MeasurementModel};
use crate::error::{EstimationError, Result};
use log::{trace, warn};
use nalgebra::{DVector, Matrix2, Matrix2x4, Matrix3, Matrix3x4, Vector2, Vector3, Vector4};
use std::f64::consts::{PI, TAU};

/// Below this squared range the radar model is not differentiable in practice.
pub const MIN_RANGE_SQUARED: f64 = 1e-4;

/// Wraps a bearing into [-pi, pi].
pub fn normalize_angle(phi: f64) -> f64 {
    let wrapped = (phi + PI).rem_euclid(TAU) - PI;
    // rem_euclid maps an exact +pi to -pi
    if wrapped == -PI && phi > 0. {
        PI
    } else {
        wrapped
    }
}

fn range_terms(x: &Vector4<f64>) -> Result<(f64, f64, f64)> {
    let (px, py) = (x[0], x[1]);
    let c1 = px * px + py * py;
    let c2 = c1.sqrt();
    let c3 = c1 * c2;

    if c1.abs() < MIN_RANGE_SQUARED {
        warn!("Division by zero: squared range {} at state {:?}", c1, x.as_slice());
        return Err(EstimationError::DegenerateInput { range_squared: c1 });
    }
    Ok((c1, c2, c3))
}

/// Jacobian of the radar measurement `[rho, phi, rho_dot]` with respect to
/// the state `[px, py, vx, vy]`.
pub fn calculate_jacobian(x_state: &DVector<f64>) -> Result<Matrix3x4<f64>> {
    let x = to_state(x_state)?;
    let (px, py, vx, vy) = (x[0], x[1], x[2], x[3]);
    let (c1, c2, c3) = range_terms(&x)?;

    #[rustfmt::skip]
    let Hj = Matrix3x4::new(
        px / c2,                         py / c2,                         0.,      0.,
        -py / c1,                        px / c1,                         0.,      0.,
        py * (vx * py - vy * px) / c3,   px * (px * vy - py * vx) / c3,   px / c2, py / c2,
    );

    trace!("Hj = {}", Hj);
    Ok(Hj)
}

/// Same as [`calculate_jacobian`], but any error yields a zero matrix.
pub fn calculate_jacobian_or_zero(x_state: &DVector<f64>) -> Matrix3x4<f64> {
    calculate_jacobian(x_state).unwrap_or_else(|_| Matrix3x4::zeros())
}

/// Polar radar measurement: range, bearing and range rate.
#[derive(Debug, Clone, Copy)]
pub struct Radar {
    sigma_rho: f64,
    sigma_phi: f64,
    sigma_rho_dot: f64,
}

impl Radar {
    pub fn new(sigma_rho: f64, sigma_phi: f64, sigma_rho_dot: f64) -> Self {
        Radar {
            sigma_rho,
            sigma_phi,
            sigma_rho_dot,
        }
    }
}

impl Default for Radar {
    fn default() -> Self {
        Radar::new(0.3, 0.03, 0.3)
    }
}

impl MeasurementModel for Radar {
    type State = DVector<f64>;
    type Measurement = Vector3<f64>;
    type Jacobian = Matrix3x4<f64>;
    type Covariance = Matrix3<f64>;

    fn h(&self, x: &Self::State) -> Result<Self::Measurement> {
        let x = to_state(x)?;
        let (px, py, vx, vy) = (x[0], x[1], x[2], x[3]);
        let (_, rho, _) = range_terms(&x)?;

        let phi = py.atan2(px);
        let rho_dot = (px * vx + py * vy) / rho;
        Ok(Vector3::new(rho, phi, rho_dot))
    }

    fn H(&self, x: &Self::State) -> Result<Self::Jacobian> {
        calculate_jacobian(x)
    }

    fn R(&self) -> Self::Covariance {
        Matrix3::from_diagonal(&Vector3::new(
            self.sigma_rho.powi(2),
            self.sigma_phi.powi(2),
            self.sigma_rho_dot.powi(2),
        ))
    }
}

/// Cartesian position measurement.
#[derive(Debug, Clone, Copy)]
pub struct Lidar {
    sigma_p: f64,
}

impl Lidar {
    pub fn new(sigma_p: f64) -> Self {
        Lidar { sigma_p }
    }
}

impl Default for Lidar {
    fn default() -> Self {
        Lidar::new(0.15)
    }
}

impl MeasurementModel for Lidar {
    type State = DVector<f64>;
    type Measurement = Vector2<f64>;
    type Jacobian = Matrix2x4<f64>;
    type Covariance = Matrix2<f64>;

    /// Assumes p is the first state
    fn h(&self, x: &Self::State) -> Result<Self::Measurement> {
        let x = to_state(x)?;
        Ok(x.fixed_rows::<2>(0).into_owned())
    }

    fn H(&self, x: &Self::State) -> Result<Self::Jacobian> {
        to_state(x)?;
        Ok(Matrix2x4::identity())
    }

    fn R(&self) -> Self::Covariance {
        Matrix2::identity() * self.sigma_p.powi(2)
    }
}
