#![allow(non_snake_case)]
pub mod consistency;
pub mod error;
pub mod models;

pub use consistency::{calculate_rmse, calculate_rmse_or_zero};
pub use error::{EstimationError, Result};
pub use models::measurement::{calculate_jacobian, calculate_jacobian_or_zero};
