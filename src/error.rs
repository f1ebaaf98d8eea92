use thiserror::Error;

/// Failures of the accuracy metric and the measurement linearization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    /// Sequences of different length, or an empty sequence.
    #[error("Invalid estimation or ground truth data: {estimations} estimations, {ground_truth} ground truth")]
    Validity {
        estimations: usize,
        ground_truth: usize,
    },

    #[error("Wrong state dimension: expected {expected}, found {found}")]
    Shape { expected: usize, found: usize },

    /// Range too close to zero to divide by.
    #[error("Division by zero: squared range {range_squared} is below threshold")]
    DegenerateInput { range_squared: f64 },
}

pub type Result<T> = std::result::Result<T, EstimationError>;
