use thiserror::Error;

/// Errors reported by model construction and the filter recursion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KalmanError {
    #[error("dimension mismatch: {left} is {}x{} but {right} is {}x{}", .left_dims.0, .left_dims.1, .right_dims.0, .right_dims.1)]
    DimensionMismatch {
        left: &'static str,
        left_dims: (usize, usize),
        right: &'static str,
        right_dims: (usize, usize),
    },

    #[error("innovation covariance is singular; measurement cannot be applied")]
    SingularMatrix,
}

pub type Result<T> = std::result::Result<T, KalmanError>;
