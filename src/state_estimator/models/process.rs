use super::ProcessModel;
use crate::error::{KalmanError, Result};
use nalgebra::{DMatrix, DVector};

/// Linear process model with constant transition, control and noise matrices.
///
/// Owns every matrix it is built from; after construction nothing outside the
/// model can touch them, so the filter never has to defend against aliasing.
#[derive(Debug, Clone)]
pub struct LinearProcessModel {
    A: DMatrix<f64>,
    B: Option<DMatrix<f64>>,
    Q: DMatrix<f64>,
    x0: Option<DVector<f64>>,
    P0: Option<DMatrix<f64>>,
}

impl LinearProcessModel {
    /// Builds a model with no initial estimate; the filter will start from a
    /// zero state and a default covariance.
    pub fn new(A: DMatrix<f64>, B: Option<DMatrix<f64>>, Q: DMatrix<f64>) -> Result<Self> {
        Self::with_initial_estimate(A, B, Q, None, None)
    }

    pub fn with_initial_estimate(
        A: DMatrix<f64>,
        B: Option<DMatrix<f64>>,
        Q: DMatrix<f64>,
        x0: Option<DVector<f64>>,
        P0: Option<DMatrix<f64>>,
    ) -> Result<Self> {
        if !A.is_square() {
            return Err(KalmanError::DimensionMismatch {
                left: "transition matrix",
                left_dims: (A.nrows(), A.ncols()),
                right: "square transition matrix",
                right_dims: (A.nrows(), A.nrows()),
            });
        }
        let n = A.nrows();

        if Q.nrows() != n || Q.ncols() != n {
            return Err(KalmanError::DimensionMismatch {
                left: "transition matrix",
                left_dims: (n, n),
                right: "process noise covariance",
                right_dims: (Q.nrows(), Q.ncols()),
            });
        }
        if let Some(B) = &B {
            if B.nrows() != n {
                return Err(KalmanError::DimensionMismatch {
                    left: "transition matrix",
                    left_dims: (n, n),
                    right: "control matrix",
                    right_dims: (B.nrows(), B.ncols()),
                });
            }
        }
        if let Some(x0) = &x0 {
            if x0.len() != n {
                return Err(KalmanError::DimensionMismatch {
                    left: "transition matrix",
                    left_dims: (n, n),
                    right: "initial state estimate",
                    right_dims: (x0.len(), 1),
                });
            }
        }
        if let Some(P0) = &P0 {
            if P0.nrows() != n || P0.ncols() != n {
                return Err(KalmanError::DimensionMismatch {
                    left: "transition matrix",
                    left_dims: (n, n),
                    right: "initial error covariance",
                    right_dims: (P0.nrows(), P0.ncols()),
                });
            }
        }

        Ok(LinearProcessModel { A, B, Q, x0, P0 })
    }
}

impl ProcessModel for LinearProcessModel {
    fn transition_matrix(&self) -> &DMatrix<f64> {
        &self.A
    }

    fn control_matrix(&self) -> Option<&DMatrix<f64>> {
        self.B.as_ref()
    }

    fn process_noise(&self) -> &DMatrix<f64> {
        &self.Q
    }

    fn initial_state_estimate(&self) -> Option<&DVector<f64>> {
        self.x0.as_ref()
    }

    fn initial_error_covariance(&self) -> Option<&DMatrix<f64>> {
        self.P0.as_ref()
    }
}
