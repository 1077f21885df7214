//! Discrete-time linear Kalman filter.
//!
//! The filter owns its process and measurement models together with the
//! current estimate `(x, P)`, and advances them through the classical
//! predict/correct recursion. Dimensions are validated once at construction;
//! per-call inputs (control vector, measurement) are validated on every call.

use super::models::{MeasurementModel, ProcessModel};
use crate::error::{KalmanError, Result};
use nalgebra::{DMatrix, DVector};

/// Diagonal value of the error covariance used when the process model supplies
/// no initial covariance. Large, so the first measurements dominate the prior.
pub const DEFAULT_INITIAL_VARIANCE: f64 = 1e6;

pub struct KalmanFilter<D, M>
where
    D: ProcessModel,
    M: MeasurementModel,
{
    procmod: D,
    measmod: M,
    x: DVector<f64>,
    P: DMatrix<f64>,
}

impl<D, M> KalmanFilter<D, M>
where
    D: ProcessModel,
    M: MeasurementModel,
{
    /// Builds a filter from a process and a measurement model.
    ///
    /// Checks the transition/observation compatibility first, then the
    /// transition/control compatibility. The state starts from the model's
    /// initial estimate, or from a zero state with a
    /// [`DEFAULT_INITIAL_VARIANCE`]-scaled identity covariance.
    pub fn new(procmod: D, measmod: M) -> Result<Self> {
        let n = procmod.transition_matrix().nrows();
        let H = measmod.observation_matrix();
        if H.ncols() != n {
            return Err(KalmanError::DimensionMismatch {
                left: "transition matrix",
                left_dims: (n, n),
                right: "observation matrix",
                right_dims: (H.nrows(), H.ncols()),
            });
        }
        let m = H.nrows();
        if let Some(B) = procmod.control_matrix() {
            if B.nrows() != n {
                return Err(KalmanError::DimensionMismatch {
                    left: "transition matrix",
                    left_dims: (n, n),
                    right: "control matrix",
                    right_dims: (B.nrows(), B.ncols()),
                });
            }
        }

        let x = procmod
            .initial_state_estimate()
            .cloned()
            .unwrap_or_else(|| DVector::zeros(n));
        let P = procmod
            .initial_error_covariance()
            .cloned()
            .unwrap_or_else(|| DMatrix::identity(n, n) * DEFAULT_INITIAL_VARIANCE);

        log::debug!("kalman filter initialized: state dim {}, measurement dim {}", n, m);

        Ok(KalmanFilter {
            procmod,
            measmod,
            x,
            P,
        })
    }

    /// Advances the estimate one time step without a control input.
    ///
    /// x' = A*x, P' = A*P*A^T + Q. Cannot fail: every dimension involved was
    /// validated at construction. Calling it repeatedly without intervening
    /// corrections is valid and simply advances several steps.
    pub fn predict(&mut self) {
        let A = self.procmod.transition_matrix();
        let Q = self.procmod.process_noise();

        let x = A * &self.x;
        let P = A * &self.P * A.transpose() + Q;

        self.x = x;
        self.P = P;
    }

    /// Advances the estimate one time step under the control input `u`.
    ///
    /// x' = A*x + B*u, P' = A*P*A^T + Q. A control input is rejected with
    /// [`KalmanError::DimensionMismatch`] when the model carries no control
    /// matrix, or when `u` does not match the control matrix's column count.
    pub fn predict_with_control(&mut self, u: &DVector<f64>) -> Result<()> {
        let B = self
            .procmod
            .control_matrix()
            .ok_or(KalmanError::DimensionMismatch {
                left: "control input",
                left_dims: (u.len(), 1),
                right: "control matrix",
                right_dims: (0, 0),
            })?;
        if u.len() != B.ncols() {
            return Err(KalmanError::DimensionMismatch {
                left: "control input",
                left_dims: (u.len(), 1),
                right: "control matrix",
                right_dims: (B.nrows(), B.ncols()),
            });
        }
        let A = self.procmod.transition_matrix();
        let Q = self.procmod.process_noise();

        let x = A * &self.x + B * u;
        let P = A * &self.P * A.transpose() + Q;

        self.x = x;
        self.P = P;
        Ok(())
    }

    /// Folds the measurement `z` into the current estimate.
    ///
    /// S = H*P*H^T + R, K = P*H^T*S^-1, then x += K*(z - H*x) and
    /// P = (I - K*H)*P. `(x, P)` are replaced only when every step succeeds;
    /// on [`KalmanError::SingularMatrix`] the pre-call values survive so the
    /// caller may skip the update or retry with a regularized noise model.
    pub fn correct(&mut self, z: &DVector<f64>) -> Result<()> {
        let H = self.measmod.observation_matrix();
        let m = H.nrows();
        if z.len() != m {
            return Err(KalmanError::DimensionMismatch {
                left: "measurement vector",
                left_dims: (z.len(), 1),
                right: "observation matrix",
                right_dims: (m, H.ncols()),
            });
        }

        let (v, S) = self.innovation(z);
        let S_inv = S.try_inverse().ok_or(KalmanError::SingularMatrix)?;

        let H = self.measmod.observation_matrix();
        let K = &self.P * H.transpose() * S_inv;

        let n = self.x.len();
        let I = DMatrix::identity(n, n);
        let P = (I - &K * H) * &self.P;
        let x = &self.x + K * v;

        self.x = x;
        self.P = P;
        Ok(())
    }

    /// Predict-then-correct convenience for the common one-measurement-per-step
    /// loop. The prediction always commits; the correction is all-or-nothing.
    pub fn step(&mut self, z: &DVector<f64>) -> Result<()> {
        self.predict();
        self.correct(z)
    }

    /// Innovation mean and covariance for the measurement `z`.
    fn innovation(&self, z: &DVector<f64>) -> (DVector<f64>, DMatrix<f64>) {
        let v = self.innovation_mean(z);
        let S = self.innovation_covariance();
        (v, S)
    }

    fn innovation_mean(&self, z: &DVector<f64>) -> DVector<f64> {
        let H = self.measmod.observation_matrix();
        z - H * &self.x
    }

    fn innovation_covariance(&self) -> DMatrix<f64> {
        let H = self.measmod.observation_matrix();
        let R = self.measmod.measurement_noise();
        H * &self.P * H.transpose() + R
    }

    /// Current state estimate x.
    pub fn state_estimate(&self) -> &DVector<f64> {
        &self.x
    }

    /// Current error covariance P.
    pub fn error_covariance(&self) -> &DMatrix<f64> {
        &self.P
    }

    pub fn state_dimension(&self) -> usize {
        self.x.len()
    }

    pub fn measurement_dimension(&self) -> usize {
        self.measmod.observation_matrix().nrows()
    }
}
