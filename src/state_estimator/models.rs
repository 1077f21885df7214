use nalgebra::{DMatrix, DVector};

pub mod measurement;
pub mod process;

/// How the hidden state evolves between time steps.
pub trait ProcessModel {
    /// State transition matrix A (n x n).
    fn transition_matrix(&self) -> &DMatrix<f64>;

    /// Control matrix B (n x c), absent when the process takes no control input.
    fn control_matrix(&self) -> Option<&DMatrix<f64>>;

    /// Process noise covariance Q (n x n).
    fn process_noise(&self) -> &DMatrix<f64>;

    fn initial_state_estimate(&self) -> Option<&DVector<f64>>;

    fn initial_error_covariance(&self) -> Option<&DMatrix<f64>>;
}

/// How the hidden state maps onto observations.
pub trait MeasurementModel {
    /// Observation matrix H (m x n).
    fn observation_matrix(&self) -> &DMatrix<f64>;

    /// Measurement noise covariance R (m x m).
    fn measurement_noise(&self) -> &DMatrix<f64>;
}
