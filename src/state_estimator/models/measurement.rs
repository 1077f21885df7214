use super::MeasurementModel;
use crate::error::{KalmanError, Result};
use nalgebra::DMatrix;

/// Linear measurement model with constant observation and noise matrices.
#[derive(Debug, Clone)]
pub struct LinearMeasurementModel {
    H: DMatrix<f64>,
    R: DMatrix<f64>,
}

impl LinearMeasurementModel {
    pub fn new(H: DMatrix<f64>, R: DMatrix<f64>) -> Result<Self> {
        if R.nrows() != H.nrows() || !R.is_square() {
            return Err(KalmanError::DimensionMismatch {
                left: "observation matrix",
                left_dims: (H.nrows(), H.ncols()),
                right: "measurement noise covariance",
                right_dims: (R.nrows(), R.ncols()),
            });
        }
        Ok(LinearMeasurementModel { H, R })
    }
}

impl MeasurementModel for LinearMeasurementModel {
    fn observation_matrix(&self) -> &DMatrix<f64> {
        &self.H
    }

    fn measurement_noise(&self) -> &DMatrix<f64> {
        &self.R
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dmatrix;

    #[test]
    fn rejects_noise_covariance_of_wrong_size() {
        let H = dmatrix![1.0, 0.0; 0.0, 1.0];
        let R = dmatrix![0.1];
        assert!(matches!(
            LinearMeasurementModel::new(H, R),
            Err(KalmanError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn rejects_non_square_noise_covariance() {
        let H = dmatrix![1.0, 0.0];
        let R = dmatrix![0.1, 0.0];
        assert!(matches!(
            LinearMeasurementModel::new(H, R),
            Err(KalmanError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn accessors_expose_construction_inputs() {
        let H = dmatrix![1.0, 0.0];
        let R = dmatrix![0.1];
        let model = LinearMeasurementModel::new(H.clone(), R.clone()).unwrap();
        assert_eq!(model.observation_matrix(), &H);
        assert_eq!(model.measurement_noise(), &R);
    }
}
