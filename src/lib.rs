#![allow(non_snake_case)]
pub mod error;
pub mod state_estimator;

pub use error::{KalmanError, Result};
pub use state_estimator::kalman::KalmanFilter;
pub use state_estimator::models::measurement::LinearMeasurementModel;
pub use state_estimator::models::process::LinearProcessModel;
pub use state_estimator::models::{MeasurementModel, ProcessModel};
