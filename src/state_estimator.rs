pub mod kalman;
pub mod models;
