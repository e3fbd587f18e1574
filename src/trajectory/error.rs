use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("no usable telemetry: the log contains no valid sample")]
    Empty,
}
