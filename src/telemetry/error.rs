use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("unknown direction '{0}'")]
    UnknownDirection(char),
    #[error("coordinate too short: {0:?}")]
    Truncated(String),
    #[error("invalid degrees: {0:?}")]
    InvalidDegrees(String),
    #[error("invalid minutes: {0}")]
    InvalidMinutes(#[from] ParseFloatError),
    #[error("minutes not finite: {0}")]
    NonFiniteMinutes(f64),
}

/// Reason a log line was not turned into a sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("expected at least 5 fields, got {0}")]
    TooFewFields(usize),
    #[error("missing value placeholder")]
    Placeholder,
    #[error("empty {0} field")]
    EmptyField(&'static str),
    #[error("invalid altitude: {0}")]
    Altitude(#[from] ParseIntError),
    #[error("invalid latitude: {0}")]
    Latitude(CoordinateError),
    #[error("invalid longitude: {0}")]
    Longitude(CoordinateError),
}

impl RecordError {
    /// Short stable name used for rejection statistics.
    pub fn kind(&self) -> &'static str {
        match self {
            RecordError::TooFewFields(_) => "too_few_fields",
            RecordError::Placeholder => "placeholder",
            RecordError::EmptyField(_) => "empty_field",
            RecordError::Altitude(_) => "altitude",
            RecordError::Latitude(_) => "latitude",
            RecordError::Longitude(_) => "longitude",
        }
    }
}
