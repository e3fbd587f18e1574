use serde::Serialize;

/// One accepted telemetry record, in decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: i32,
    /// Raw `DDMMYY HHMMSS` as found in the log.
    pub timestamp: String,
}
