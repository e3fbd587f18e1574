//! Telemetry log ingestion and altitude-colored trajectory playback.
//!
//! The pipeline runs strictly forward: [`telemetry`] turns raw log lines into
//! samples, [`trajectory`] reprojects and styles them, [`playback`] exposes the
//! state of each animation frame and [`render`] hands frames to a drawing
//! surface.

pub mod config;
pub mod playback;
pub mod render;
pub mod telemetry;
pub mod trajectory;
