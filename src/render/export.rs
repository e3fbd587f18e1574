use std::io::Write;

use serde::Serialize;

use super::RenderError;
use crate::playback::{format_elapsed, FrameState, Sequencer};
use crate::telemetry::Sample;
use crate::trajectory::{
    AltitudeRange, Palette, PlanarExtent, PlanarPoint, Rgb, Segment, TileRequest,
};

/// Per-frame labels for renderers that do not link against this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub index: usize,
    pub time: String,
    pub elapsed: Option<String>,
    pub altitude: i32,
    pub label: String,
    /// Number of leading segments drawn in this frame.
    pub visible_segments: usize,
}

impl From<&FrameState<'_>> for FrameRecord {
    fn from(frame: &FrameState<'_>) -> Self {
        FrameRecord {
            index: frame.index,
            time: frame.time_label(),
            elapsed: frame.elapsed.map(format_elapsed),
            altitude: frame.altitude,
            label: frame.label(),
            visible_segments: frame.segments.len(),
        }
    }
}

/// Full snapshot of a trajectory and its playback, serialized as JSON.
#[derive(Debug, Serialize)]
pub struct TrajectoryExport<'a> {
    pub palette: Palette,
    pub altitude_range: AltitudeRange,
    pub extent: PlanarExtent,
    pub tiles: TileRequest,
    pub samples: &'a [Sample],
    pub points: &'a [PlanarPoint],
    pub segments: &'a [Segment],
    pub colors: &'a [Rgb],
    pub frames: Vec<FrameRecord>,
}

impl<'a> TrajectoryExport<'a> {
    pub fn new(sequencer: &Sequencer<'a>, tiles: TileRequest) -> Self {
        let trajectory = sequencer.trajectory();
        Self {
            palette: trajectory.palette(),
            altitude_range: trajectory.altitude_range(),
            extent: trajectory.extent(),
            tiles,
            samples: trajectory.samples(),
            points: trajectory.points(),
            segments: trajectory.segments(),
            colors: trajectory.colors(),
            frames: sequencer.frames().map(|f| FrameRecord::from(&f)).collect(),
        }
    }

    pub fn write_json<W: Write>(&self, out: W) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(out, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::DEFAULT_UTC_OFFSET;
    use crate::telemetry::parse_str;
    use crate::trajectory::TrajectoryBuilder;
    use pretty_assertions::assert_eq;

    const LOG: &str = "\
010124;120000;4530.500N;00230.750E;1000
010124;120030;4530.600N;00230.800E;2000
";

    #[test]
    fn exports_arrays_and_frames() {
        let trajectory = TrajectoryBuilder::new().build(parse_str(LOG)).unwrap();
        let sequencer = Sequencer::new(&trajectory, DEFAULT_UTC_OFFSET);
        let export = TrajectoryExport::new(&sequencer, trajectory.tile_request(3500.0, 10));

        let mut buf = Vec::new();
        export.write_json(&mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["palette"], "plasma");
        assert_eq!(json["altitude_range"]["min"], 1000);
        assert_eq!(json["tiles"]["zoom"], 10);
        assert_eq!(json["samples"][1]["timestamp"], "010124 120030");
        assert_eq!(json["points"].as_array().unwrap().len(), 2);
        assert_eq!(json["segments"].as_array().unwrap().len(), 1);
        assert_eq!(json["colors"][0], "#0d0887");
        assert_eq!(json["frames"][0]["visible_segments"], 0);
        assert_eq!(json["frames"][1]["visible_segments"], 1);
        assert_eq!(json["frames"][1]["time"], "13 H 00 M 30 S");
        assert_eq!(json["frames"][1]["elapsed"], "00:00:30");
        assert_eq!(json["frames"][1]["label"], "Time: 13 H 00 M 30 S\nAlt: 2000 m");
    }
}
