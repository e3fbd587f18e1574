use serde::Serialize;

use super::bounds::{PlanarExtent, TileRequest};
use super::colormap::{Palette, Rgb};
use super::error::TrajectoryError;
use super::projection::{to_web_mercator, PlanarPoint};
use crate::telemetry::Sample;

/// Normalized value given to every altitude when the range is a single value.
const DEGENERATE_NORMALIZED: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AltitudeRange {
    pub min: i32,
    pub max: i32,
}

impl AltitudeRange {
    pub fn of(samples: &[Sample]) -> Option<Self> {
        let min = samples.iter().map(|s| s.altitude).min()?;
        let max = samples.iter().map(|s| s.altitude).max()?;
        Some(Self { min, max })
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Map an altitude to `[0, 1]` over this range.
    pub fn normalize(&self, altitude: i32) -> f64 {
        if self.is_degenerate() {
            return DEGENERATE_NORMALIZED;
        }
        let span = i64::from(self.max) - i64::from(self.min);
        (i64::from(altitude) - i64::from(self.min)) as f64 / span as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: PlanarPoint,
    pub end: PlanarPoint,
}

/// Reprojected, styled telemetry track. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
    points: Vec<PlanarPoint>,
    altitude_range: AltitudeRange,
    extent: PlanarExtent,
    palette: Palette,
    segments: Vec<Segment>,
    colors: Vec<Rgb>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn points(&self) -> &[PlanarPoint] {
        &self.points
    }

    pub fn altitude_range(&self) -> AltitudeRange {
        self.altitude_range
    }

    pub fn extent(&self) -> PlanarExtent {
        self.extent
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// `segments()[i]` joins point `i` to point `i + 1`.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// One color per segment, taken from the altitude at the segment start.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn tile_request(&self, margin_m: f64, zoom: u8) -> TileRequest {
        TileRequest {
            bounds: self.extent.expand(margin_m),
            zoom,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryBuilder {
    palette: Palette,
}

impl TrajectoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn build(&self, samples: Vec<Sample>) -> Result<Trajectory, TrajectoryError> {
        let altitude_range = AltitudeRange::of(&samples).ok_or(TrajectoryError::Empty)?;

        let points: Vec<PlanarPoint> = samples
            .iter()
            .map(|s| to_web_mercator(s.longitude, s.latitude))
            .collect();
        let extent = PlanarExtent::of(&points).ok_or(TrajectoryError::Empty)?;

        let segments: Vec<Segment> = points
            .windows(2)
            .map(|w| Segment {
                start: w[0],
                end: w[1],
            })
            .collect();
        let colors: Vec<Rgb> = samples[..segments.len()]
            .iter()
            .map(|s| self.palette.color(altitude_range.normalize(s.altitude)))
            .collect();

        if altitude_range.is_degenerate() {
            log::debug!(
                "constant altitude {} m, using a single segment color",
                altitude_range.min
            );
        }
        log::info!(
            "built trajectory: {} samples, {} segments, altitude {}..{} m",
            samples.len(),
            segments.len(),
            altitude_range.min,
            altitude_range.max
        );

        Ok(Trajectory {
            samples,
            points,
            altitude_range,
            extent,
            palette: self.palette,
            segments,
            colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::parse_str;
    use pretty_assertions::assert_eq;

    const LOG: &str = "\
010124;120000;4530.500N;00230.750E;1000
010124;120001;4530.600N;00230.800E;1500
010124;120002;4530.700N;00230.850E;2000
010124;120003;4530.800N;00230.900E;1000
";

    fn sample(altitude: i32) -> Sample {
        Sample {
            longitude: 2.5,
            latitude: 45.5,
            altitude,
            timestamp: "010124 120000".into(),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = TrajectoryBuilder::new().build(Vec::new());
        assert!(matches!(result, Err(TrajectoryError::Empty)));
    }

    #[test]
    fn single_sample_has_no_segments() {
        let trajectory = TrajectoryBuilder::new().build(vec![sample(300)]).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert!(trajectory.segments().is_empty());
        assert!(trajectory.colors().is_empty());
    }

    #[test]
    fn points_follow_samples_in_order() {
        let samples = parse_str(LOG);
        let trajectory = TrajectoryBuilder::new().build(samples.clone()).unwrap();

        assert_eq!(trajectory.samples(), samples.as_slice());
        assert_eq!(trajectory.points().len(), samples.len());
        for (p, s) in trajectory.points().iter().zip(&samples) {
            assert_eq!(*p, to_web_mercator(s.longitude, s.latitude));
        }

        let segments = trajectory.segments();
        assert_eq!(segments.len(), 3);
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.start, trajectory.points()[i]);
            assert_eq!(seg.end, trajectory.points()[i + 1]);
        }
    }

    #[test]
    fn colors_follow_segment_start_altitude() {
        let trajectory = TrajectoryBuilder::new()
            .palette(Palette::Viridis)
            .build(parse_str(LOG))
            .unwrap();

        assert_eq!(
            trajectory.altitude_range(),
            AltitudeRange {
                min: 1000,
                max: 2000
            }
        );
        assert_eq!(
            trajectory.colors(),
            &[
                Palette::Viridis.color(0.0),
                Palette::Viridis.color(0.5),
                Palette::Viridis.color(1.0),
            ]
        );
    }

    #[test]
    fn constant_altitude_uses_middle_color() {
        let samples = vec![sample(800), sample(800), sample(800)];
        let trajectory = TrajectoryBuilder::new().build(samples).unwrap();

        let range = trajectory.altitude_range();
        assert!(range.is_degenerate());
        assert_eq!(range.normalize(800), 0.5);
        let expected = Palette::Plasma.color(0.5);
        assert!(trajectory.colors().iter().all(|c| *c == expected));
    }

    #[test]
    fn normalization_spans_full_i32_range() {
        let range = AltitudeRange {
            min: i32::MIN,
            max: i32::MAX,
        };
        assert_eq!(range.normalize(i32::MIN), 0.0);
        assert_eq!(range.normalize(i32::MAX), 1.0);
    }

    #[test]
    fn construction_is_deterministic() {
        let a = TrajectoryBuilder::new().build(parse_str(LOG)).unwrap();
        let b = TrajectoryBuilder::new().build(parse_str(LOG)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tile_request_adds_margin() {
        let trajectory = TrajectoryBuilder::new().build(parse_str(LOG)).unwrap();
        let extent = trajectory.extent();
        let request = trajectory.tile_request(3500.0, 10);

        assert_eq!(request.zoom, 10);
        assert_eq!(request.bounds.west, extent.min_x - 3500.0);
        assert_eq!(request.bounds.north, extent.max_y + 3500.0);
    }
}
