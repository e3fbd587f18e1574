use chrono::{Duration, NaiveDateTime};

use super::clock::{format_clock, parse_timestamp};
use crate::trajectory::{PlanarPoint, Rgb, Segment, Trajectory};

/// Everything the renderer needs to draw frame `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState<'a> {
    pub index: usize,
    pub position: PlanarPoint,
    /// Log time shifted by the configured offset.
    pub local_time: Option<NaiveDateTime>,
    /// Time since the first sample.
    pub elapsed: Option<Duration>,
    pub altitude: i32,
    /// Segments `[0, index)` of the trajectory.
    pub segments: &'a [Segment],
    pub colors: &'a [Rgb],
}

impl FrameState<'_> {
    pub fn time_label(&self) -> String {
        format_clock(self.local_time.as_ref())
    }

    pub fn label(&self) -> String {
        format!("Time: {}\nAlt: {} m", self.time_label(), self.altitude)
    }
}

/// Per-frame view over a trajectory, one frame per sample.
pub struct Sequencer<'a> {
    trajectory: &'a Trajectory,
    utc_offset: Duration,
    times: Vec<Option<NaiveDateTime>>,
}

impl<'a> Sequencer<'a> {
    pub fn new(trajectory: &'a Trajectory, utc_offset: Duration) -> Self {
        let times: Vec<Option<NaiveDateTime>> = trajectory
            .samples()
            .iter()
            .map(|s| parse_timestamp(&s.timestamp))
            .collect();

        let unparsed = times.iter().filter(|t| t.is_none()).count();
        if unparsed > 0 {
            log::warn!(
                "{} of {} timestamps could not be parsed, their time label will be blank",
                unparsed,
                times.len()
            );
        }

        Self {
            trajectory,
            utc_offset,
            times,
        }
    }

    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    pub fn trajectory(&self) -> &'a Trajectory {
        self.trajectory
    }

    /// State of frame `index`.
    ///
    /// # Panics
    ///
    /// If `index` is not a valid sample index.
    pub fn frame(&self, index: usize) -> FrameState<'a> {
        assert!(
            index < self.len(),
            "frame index {} out of range for a trajectory of {} samples",
            index,
            self.len()
        );

        let trajectory = self.trajectory;
        let sample = &trajectory.samples()[index];
        let elapsed = match (self.times[index], self.times[0]) {
            (Some(t), Some(t0)) => Some(t - t0),
            _ => None,
        };

        FrameState {
            index,
            position: trajectory.points()[index],
            local_time: self.times[index].and_then(|t| t.checked_add_signed(self.utc_offset)),
            elapsed,
            altitude: sample.altitude,
            segments: &trajectory.segments()[..index],
            colors: &trajectory.colors()[..index],
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = FrameState<'a>> + '_ {
        (0..self.len()).map(move |i| self.frame(i))
    }
}
