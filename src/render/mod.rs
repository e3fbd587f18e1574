mod export;
mod text;

use std::time::Duration;

use thiserror::Error;

use crate::playback::{FrameState, Sequencer};

pub use export::{FrameRecord, TrajectoryExport};
pub use text::TextRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Drawing surface fed one frame at a time.
pub trait Renderer {
    fn render(&mut self, frame: &FrameState<'_>) -> Result<(), RenderError>;
}

/// Feed every frame to `renderer`, pausing `interval` between frames.
///
/// With `repeat` the sequence restarts from the first frame until rendering fails.
pub fn play<R: Renderer>(
    sequencer: &Sequencer<'_>,
    renderer: &mut R,
    interval: Duration,
    repeat: bool,
) -> Result<(), RenderError> {
    loop {
        for frame in sequencer.frames() {
            renderer.render(&frame)?;
            if !interval.is_zero() {
                std::thread::sleep(interval);
            }
        }
        if !repeat {
            return Ok(());
        }
        log::debug!("restarting playback");
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
010124;120000;4530.500N;00230.750E;1200
010124;120001;4530.600N;00230.800E;1250
010124;120002;4530.700N;00230.850E;1300
";

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(usize, usize)>,
        fail_after: Option<usize>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, frame: &FrameState<'_>) -> Result<(), RenderError> {
            if self.fail_after == Some(self.seen.len()) {
                return Err(std::io::Error::other("surface closed").into());
            }
            self.seen.push((frame.index, frame.segments.len()));
            Ok(())
        }
    }

    #[test]
    fn plays_frames_in_order_once() {
        let trajectory = TrajectoryBuilder::new().build(parse_str(LOG)).unwrap();
        let sequencer = Sequencer::new(&trajectory, DEFAULT_UTC_OFFSET);
        let mut recorder = Recorder::default();

        play(&sequencer, &mut recorder, Duration::ZERO, false).unwrap();
        assert_eq!(recorder.seen, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn repeat_runs_until_renderer_fails() {
        let trajectory = TrajectoryBuilder::new().build(parse_str(LOG)).unwrap();
        let sequencer = Sequencer::new(&trajectory, DEFAULT_UTC_OFFSET);
        let mut recorder = Recorder {
            fail_after: Some(7),
            ..Recorder::default()
        };

        let result = play(&sequencer, &mut recorder, Duration::ZERO, true);
        assert!(matches!(result, Err(RenderError::Io(_))));
        assert_eq!(recorder.seen.len(), 7);
        assert_eq!(recorder.seen[3], (0, 0));
        assert_eq!(recorder.seen[6], (0, 0));
    }
}
