mod clock;
mod frame;

pub use clock::{format_clock, format_elapsed, parse_timestamp, DEFAULT_UTC_OFFSET};
pub use frame::{FrameState, Sequencer};
