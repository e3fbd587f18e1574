mod coordinate;
mod error;
mod parser;
mod sample;

pub use coordinate::{convert, parse_coordinate, Direction};
pub use error::{CoordinateError, RecordError};
pub use parser::{parse_line, parse_str, LogParser, ParseStats};
pub use sample::Sample;
