mod bounds;
mod builder;
mod colormap;
mod error;
mod projection;

pub use bounds::{PlanarExtent, TileBounds, TileRequest};
pub use builder::{AltitudeRange, Segment, Trajectory, TrajectoryBuilder};
pub use colormap::{Palette, Rgb};
pub use error::TrajectoryError;
pub use projection::{to_web_mercator, PlanarPoint};
