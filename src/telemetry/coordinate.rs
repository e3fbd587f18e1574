use strum_macros::Display;

use super::error::CoordinateError;

const MINUTES_PER_DEGREE: f64 = 60.0;

/// Hemisphere letter trailing a DDM coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    N,
    S,
    E,
    W,
}

impl TryFrom<char> for Direction {
    type Error = CoordinateError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Direction::N),
            'S' => Ok(Direction::S),
            'E' => Ok(Direction::E),
            'W' => Ok(Direction::W),
            other => Err(CoordinateError::UnknownDirection(other)),
        }
    }
}

impl Direction {
    pub fn is_latitude(self) -> bool {
        matches!(self, Direction::N | Direction::S)
    }

    /// `DD` for latitudes, `DDD` for longitudes.
    fn degree_width(self) -> usize {
        if self.is_latitude() {
            2
        } else {
            3
        }
    }

    fn sign(self) -> f64 {
        match self {
            Direction::N | Direction::E => 1.0,
            Direction::S | Direction::W => -1.0,
        }
    }
}

/// Convert a degrees + decimal minutes value (`"4530.500"`) to signed decimal degrees.
pub fn convert(coord: &str, direction: char) -> Result<f64, CoordinateError> {
    let direction = Direction::try_from(direction)?;
    let width = direction.degree_width();

    if coord.len() <= width || !coord.is_char_boundary(width) {
        return Err(CoordinateError::Truncated(coord.to_string()));
    }
    let (degrees, minutes) = coord.split_at(width);

    if !degrees.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordinateError::InvalidDegrees(degrees.to_string()));
    }
    let degrees: f64 = degrees
        .parse::<u16>()
        .map_err(|_| CoordinateError::InvalidDegrees(degrees.to_string()))?
        .into();

    let minutes: f64 = minutes.parse()?;
    if !minutes.is_finite() {
        return Err(CoordinateError::NonFiniteMinutes(minutes));
    }

    Ok(direction.sign() * (degrees + minutes / MINUTES_PER_DEGREE))
}

/// Convert a whole log field such as `"4530.500N"`, taking the last character as direction.
pub fn parse_coordinate(field: &str) -> Result<f64, CoordinateError> {
    let direction = field
        .chars()
        .next_back()
        .ok_or_else(|| CoordinateError::Truncated(field.to_string()))?;
    let value = &field[..field.len() - direction.len_utf8()];
    convert(value, direction)
}
