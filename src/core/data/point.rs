use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A screen-space pixel coordinate. Signed so that drag gestures ending
/// outside the raster can still be represented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    MissingSeparator { input: String },
    InvalidCoordinate { part: String },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { input } => {
                write!(f, "expected a pixel position as 'x,y', got '{}'", input)
            }
            Self::InvalidCoordinate { part } => {
                write!(f, "'{}' is not a valid pixel coordinate", part)
            }
        }
    }
}

impl Error for ParsePointError {}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::MissingSeparator {
                input: s.to_string(),
            })?;

        let parse_coordinate = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| ParsePointError::InvalidCoordinate {
                    part: part.trim().to_string(),
                })
        };

        Ok(Self {
            x: parse_coordinate(x)?,
            y: parse_coordinate(y)?,
        })
    }
}
