use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseComplexError {
    MissingSeparator { input: String },
    InvalidPart { part: String },
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { input } => {
                write!(f, "expected a complex number as 're,im', got '{}'", input)
            }
            Self::InvalidPart { part } => {
                write!(f, "'{}' is not a valid floating point number", part)
            }
        }
    }
}

impl Error for ParseComplexError {}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn square(self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag,
            imag: 2.0 * self.real * self.imag,
        }
    }

    /// Folds both parts onto their absolute values, negates the imaginary
    /// part, then squares.
    #[must_use]
    pub fn burning_ship(self) -> Self {
        Self {
            real: self.real.abs(),
            imag: -self.imag.abs(),
        }
        .square()
    }

    /// Squares the complex conjugate.
    #[must_use]
    pub fn tricorn(self) -> Self {
        self.conjugate().square()
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.imag)
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (real, imag) = s
            .split_once(',')
            .ok_or_else(|| ParseComplexError::MissingSeparator {
                input: s.to_string(),
            })?;

        let parse_part = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| ParseComplexError::InvalidPart {
                    part: part.trim().to_string(),
                })
        };

        Ok(Self {
            real: parse_part(real)?,
            imag: parse_part(imag)?,
        })
    }
}
