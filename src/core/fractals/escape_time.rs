use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::formula::FormulaKind;

/// Squared modulus at or beyond which a sequence is considered escaped.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts the steps taken before `z` escapes, starting from `z0` and adding
/// `c` on every step. A result equal to `max_iterations` means the sequence
/// never escaped.
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, formula: FormulaKind, max_iterations: u32) -> u32 {
    let mut z = z0;
    let mut count = 0;

    while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && count < max_iterations {
        z = formula.step(z, c);
        count += 1;
    }

    count
}

/// What the escape-time loop is seeded with for each pixel.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum RenderMode {
    /// The pixel's point is both the start value and the constant.
    #[default]
    ParameterSpace,
    /// The pixel's point is the start value; the constant is fixed.
    Julia { constant: Complex },
}

impl RenderMode {
    #[must_use]
    pub fn from_julia_constant(constant: Option<Complex>) -> Self {
        match constant {
            Some(constant) => Self::Julia { constant },
            None => Self::ParameterSpace,
        }
    }

    #[inline]
    #[must_use]
    pub fn constant_for(&self, point: Complex) -> Complex {
        match self {
            Self::ParameterSpace => point,
            Self::Julia { constant } => *constant,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    formula: FormulaKind,
    mode: RenderMode,
    max_iterations: u32,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        formula: FormulaKind,
        mode: RenderMode,
        max_iterations: u32,
    ) -> Self {
        Self {
            viewport,
            formula,
            mode,
            max_iterations,
        }
    }

    #[must_use]
    pub fn iterations_at(&self, point: Complex) -> u32 {
        escape_time(
            point,
            self.mode.constant_for(point),
            self.formula,
            self.max_iterations,
        )
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        self.iterations_at(self.viewport.pixel_to_complex(pixel))
    }
}
