use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_REAL_LOWER: f64 = -2.0;
pub const DEFAULT_REAL_UPPER: f64 = 2.0;
pub const DEFAULT_IMAG_LOWER: f64 = -1.6;
pub const DEFAULT_IMAG_UPPER: f64 = 1.6;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSpan { real_span: f64, imag_span: f64 },
    InvalidDimensions { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpan {
                real_span,
                imag_span,
            } => {
                write!(
                    f,
                    "viewport spans must be positive and finite: real {} imaginary {}",
                    real_span, imag_span
                )
            }
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "viewport pixel size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The four edges of the visible region of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBounds {
    pub real_lower: f64,
    pub real_upper: f64,
    pub imag_lower: f64,
    pub imag_upper: f64,
}

impl ViewBounds {
    /// Moves every edge `t` of the way from `self` towards `target`.
    #[must_use]
    pub fn lerp(&self, target: &Self, t: f64) -> Self {
        let step = |from: f64, to: f64| from + (to - from) * t;

        Self {
            real_lower: step(self.real_lower, target.real_lower),
            real_upper: step(self.real_upper, target.real_upper),
            imag_lower: step(self.imag_lower, target.imag_lower),
            imag_upper: step(self.imag_upper, target.imag_upper),
        }
    }
}

/// Maps a `width` x `height` pixel raster onto a rectangle of the complex
/// plane described by its centre and its real/imaginary spans.
///
/// The pixel designated as the screen centre is `(width / 2 + 1, height / 2 + 1)`.
/// This one-pixel offset is inherited from earlier renderers of these images
/// and is kept so output matches them; both mapping directions use it.
/// Imaginary values grow upwards, so `y` is flipped.
///
/// A `Viewport` is never mutated: pans and zooms build a new one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    real_span: f64,
    imag_span: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(
        center: Complex,
        real_span: f64,
        imag_span: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidDimensions { width, height });
        }

        // written as negations so NaN spans are rejected too
        if !(real_span > 0.0 && real_span.is_finite())
            || !(imag_span > 0.0 && imag_span.is_finite())
        {
            return Err(ViewportError::InvalidSpan {
                real_span,
                imag_span,
            });
        }

        Ok(Self {
            center,
            real_span,
            imag_span,
            width,
            height,
        })
    }

    pub fn from_bounds(bounds: ViewBounds, width: u32, height: u32) -> Result<Self, ViewportError> {
        let center = Complex {
            real: (bounds.real_upper + bounds.real_lower) / 2.0,
            imag: (bounds.imag_upper + bounds.imag_lower) / 2.0,
        };

        Self::new(
            center,
            bounds.real_upper - bounds.real_lower,
            bounds.imag_upper - bounds.imag_lower,
            width,
            height,
        )
    }

    /// Returns a viewport over the given bounds with the same pixel size.
    pub fn with_bounds(
        &self,
        real_lower: f64,
        real_upper: f64,
        imag_lower: f64,
        imag_upper: f64,
    ) -> Result<Self, ViewportError> {
        Self::from_bounds(
            ViewBounds {
                real_lower,
                real_upper,
                imag_lower,
                imag_upper,
            },
            self.width,
            self.height,
        )
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn real_span(&self) -> f64 {
        self.real_span
    }

    #[must_use]
    pub fn imag_span(&self) -> f64 {
        self.imag_span
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.real_span / self.width as f64
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.imag_span / self.height as f64
    }

    #[must_use]
    pub fn center_pixel(&self) -> Point {
        Point {
            x: (self.width / 2 + 1) as i32,
            y: (self.height / 2 + 1) as i32,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        ViewBounds {
            real_lower: self.center.real - self.real_span / 2.0,
            real_upper: self.center.real + self.real_span / 2.0,
            imag_lower: self.center.imag - self.imag_span / 2.0,
            imag_upper: self.center.imag + self.imag_span / 2.0,
        }
    }

    /// Accepts any point, including ones outside the raster, so drag
    /// gestures that leave the window still map onto the plane.
    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        let center_pixel = self.center_pixel();
        let dx = (pixel.x as i64 - center_pixel.x as i64) as f64;
        let dy = (center_pixel.y as i64 - pixel.y as i64) as f64;

        Complex {
            real: dx * self.scale_x() + self.center.real,
            imag: dy * self.scale_y() + self.center.imag,
        }
    }

    /// Inverse of [`Viewport::pixel_to_complex`], rounded to the nearest pixel.
    #[must_use]
    pub fn complex_to_pixel(&self, point: Complex) -> Point {
        let center_pixel = self.center_pixel();
        let dx = ((point.real - self.center.real) / self.scale_x()).round();
        let dy = ((point.imag - self.center.imag) / self.scale_y()).round();

        Point {
            x: (center_pixel.x as f64 + dx) as i32,
            y: (center_pixel.y as f64 - dy) as i32,
        }
    }
}

/// The reset view: real axis [-2, 2], imaginary axis [-1.6, 1.6].
pub fn default_viewport(width: u32, height: u32) -> Result<Viewport, ViewportError> {
    Viewport::from_bounds(
        ViewBounds {
            real_lower: DEFAULT_REAL_LOWER,
            real_upper: DEFAULT_REAL_UPPER,
            imag_lower: DEFAULT_IMAG_LOWER,
            imag_upper: DEFAULT_IMAG_UPPER,
        },
        width,
        height,
    )
}
