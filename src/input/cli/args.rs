use clap::Parser;

use crate::controllers::cli::controller::ZoomSelection;
use crate::core::actions::render::{DEFAULT_MAX_ITERATIONS, RenderRequest};
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::{
    DEFAULT_IMAG_LOWER, DEFAULT_IMAG_UPPER, DEFAULT_REAL_LOWER, DEFAULT_REAL_UPPER, ViewBounds,
    Viewport, ViewportError, default_viewport,
};
use crate::core::fractals::formula::FormulaKind;
use crate::core::util::partition_columns::available_workers;

/// Render escape-time fractals to the terminal.
#[derive(Debug, Parser)]
#[command(name = "escape-fractals", version)]
pub struct CliConfig {
    /// Raster width in pixels
    #[arg(long, default_value_t = 80)]
    pub width: u32,
    /// Raster height in pixels (two pixel rows per terminal line)
    #[arg(long, default_value_t = 48)]
    pub height: u32,
    /// mandelbrot, burning-ship, tricorn or multibrot3..multibrot6
    #[arg(short, long, default_value = "mandelbrot")]
    pub formula: FormulaKind,
    /// Iteration bound; points reaching it are drawn black
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
    /// Render threads [default: available parallelism]
    #[arg(short, long)]
    pub workers: Option<usize>,
    /// Render the Julia set for this constant, given as re,im
    #[arg(long, allow_hyphen_values = true)]
    pub julia: Option<Complex>,
    /// Pick the Julia constant under this pixel of the configured view, given as x,y
    #[arg(long, allow_hyphen_values = true, conflicts_with = "julia")]
    pub julia_at: Option<Point>,
    #[arg(long, default_value_t = DEFAULT_REAL_LOWER, allow_negative_numbers = true)]
    pub real_min: f64,
    #[arg(long, default_value_t = DEFAULT_REAL_UPPER, allow_negative_numbers = true)]
    pub real_max: f64,
    #[arg(long, default_value_t = DEFAULT_IMAG_LOWER, allow_negative_numbers = true)]
    pub imag_min: f64,
    #[arg(long, default_value_t = DEFAULT_IMAG_UPPER, allow_negative_numbers = true)]
    pub imag_max: f64,
    /// Zoom selection corner, given as x,y
    #[arg(long, allow_hyphen_values = true, requires = "zoom_to")]
    pub zoom_from: Option<Point>,
    /// Opposite zoom selection corner, given as x,y
    #[arg(long, allow_hyphen_values = true, requires = "zoom_from")]
    pub zoom_to: Option<Point>,
    /// Draw a halfway frame before the zoomed one
    #[arg(long, requires = "zoom_from")]
    pub animate: bool,
}

impl CliConfig {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::from_bounds(
            ViewBounds {
                real_lower: self.real_min,
                real_upper: self.real_max,
                imag_lower: self.imag_min,
                imag_upper: self.imag_max,
            },
            self.width,
            self.height,
        )
    }

    /// Builds the request described by the flags. A Julia constant picked
    /// with `--julia-at` is rendered over the reset view.
    pub fn render_request(&self) -> Result<RenderRequest, ViewportError> {
        let configured = self.viewport()?;

        let (viewport, julia_constant) = match self.julia_at {
            Some(pixel) => (
                default_viewport(self.width, self.height)?,
                Some(configured.pixel_to_complex(pixel)),
            ),
            None => (configured, self.julia),
        };

        Ok(RenderRequest::new(viewport, self.formula)
            .with_max_iterations(self.max_iterations)
            .with_julia_constant(julia_constant)
            .with_worker_count(self.workers.unwrap_or_else(|| available_workers().get())))
    }

    #[must_use]
    pub fn zoom_selection(&self) -> Option<ZoomSelection> {
        Some(ZoomSelection {
            from: self.zoom_from?,
            to: self.zoom_to?,
            animated: self.animate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("escape-fractals").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        CliConfig::command().debug_assert();
    }

    #[test]
    fn test_defaults_describe_the_reset_view() {
        let config = parse(&[]);
        let request = config.render_request().unwrap();

        assert_eq!(request.viewport, default_viewport(80, 48).unwrap());
        assert_eq!(request.formula, FormulaKind::Mandelbrot);
        assert_eq!(request.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(request.julia_constant, None);
        assert_eq!(request.worker_count, available_workers().get());
        assert_eq!(config.zoom_selection(), None);
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&[
            "--width", "120", "--height", "60", "--formula", "burning-ship", "-m", "250", "-w", "3",
            "--julia", "-0.8,0.156",
        ]);
        let request = config.render_request().unwrap();

        assert_eq!(request.viewport.width(), 120);
        assert_eq!(request.viewport.height(), 60);
        assert_eq!(request.formula, FormulaKind::BurningShip);
        assert_eq!(request.max_iterations, 250);
        assert_eq!(request.worker_count, 3);
        assert_eq!(request.julia_constant, Some(Complex::new(-0.8, 0.156)));
    }

    #[test]
    fn test_negative_bounds() {
        let config = parse(&[
            "--real-min", "-1.5", "--real-max", "-0.5", "--imag-min", "-0.25", "--imag-max", "0.75",
        ]);
        let bounds = config.viewport().unwrap().bounds();

        assert!((bounds.real_lower + 1.5).abs() < 1e-12);
        assert!((bounds.real_upper + 0.5).abs() < 1e-12);
        assert!((bounds.imag_lower + 0.25).abs() < 1e-12);
        assert!((bounds.imag_upper - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_bounds_are_an_invalid_viewport() {
        let config = parse(&["--real-min", "1", "--real-max", "-1"]);

        assert!(matches!(
            config.render_request(),
            Err(ViewportError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn test_julia_at_picks_constant_from_configured_view() {
        let config = parse(&["--width", "100", "--height", "100", "--julia-at", "10,20"]);
        let request = config.render_request().unwrap();

        assert_eq!(
            request.julia_constant,
            Some(config.viewport().unwrap().pixel_to_complex(Point { x: 10, y: 20 }))
        );
        assert_eq!(request.viewport, default_viewport(100, 100).unwrap());
    }

    #[test]
    fn test_julia_and_julia_at_conflict() {
        let result = CliConfig::try_parse_from([
            "escape-fractals", "--julia", "0,1", "--julia-at", "1,1",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_zoom_selection() {
        let config = parse(&["--zoom-from", "60,-5", "--zoom-to", "10,20", "--animate"]);

        assert_eq!(
            config.zoom_selection(),
            Some(ZoomSelection {
                from: Point { x: 60, y: -5 },
                to: Point { x: 10, y: 20 },
                animated: true,
            })
        );
    }

    #[test]
    fn test_zoom_corners_require_each_other() {
        assert!(CliConfig::try_parse_from(["escape-fractals", "--zoom-from", "1,1"]).is_err());
        assert!(CliConfig::try_parse_from(["escape-fractals", "--animate"]).is_err());
    }

    #[test]
    fn test_unknown_formula_is_rejected() {
        assert!(CliConfig::try_parse_from(["escape-fractals", "--formula", "newton"]).is_err());
    }
}
