use std::num::NonZeroUsize;
use std::time::Instant;

use log::debug;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::rasterize::rasterize_rayon::rasterize_rayon_cancelable;
use crate::core::actions::rasterize::rasterize_scoped_threads::rasterize_scoped_threads;
use crate::core::actions::render_error::RenderError;
use crate::core::data::complex::Complex;
use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::colour_maps::orange_cycle::OrangeCycle;
use crate::core::fractals::escape_time::{EscapeTimeAlgorithm, RenderMode};
use crate::core::fractals::formula::FormulaKind;
use crate::core::util::partition_columns::available_workers;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Everything needed to produce one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub formula: FormulaKind,
    pub max_iterations: u32,
    /// `Some` renders the Julia set for this constant instead of parameter space.
    pub julia_constant: Option<Complex>,
    pub worker_count: usize,
}

impl RenderRequest {
    #[must_use]
    pub fn new(viewport: Viewport, formula: FormulaKind) -> Self {
        Self {
            viewport,
            formula,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            julia_constant: None,
            worker_count: available_workers().get(),
        }
    }

    #[must_use]
    pub fn with_formula(mut self, formula: FormulaKind) -> Self {
        self.formula = formula;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_julia_constant(mut self, constant: Option<Complex>) -> Self {
        self.julia_constant = constant;
        self
    }

    #[must_use]
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        RenderMode::from_julia_constant(self.julia_constant)
    }

    /// Checks the parts of a request a [`Viewport`] cannot guarantee itself.
    pub fn validate(&self) -> Result<NonZeroUsize, RenderError> {
        if self.max_iterations == 0 {
            return Err(RenderError::InvalidIterationBound {
                max_iterations: self.max_iterations,
            });
        }

        NonZeroUsize::new(self.worker_count).ok_or(RenderError::InvalidWorkerCount {
            worker_count: self.worker_count,
        })
    }

    fn algorithm(&self) -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(self.viewport, self.formula, self.mode(), self.max_iterations)
    }
}

/// Renders a full frame, blocking until every worker has finished.
///
/// The result is identical for any worker count. If a worker fails the
/// whole frame fails and no partial raster is returned.
pub fn render(request: &RenderRequest) -> Result<RasterBuffer, RenderError> {
    let workers = request.validate()?;
    let started = Instant::now();

    let raster = rasterize_scoped_threads(
        request.viewport.width(),
        request.viewport.height(),
        workers,
        &request.algorithm(),
        &OrangeCycle::new(request.max_iterations),
    )?;

    debug!(
        "rendered {} {}x{} in {:?} with {} workers",
        request.formula,
        raster.width(),
        raster.height(),
        started.elapsed(),
        workers
    );

    Ok(raster)
}

/// Like [`render`], but gives up with [`RenderError::Cancelled`] as soon as
/// `cancel` reports true. Completed output matches [`render`] byte for byte.
pub fn render_cancelable<C: CancelToken>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<RasterBuffer, RenderError> {
    let workers = request.validate()?;
    let started = Instant::now();

    let raster = rasterize_rayon_cancelable(
        request.viewport.width(),
        request.viewport.height(),
        workers,
        &request.algorithm(),
        &OrangeCycle::new(request.max_iterations),
        cancel,
    )?;

    debug!(
        "rendered {} {}x{} in {:?} (cancelable)",
        request.formula,
        raster.width(),
        raster.height(),
        started.elapsed()
    );

    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::{CancelFlag, Cancelled, NeverCancel};
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::viewport::default_viewport;
    use crate::core::fractals::colour_maps::orange_cycle::colour_for;
    use crate::core::fractals::escape_time::escape_time;

    fn request(width: u32, height: u32) -> RenderRequest {
        RenderRequest::new(default_viewport(width, height).unwrap(), FormulaKind::Mandelbrot)
    }

    #[test]
    fn test_default_request() {
        let request = request(10, 10);

        assert_eq!(request.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(request.julia_constant, None);
        assert!(request.worker_count >= 1);
        assert_eq!(request.mode(), RenderMode::ParameterSpace);
    }

    #[test]
    fn test_default_mandelbrot_frame() {
        let request = request(100, 100).with_worker_count(4);
        let viewport = request.viewport;
        let raster = render(&request).unwrap();

        assert_eq!(raster.buffer_size(), 100 * 100 * 3);

        // the centre pixel (51, 51) lands exactly on the origin, inside the set
        let center = viewport.center_pixel();
        assert_eq!(viewport.pixel_to_complex(center), Complex { real: 0.0, imag: 0.0 });
        assert_eq!(raster.pixel(center.x as u32, center.y as u32), Some(Colour::BLACK));

        let corner = viewport.pixel_to_complex(Point { x: 0, y: 0 });
        let iterations =
            escape_time(corner, corner, FormulaKind::Mandelbrot, request.max_iterations);
        assert!(iterations < request.max_iterations);
        assert_eq!(raster.pixel(0, 0), Some(colour_for(iterations, request.max_iterations)));
    }

    #[test]
    fn test_worker_count_does_not_change_output() {
        let base = request(67, 41).with_formula(FormulaKind::BurningShip);

        let single = render(&base.clone().with_worker_count(1)).unwrap();
        let several = render(&base.clone().with_worker_count(5)).unwrap();
        let excessive = render(&base.with_worker_count(200)).unwrap();

        assert_eq!(single, several);
        assert_eq!(single, excessive);
    }

    #[test]
    fn test_cancelable_matches_blocking_render() {
        for formula in FormulaKind::ALL.iter().copied() {
            let request = request(48, 30)
                .with_formula(formula)
                .with_worker_count(3)
                .with_max_iterations(40);

            assert_eq!(
                render(&request).unwrap(),
                render_cancelable(&request, &NeverCancel).unwrap(),
                "{} differs",
                formula
            );
        }
    }

    #[test]
    fn test_julia_frame_differs_from_parameter_space() {
        let parameter = request(40, 32).with_worker_count(2);
        let julia = parameter
            .clone()
            .with_julia_constant(Some(Complex::new(-0.8, 0.156)));

        assert_eq!(julia.mode(), RenderMode::Julia { constant: Complex::new(-0.8, 0.156) });
        assert_ne!(render(&parameter).unwrap(), render(&julia).unwrap());
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let result = render(&request(10, 10).with_max_iterations(0));

        assert_eq!(
            result,
            Err(RenderError::InvalidIterationBound { max_iterations: 0 })
        );
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let result = render_cancelable(&request(10, 10).with_worker_count(0), &NeverCancel);

        assert_eq!(
            result,
            Err(RenderError::InvalidWorkerCount { worker_count: 0 })
        );
    }

    #[test]
    fn test_cancelled_render_returns_no_raster() {
        let flag = CancelFlag::new();
        flag.cancel();

        let result = render_cancelable(&request(32, 32), &flag);

        assert_eq!(result, Err(RenderError::Cancelled(Cancelled)));
    }
}
