use std::error::Error;
use std::fmt;
use std::io;

use log::{debug, info};

use crate::controllers::ports::raster_presenter::RasterPresenterPort;
use crate::core::actions::render::{RenderRequest, render};
use crate::core::actions::render_error::RenderError;
use crate::core::actions::zoom::compute_zoom_viewport;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};

/// A drag rectangle given on the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZoomSelection {
    pub from: Point,
    pub to: Point,
    pub animated: bool,
}

#[derive(Debug)]
pub enum CliError {
    Zoom(ViewportError),
    Render(RenderError),
    Present(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoom(err) => write!(f, "zoom error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::Present(err) => write!(f, "output error: {}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Zoom(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Present(err) => Some(err),
        }
    }
}

impl From<ViewportError> for CliError {
    fn from(err: ViewportError) -> Self {
        Self::Zoom(err)
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Present(err)
    }
}

pub struct CliController<P: RasterPresenterPort> {
    presenter: P,
}

impl<P: RasterPresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    /// Renders `request`, or the view selected by `zoom` over it, and hands
    /// each frame to the presenter in order. Returns the viewport finally
    /// shown.
    pub fn run(
        &mut self,
        request: &RenderRequest,
        zoom: Option<ZoomSelection>,
    ) -> Result<Viewport, CliError> {
        let frames = Self::frames(request, zoom)?;
        let mut shown = request.viewport;

        for viewport in frames {
            let frame_request = RenderRequest {
                viewport,
                ..request.clone()
            };

            info!(
                "rendering {} at {} (span {} x {}), {} iterations",
                frame_request.formula,
                viewport.center(),
                viewport.real_span(),
                viewport.imag_span(),
                frame_request.max_iterations
            );

            let raster = render(&frame_request)?;
            self.presenter.present(&raster)?;
            shown = viewport;
        }

        Ok(shown)
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn frames(
        request: &RenderRequest,
        zoom: Option<ZoomSelection>,
    ) -> Result<Vec<Viewport>, ViewportError> {
        let Some(selection) = zoom else {
            return Ok(vec![request.viewport]);
        };

        match compute_zoom_viewport(
            &request.viewport,
            selection.from,
            selection.to,
            selection.animated,
        )? {
            Some(transform) => Ok(transform.frames()),
            None => {
                debug!("empty zoom selection, rendering the current view");
                Ok(vec![request.viewport])
            }
        }
    }
}
