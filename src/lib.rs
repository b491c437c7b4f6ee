mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::cli::controller::{CliController, CliError, ZoomSelection};
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::errors::render_failure::RenderFailure;
pub use crate::controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, RenderEvent,
};
pub use crate::controllers::ports::raster_presenter::RasterPresenterPort;
pub use crate::core::actions::cancellation::{
    CancelFlag, CancelToken, Cancelled, GenerationToken, NeverCancel,
};
pub use crate::core::actions::rasterize::ports::colour_map::ColourMap;
pub use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render::{
    DEFAULT_MAX_ITERATIONS, RenderRequest, render, render_cancelable,
};
pub use crate::core::actions::render_error::RenderError;
pub use crate::core::actions::zoom::{ZoomTransform, compute_zoom_viewport};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::{Complex, ParseComplexError};
pub use crate::core::data::point::{ParsePointError, Point};
pub use crate::core::data::raster_buffer::{RasterBuffer, RasterBufferError};
pub use crate::core::data::viewport::{ViewBounds, Viewport, ViewportError, default_viewport};
pub use crate::core::fractals::colour_maps::orange_cycle::{OrangeCycle, colour_for};
pub use crate::core::fractals::escape_time::{EscapeTimeAlgorithm, RenderMode, escape_time};
pub use crate::core::fractals::formula::{FormulaKind, ParseFormulaKindError};
pub use crate::input::cli::args::CliConfig;
pub use crate::presenters::terminal::ansi::AnsiTerminalPresenter;
