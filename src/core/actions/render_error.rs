use crate::core::actions::cancellation::Cancelled;
use crate::core::data::raster_buffer::RasterBufferError;
use crate::core::data::viewport::ViewportError;
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    InvalidViewport(ViewportError),
    InvalidIterationBound { max_iterations: u32 },
    InvalidWorkerCount { worker_count: usize },
    /// A worker panicked while rendering its columns; nothing is returned.
    WorkerPanicked { columns: Range<u32>, message: String },
    Cancelled(Cancelled),
    Assembly(RasterBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport(err) => write!(f, "invalid viewport: {}", err),
            Self::InvalidIterationBound { max_iterations } => {
                write!(
                    f,
                    "maximum iterations must be greater than zero, got {}",
                    max_iterations
                )
            }
            Self::InvalidWorkerCount { worker_count } => {
                write!(
                    f,
                    "worker count must be greater than zero, got {}",
                    worker_count
                )
            }
            Self::WorkerPanicked { columns, message } => {
                write!(
                    f,
                    "worker rendering columns {}..{} failed: {}",
                    columns.start, columns.end, message
                )
            }
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Assembly(err) => write!(f, "raster assembly error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidViewport(err) => Some(err),
            Self::Cancelled(c) => Some(c),
            Self::Assembly(err) => Some(err),
            Self::InvalidIterationBound { .. }
            | Self::InvalidWorkerCount { .. }
            | Self::WorkerPanicked { .. } => None,
        }
    }
}

impl From<ViewportError> for RenderError {
    fn from(err: ViewportError) -> Self {
        Self::InvalidViewport(err)
    }
}

impl From<RasterBufferError> for RenderError {
    fn from(err: RasterBufferError) -> Self {
        Self::Assembly(err)
    }
}

impl From<Cancelled> for RenderError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
