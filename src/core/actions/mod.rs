pub mod cancellation;
pub mod rasterize;
pub mod render;
pub mod render_error;
pub mod zoom;
