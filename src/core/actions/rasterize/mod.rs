pub mod ports;
pub mod rasterize_rayon;
pub mod rasterize_scoped_threads;
pub(crate) mod render_band;
