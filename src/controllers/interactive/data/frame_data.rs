use crate::core::data::raster_buffer::RasterBuffer;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub raster: RasterBuffer,
    pub render_duration: Duration,
}
