use crate::core::data::raster_buffer::RasterBuffer;

pub trait RasterPresenterPort {
    fn present(&mut self, raster: &RasterBuffer) -> std::io::Result<()>;
}
