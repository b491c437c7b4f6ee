pub mod raster_presenter;
