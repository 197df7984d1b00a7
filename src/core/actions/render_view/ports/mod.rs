pub mod colour_map;
pub mod raster_sink;
