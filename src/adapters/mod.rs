//! Adapters between the core ports and concrete outputs.

pub mod buffered_raster_sink;
pub mod pixel_format;
