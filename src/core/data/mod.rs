pub mod colour;
pub mod complex;
pub mod display_geometry;
pub mod fractal_params;
pub mod iteration_result;
pub mod pixel_buffer;
pub mod point;
pub mod viewed_region;
