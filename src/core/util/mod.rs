pub mod hsb_to_rgb;
pub mod map_pixel_to_plane;
