pub mod latest_frame;
