pub mod map_to_complex_plane;
pub mod plane_calibration;
