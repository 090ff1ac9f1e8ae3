pub mod ports;
pub mod progressive_renderer;
pub mod scan_pass;
pub mod sync_driver;
