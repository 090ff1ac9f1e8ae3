pub mod cancellation;
pub mod progressive_scan;
