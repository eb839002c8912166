pub mod intervals;
pub mod rainfall;
