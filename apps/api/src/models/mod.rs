pub mod aircraft;
pub mod flight;
