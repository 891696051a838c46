pub mod csv_processor;

pub use csv_processor::*;
