// Domain layer: value types and the form port. No I/O.

pub mod model;
pub mod ports;
