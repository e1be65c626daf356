// Domain layer: the record model and the lookup port. No I/O here.

pub mod model;
pub mod ports;
