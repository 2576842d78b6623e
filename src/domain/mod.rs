// Domain layer: records, assessment types and ports. No I/O here.

pub mod model;
pub mod ports;
