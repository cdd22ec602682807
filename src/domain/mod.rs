// Domain layer: value types and ports (capability interfaces). No I/O here.

pub mod model;
pub mod ports;
