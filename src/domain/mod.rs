// Domain layer: value types, the municipality record, and the ports the
// core depends on. No I/O here.

pub mod code;
pub mod model;
pub mod ports;
pub mod prefecture;
