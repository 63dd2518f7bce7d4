// Domain layer: value types and the capability traits the programs are wired with.

pub mod model;
pub mod ports;
