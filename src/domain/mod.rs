// Domain layer: branch records, the row model and the ports the core talks through.

pub mod model;
pub mod ports;
