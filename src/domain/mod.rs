// Domain layer: wire models and ports. No HTTP here.

pub mod model;
pub mod ports;
