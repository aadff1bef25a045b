// Domain layer: launch model and ports. No process or terminal access here.

pub mod model;
pub mod ports;
