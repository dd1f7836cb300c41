// Domain layer: stream models and the transform port. No codec dependencies here.

pub mod model;
pub mod ports;
