// Domain layer: flower records, job models and ports (interfaces).

pub mod model;
pub mod ports;
