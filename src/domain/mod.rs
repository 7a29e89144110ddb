// Domain layer: request/record models and the port the handler fetches through.

pub mod model;
pub mod ports;
