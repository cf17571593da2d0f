// Domain layer: the exchange payloads and the ports the handler talks through.

pub mod model;
pub mod ports;
