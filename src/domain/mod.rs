// Domain layer: command model and ports (interfaces). No external process
// access happens here; adapters provide the concrete runner.

pub mod model;
pub mod ports;
