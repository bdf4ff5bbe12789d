// Domain layer: the quote payload, the delivery outcome and the ports the
// orchestrator talks to.

pub mod model;
pub mod ports;
