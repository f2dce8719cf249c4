// Domain layer: expense model, the backend port and the balance rules. No I/O here.

pub mod ledger;
pub mod model;
pub mod ports;
