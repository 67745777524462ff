// Domain layer: character classes, pools, requests and the console port.

pub mod model;
pub mod ports;
