// Domain layer: story models, Jira field mapping and the ports the engine depends on.

pub mod jira;
pub mod model;
pub mod ports;
