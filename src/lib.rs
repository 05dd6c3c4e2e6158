pub mod aggregate;
pub mod cobertura;
pub mod error;
pub mod gocov;
pub mod group;
pub mod lines;
pub mod model;
pub mod report;
