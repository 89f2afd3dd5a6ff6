//! Domain core for the Podenza solicitudes backend: the status registry,
//! filtering and statistics, status transitions, and the per-case workbench,
//! exposed behind storage and HTTP seams the service shell wires up.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
