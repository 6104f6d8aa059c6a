//! taskdist - Greedy distribution of prioritized tasks across employees
//!
//! Tasks carry a priority and an estimated lead time in minutes. Employees have
//! a daily capacity ceiling (420 minutes by default). The distributor assigns
//! tasks in two passes:
//!
//! - **Priority pass**: ascending priority, first-fit in employee order, at most
//!   one task of each priority per employee
//! - **Fallback pass**: leftovers go to the least-loaded employee with room
//!
//! # Architecture
//!
//! - [`model`]: tasks and employees
//! - [`distributor`]: validation, both passes and the capacity predicate
//! - [`diagnostics`]: injectable warning sinks
//! - [`config`]: limits, CLI and TOML configuration
//! - [`plan`]: loading employees and tasks from TOML/JSON
//! - [`output`]: text and JSON reports

pub mod config;
pub mod diagnostics;
pub mod distributor;
pub mod model;
pub mod output;
pub mod plan;

// Re-export commonly used types
pub use config::{Config, DistributionConfig};
pub use diagnostics::{DiagnosticsSink, RecordingSink, TracingSink, Warning};
pub use distributor::{distribute, Assignment, DistributionReport, Distributor, ValidationError};
pub use model::{Employee, Task};

/// Result type used throughout taskdist
pub type Result<T> = anyhow::Result<T>;
