//! Diagnostics sinks
//!
//! The distributor never logs directly. Non-fatal signals are rendered from a
//! [`Warning`] and handed to an injected [`DiagnosticsSink`], so callers decide
//! where they go and tests can assert on them deterministically.

use std::fmt;

/// Receiver for non-fatal distribution warnings
pub trait DiagnosticsSink {
    /// Record a warning message
    fn warn(&mut self, message: &str);
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for &mut S {
    fn warn(&mut self, message: &str) {
        (**self).warn(message);
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for Box<S> {
    fn warn(&mut self, message: &str) {
        (**self).warn(message);
    }
}

/// Advisory signals raised during validation and accounting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// At least one task has no lead time and will be skipped
    MissingLeadTime { count: usize },
    /// Total demand is above what all employees can absorb
    OverCapacity { demand: u64, capacity: u64 },
    /// Total demand cannot fill every employee up to the target load
    UnderUtilized { demand: u64, target: u64 },
    /// Some tasks are left without an employee after both passes
    Undistributed { assigned: usize, total: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingLeadTime { count } => {
                write!(f, "{} task(s) have no lead time and will not be distributed", count)
            }
            Warning::OverCapacity { demand, capacity } => write!(
                f,
                "total lead time {} min exceeds employee capacity {} min, not all tasks will be distributed",
                demand, capacity
            ),
            Warning::UnderUtilized { demand, target } => write!(
                f,
                "total lead time {} min is below target load {} min, not every employee will be fully loaded",
                demand, target
            ),
            Warning::Undistributed { assigned, total } => write!(
                f,
                "tasks remain undistributed ({} of {} assigned)",
                assigned, total
            ),
        }
    }
}

/// Forwards warnings to `tracing` at WARN level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn warn(&mut self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Keeps every warning in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    messages: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in the order they were raised
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether a message equal to the rendered `warning` was recorded
    pub fn contains(&self, warning: &Warning) -> bool {
        let rendered = warning.to_string();
        self.messages.iter().any(|m| *m == rendered)
    }

    /// Whether any recorded message contains `needle`
    pub fn mentions(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Fans warnings out to two sinks
#[derive(Debug, Default, Clone)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A: DiagnosticsSink, B: DiagnosticsSink> DiagnosticsSink for Tee<A, B> {
    fn warn(&mut self, message: &str) {
        self.first.warn(message);
        self.second.warn(message);
    }
}
