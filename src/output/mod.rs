//! Report output
//!
//! Text for the console, JSON for files and machine consumers.

pub mod json;
pub mod text;
