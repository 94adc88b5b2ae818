//! Validation layer: pure primitives, the unified rule engine, and input
//! formatting.

pub mod format;
pub mod rules;
pub mod validators;
