//! Mathematical utilities for rendering

/// Color space conversion
pub mod color;
/// Statistics driving gradient band changes
pub mod probability;
