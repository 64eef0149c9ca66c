//! Structural checks over the crate layout
