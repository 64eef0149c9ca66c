/// Generation constants and option defaults
pub mod configuration;
/// Error types for sprite generation
pub mod error;
