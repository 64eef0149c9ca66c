/// Facade binding a mask and options into a sprite factory
pub mod generator;
/// Painting of resolved bitmaps with hue gradients
pub mod renderer;
/// Two-pass resolution of ambiguous masks
pub mod resolver;
