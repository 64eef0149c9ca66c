//! Built-in mask templates

use ndarray::Array2;

use crate::spatial::mask::Mask;
use crate::spatial::pixel::Pixel;

const E: Pixel = Pixel::Empty;
const B: Pixel = Pixel::Border;
const A: Pixel = Pixel::BodyOrEmpty;
const S: Pixel = Pixel::BodyOrBorder;

const SPACESHIP: [[Pixel; 6]; 12] = [
    [E, E, E, E, E, E],
    [E, E, E, E, A, A],
    [E, E, E, E, A, B],
    [E, E, E, A, A, B],
    [E, E, E, A, A, B],
    [E, E, A, A, A, B],
    [E, A, A, A, S, S],
    [E, A, A, A, S, S],
    [E, A, A, A, S, S],
    [E, A, A, A, A, B],
    [E, E, E, A, A, A],
    [E, E, E, E, E, E],
];

/// Left half of a spaceship, mirrored horizontally into a 12x12 sprite
pub fn spaceship() -> Mask {
    Mask::from_array(Array2::from(SPACESHIP.to_vec()), true, false)
}
