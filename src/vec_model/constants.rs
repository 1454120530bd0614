use lazy_static::lazy_static;

use super::*;

// use lazy_static initialize shared constant vectors, w is first access time
lazy_static! {
    pub static ref ORIGIN: Vector2 = Vector2::new(0.0, 0.0);
    pub static ref ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub static ref ONE: Vector2 = Vector2::new(1.0, 1.0);
    pub static ref LEFT: Vector2 = Vector2::new(-1.0, 0.0);
    pub static ref TOP: Vector2 = Vector2::new(0.0, 1.0);
    pub static ref BOTTOM: Vector2 = Vector2::new(0.0, -1.0);
    pub static ref RIGHT: Vector2 = Vector2::new(1.0, 0.0);
}
