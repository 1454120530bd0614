mod constants;
mod geometry;
mod operand;
mod ops;
mod timestamp;
mod vector2;

pub use self::constants::*;
pub use self::operand::*;
pub use self::timestamp::*;
pub use self::vector2::*;
