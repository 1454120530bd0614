use std::ops::{Add, Div, Mul, Neg, Sub};

use super::*;

// operators share the sentinel rules of the named methods,
// `v / 0.0` is a copy of ZERO and non finite scalars are ignored
macro_rules! impl_vector_op {
    ( $tr:ident, $op:ident, $method:ident ) => {
        impl $tr<Vector2> for Vector2 {
            type Output = Vector2;
            fn $op(self, rhs: Vector2) -> Vector2 {
                self.$method(rhs)
            }
        }

        impl $tr<&Vector2> for &Vector2 {
            type Output = Vector2;
            fn $op(self, rhs: &Vector2) -> Vector2 {
                self.$method(rhs)
            }
        }

        impl $tr<f64> for Vector2 {
            type Output = Vector2;
            fn $op(self, rhs: f64) -> Vector2 {
                self.$method(rhs)
            }
        }
    };
}

impl_vector_op!(Add, add, addition);
impl_vector_op!(Sub, sub, subtract);
impl_vector_op!(Mul, mul, multiply);
impl_vector_op!(Div, div, divide);

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x(), -self.y())
    }
}
