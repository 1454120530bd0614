use std::fmt::{Display, Formatter};

use super::*;
use crate::vec_error::{VecError, VecErrorKind};

/// immutable 2d vector
///
/// `w` is the time tag of the vector, milliseconds since unix epoch by default,
/// it takes no part in arithmetic or comparison
#[derive(Debug, Clone, Copy)]
pub struct Vector2 {
    x: f64,
    y: f64,
    w: f64,
}

impl Vector2 {
    /// create vector tagged with current time
    pub fn new(x: f64, y: f64) -> Self {
        Vector2::with_w(x, y, now_millis())
    }

    pub fn with_w(x: f64, y: f64, w: f64) -> Self {
        Vector2 { x, y, w }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    /// write field by name, always fails, Vector2 fields only have getter
    pub fn assign(&self, field: &str, value: f64) -> Result<(), VecError> {
        match field {
            "x" | "y" | "w" => Err(vec_err!(
                VecErrorKind::ImmutableField,
                &format!(
                    "Cannot set property {} of {} to {} which has only a getter",
                    field, self, value
                )
            )),
            _ => Err(vec_err!(
                VecErrorKind::UnknownField,
                &format!("Vector2 has no field named {:?}", field)
            )),
        }
    }

    fn apply(&self, val: Operand, op: fn(f64, f64) -> f64) -> Vector2 {
        if let Some(v) = val.vector() {
            return Vector2::new(op(self.x, v.x), op(self.y, v.y));
        }
        if let Some(s) = val.scalar() {
            return Vector2::new(op(self.x, s), op(self.y, s));
        }
        *self
    }

    pub fn addition(&self, val: impl Into<Operand>) -> Vector2 {
        self.apply(val.into(), |a, b| a + b)
    }

    pub fn subtract(&self, val: impl Into<Operand>) -> Vector2 {
        self.apply(val.into(), |a, b| a - b)
    }

    pub fn multiply(&self, val: impl Into<Operand>) -> Vector2 {
        self.apply(val.into(), |a, b| a * b)
    }

    /// divide by scalar zero gives a copy of ZERO,
    /// zero axis of a vector divisor is not checked
    pub fn divide(&self, val: impl Into<Operand>) -> Vector2 {
        let val = val.into();
        if val.scalar() == Some(0.0) {
            return ZERO.copy();
        }
        self.apply(val, |a, b| a / b)
    }

    pub fn copy(&self) -> Vector2 {
        Vector2::with_w(self.x, self.y, self.w)
    }

    /// per axis sign of `self - val`
    ///
    /// an axis with zero difference is NaN, a non vector `val` gives `Scalar(1.0)`
    pub fn compare(&self, val: impl Into<Operand>) -> Operand {
        match val.into().vector() {
            Some(v) => {
                let xd = self.x - v.x;
                let yd = self.y - v.y;
                Operand::Vector(Vector2::new(xd / xd.abs(), yd / yd.abs()))
            }
            None => Operand::Scalar(1.0),
        }
    }

    /// both axis difference is exactly zero, `w` is ignored
    pub fn equals(&self, val: impl Into<Operand>) -> bool {
        match val.into().vector() {
            Some(v) => self.x - v.x == 0.0 && self.y - v.y == 0.0,
            None => false,
        }
    }

    /// time tag difference to another vector or a timestamp
    pub fn elapse(&self, val: impl Into<Operand>) -> Option<f64> {
        let val = val.into();
        if let Some(v) = val.vector() {
            return Some(self.w - v.w);
        }
        val.scalar().map(|t| self.w - t)
    }

    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    pub fn sqr_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// unit vector, a zero length vector gives a copy of ORIGIN
    pub fn normalize(&self) -> Vector2 {
        let l = self.magnitude();
        if l == 0.0 {
            return ORIGIN.copy();
        }
        self.divide(l)
    }

    /// move into pivot based coord
    pub fn shift(&self, pivot: impl Into<Operand>) -> Vector2 {
        match pivot.into().vector() {
            Some(p) => self.subtract(p),
            None => *self,
        }
    }

    /// move back from pivot based coord
    pub fn unshift(&self, pivot: impl Into<Operand>) -> Vector2 {
        match pivot.into().vector() {
            Some(p) => self.addition(p),
            None => *self,
        }
    }

    /// move `len` units along self direction, negative `len` moves backward
    pub fn forward(&self, len: impl Into<Operand>) -> Vector2 {
        match len.into().scalar() {
            Some(len) => self.addition(self.normalize().multiply(len)),
            None => *self,
        }
    }

    /// text form with time tag, `{ x:1, y:2, w:3 }`
    pub fn value_of(&self) -> String {
        format!(
            "{{ x:{}, y:{}, w:{} }}",
            fmt_number(self.x),
            fmt_number(self.y),
            fmt_number(self.w)
        )
    }
}

fn fmt_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "Infinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if v == 0.0 {
        // negative zero
        "0".to_string()
    } else {
        v.to_string()
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ x:{}, y:{} }}", fmt_number(self.x), fmt_number(self.y))
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

#[cfg(test)]
mod test_vector2 {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};

    const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-9,
        ulps: 4,
    };

    #[test]
    fn test_new_and_getter() {
        let before = now_millis();
        let v = Vector2::new(12.0, 13.0);
        assert_eq!(v.x(), 12.0);
        assert_eq!(v.y(), 13.0);
        assert!(v.w() >= before && v.w() <= now_millis());

        let v = Vector2::with_w(f64::NAN, f64::INFINITY, 7.0);
        assert!(v.x().is_nan());
        assert_eq!(v.y(), f64::INFINITY);
        assert_eq!(v.w(), 7.0);
    }

    #[test]
    fn test_assign_fails() {
        let v = Vector2::new(12.0, 13.0);
        for field in ["x", "y", "w"] {
            let err = v.assign(field, 100.0).unwrap_err();
            assert_eq!(err.kind(), VecErrorKind::ImmutableField);
            assert!(err.message().contains(&format!("property {}", field)));
        }
        assert_eq!(v.x(), 12.0);

        let err = v.assign("z", 1.0).unwrap_err();
        assert_eq!(err.kind(), VecErrorKind::UnknownField);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(6.0, 8.0);
        let b = Vector2::new(2.0, 4.0);
        assert!(a.addition(&b).equals(Vector2::new(8.0, 12.0)));
        assert!(a.subtract(&b).equals(Vector2::new(4.0, 4.0)));
        assert!(a.multiply(&b).equals(Vector2::new(12.0, 32.0)));
        assert!(a.divide(&b).equals(Vector2::new(3.0, 2.0)));

        assert!(a.addition(1).equals(Vector2::new(7.0, 9.0)));
        assert!(a.subtract(1.0).equals(Vector2::new(5.0, 7.0)));
        assert!(a.multiply(0.5).equals(Vector2::new(3.0, 4.0)));
        assert!(a.divide(2).equals(Vector2::new(3.0, 4.0)));
        assert!(a.multiply(0).equals(&*ZERO));
    }

    #[test]
    fn test_unsupported_operand_is_noop() {
        let a = Vector2::with_w(6.0, 8.0, 42.0);
        for r in [
            a.addition(Operand::Unsupported),
            a.subtract(None::<f64>),
            a.multiply(f64::NAN),
            a.divide(f64::INFINITY),
            a.shift(3.0),
            a.unshift(Operand::Unsupported),
            a.forward(&a),
        ] {
            assert!(r.equals(&a));
            assert_eq!(r.w(), 42.0);
        }
    }

    #[test]
    fn test_divide_zero() {
        let v = Vector2::new(12.0, 13.0);
        let r = v.divide(0);
        assert!(r.equals(&*ZERO));
        assert_eq!(r.w(), ZERO.w());
        assert!(v.divide(-0.0).equals(&*ZERO));

        // vector divisor is not checked
        let r = v.divide(Vector2::new(0.0, 1.0));
        assert_eq!(r.x(), f64::INFINITY);
        assert_eq!(r.y(), 13.0);
        let r = ZERO.divide(&*ZERO);
        assert!(r.x().is_nan() && r.y().is_nan());
    }

    #[test]
    fn test_copy() {
        let v = Vector2::with_w(1.5, -2.5, 99.0);
        let c = v.copy();
        assert!(c.equals(&v));
        assert_eq!(c.w(), v.w());
        assert!(!std::ptr::eq(&c, &v));
    }

    #[test]
    fn test_compare() {
        let a = Vector2::new(3.0, 1.0);
        let b = Vector2::new(1.0, 4.0);
        match a.compare(&b) {
            Operand::Vector(c) => {
                assert_eq!(c.x(), 1.0);
                assert_eq!(c.y(), -1.0);
            }
            other => panic!("unexpected compare result {:?}", other),
        }

        // equal axis gives NaN
        match Vector2::compare(&a, Vector2::new(3.0, 0.0)) {
            Operand::Vector(c) => {
                assert!(c.x().is_nan());
                assert_eq!(c.y(), 1.0);
            }
            other => panic!("unexpected compare result {:?}", other),
        }

        assert_eq!(a.compare(5.0).scalar(), Some(1.0));
        assert_eq!(a.compare(Operand::Unsupported).scalar(), Some(1.0));
    }

    #[test]
    fn test_equals() {
        let a = Vector2::with_w(3.0, 1.0, 1.0);
        assert!(Vector2::equals(&a, Vector2::with_w(3.0, 1.0, 2.0)));
        assert!(!a.equals(Vector2::new(3.0, 1.5)));
        assert!(!a.equals(3.0));
        assert!(!a.equals(None::<Vector2>));
        assert!(a == Vector2::new(3.0, 1.0));
        assert!(!Vector2::new(f64::NAN, 0.0).equals(Vector2::new(f64::NAN, 0.0)));
        assert!(!Vector2::new(f64::INFINITY, 0.0).equals(Vector2::new(f64::INFINITY, 0.0)));
    }

    #[test]
    fn test_elapse() {
        let a = Vector2::with_w(0.0, 0.0, 1000.0);
        let b = Vector2::with_w(5.0, 5.0, 400.0);
        assert_eq!(a.elapse(&b), Some(600.0));
        assert_eq!(b.elapse(&a), Some(-600.0));
        assert_eq!(a.elapse(250), Some(750.0));
        assert_eq!(a.elapse(Operand::Unsupported), None);
        assert_eq!(a.elapse(f64::NAN), None);
    }

    #[test]
    fn test_magnitude() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.sqr_magnitude(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(ORIGIN.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector2::new(12.0, 13.0);
        assert!(1.0_f64.approx_eq(v.normalize().magnitude(), MARGIN));
        assert!(Vector2::new(-3.0, 4.0)
            .normalize()
            .equals(Vector2::new(-0.6, 0.8)));

        let n = ORIGIN.normalize();
        assert!(n.equals(&*ORIGIN));
        assert_eq!(n.w(), ORIGIN.w());
    }

    #[test]
    fn test_forward() {
        let v = Vector2::new(12.0, 13.0);
        let v2 = v.forward(200);
        assert!(200.0_f64.approx_eq(Vector2::distance(&v, &v2), MARGIN));
        assert!(v2.magnitude() > v.magnitude());

        let v3 = v.forward(-100);
        assert!(100.0_f64.approx_eq(Vector2::distance(&v, &v3), MARGIN));
        // passes through origin to the other side
        assert!(v3.x() < 0.0 && v3.y() < 0.0);

        assert!(ORIGIN.forward(10).equals(&*ORIGIN));
    }

    #[test]
    fn test_shift_unshift() {
        let v = Vector2::new(12.0, 13.0);
        let pivot = Vector2::new(20.0, 10.0);
        let v4 = v.shift(&pivot);
        assert!(v4.equals(v.subtract(&pivot)));
        assert!(v4.equals(Vector2::new(-8.0, 3.0)));
        assert!(v4.unshift(&pivot).equals(&v));
    }

    #[test]
    fn test_to_string() {
        let v = Vector2::with_w(12.0, 13.5, 1700000000000.0);
        assert_eq!(v.to_string(), "{ x:12, y:13.5 }");
        assert_eq!(v.value_of(), "{ x:12, y:13.5, w:1700000000000 }");

        let v = Vector2::with_w(f64::NAN, f64::NEG_INFINITY, -0.0);
        assert_eq!(v.to_string(), "{ x:NaN, y:-Infinity }");
        assert_eq!(v.value_of(), "{ x:NaN, y:-Infinity, w:0 }");
        assert_eq!(
            Vector2::with_w(f64::INFINITY, -0.25, 0.0).to_string(),
            "{ x:Infinity, y:-0.25 }"
        );
    }

    #[test]
    fn test_from_tuple_array() {
        assert!(Vector2::from((1.0, 2.0)).equals(Vector2::from([1.0, 2.0])));
    }
}
