use super::*;

/// right hand side of Vector2 arithmetic
///
/// a Vector2 applies per axis, a scalar broadcasts to both axis,
/// anything else leaves the receiver unchanged
#[derive(Debug, Clone, Copy)]
pub enum Operand {
    Vector(Vector2),
    Scalar(f64),
    Unsupported,
}

impl Operand {
    /// finite scalar value, NaN and infinity count as unsupported
    pub fn scalar(&self) -> Option<f64> {
        match *self {
            Operand::Scalar(s) if s.is_finite() => Some(s),
            _ => None,
        }
    }

    pub fn vector(&self) -> Option<&Vector2> {
        match self {
            Operand::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        self.vector().is_none() && self.scalar().is_none()
    }
}

impl From<Vector2> for Operand {
    fn from(v: Vector2) -> Self {
        Operand::Vector(v)
    }
}

impl From<&Vector2> for Operand {
    fn from(v: &Vector2) -> Self {
        Operand::Vector(*v)
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<f32> for Operand {
    fn from(s: f32) -> Self {
        Operand::Scalar(s as f64)
    }
}

impl From<i32> for Operand {
    fn from(s: i32) -> Self {
        Operand::Scalar(s as f64)
    }
}

impl From<i64> for Operand {
    fn from(s: i64) -> Self {
        Operand::Scalar(s as f64)
    }
}

impl From<u32> for Operand {
    fn from(s: u32) -> Self {
        Operand::Scalar(s as f64)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Operand::Unsupported,
        }
    }
}
