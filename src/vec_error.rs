//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecErrorKind {
    /// write to a read only field of Vector2
    ImmutableField,
    /// write to a name Vector2 does not have
    UnknownField,
}

impl VecErrorKind {
    fn name(&self) -> &'static str {
        match self {
            VecErrorKind::ImmutableField => "ImmutableFieldError",
            VecErrorKind::UnknownField => "UnknownFieldError",
        }
    }
}

#[derive(Debug)]
pub struct VecError {
    kind: VecErrorKind,
    err: String,
}

impl VecError {
    pub fn new(kind: VecErrorKind, err: &str) -> VecError {
        VecError {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> VecErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.err
    }
}

impl Display for VecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.kind.name(), self.err)
    }
}

impl Error for VecError {}

#[macro_export]
macro_rules! vec_err {
    ( $kind:expr, $x:expr ) => {{
        $crate::vec_error::VecError::new(
            $kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}
