//! Errors returned by conversions and dimension arithmetic
//!
//! Every failure is a value: callers compose conversions with `?` and
//! nothing is retried. Floating-point edge cases (division by zero in
//! reciprocal conversions) are not errors and propagate as IEEE values.

use thiserror::Error;

use crate::algebra::Operator;
use crate::{Dimension, Unit};

/// Machine-readable error codes
pub mod codes {
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const UNDEFINED_OPERATION: &str = "UNDEFINED_OPERATION";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_DIMENSION: &str = "UNKNOWN_DIMENSION";
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Conversion or arithmetic across two different dimension families
    #[error("cannot convert {from} to {to}: incompatible dimensions")]
    DimensionMismatch { from: Dimension, to: Dimension },

    /// A multiply/divide pairing with no entry in the law table
    #[error("no law defines {lhs} {operator} {rhs}")]
    UndefinedOperation {
        lhs: Dimension,
        operator: Operator,
        rhs: Dimension,
    },

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown dimension: {0}")]
    UnknownDimension(String),
}

impl UnitError {
    pub fn mismatch(from: Unit, to: Unit) -> Self {
        UnitError::DimensionMismatch {
            from: from.dimension(),
            to: to.dimension(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            UnitError::UndefinedOperation { .. } => codes::UNDEFINED_OPERATION,
            UnitError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            UnitError::UnknownDimension(_) => codes::UNKNOWN_DIMENSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let err = UnitError::mismatch(Unit::Meters, Unit::Seconds);
        assert_eq!(err.to_string(), "cannot convert length to time: incompatible dimensions");
        assert_eq!(err.code(), codes::DIMENSION_MISMATCH);
    }

    #[test]
    fn test_undefined_operation_display() {
        let err = UnitError::UndefinedOperation {
            lhs: Dimension::Mass,
            operator: Operator::Multiply,
            rhs: Dimension::Time,
        };
        assert_eq!(err.to_string(), "no law defines mass × time");
        assert_eq!(err.code(), codes::UNDEFINED_OPERATION);
    }
}
