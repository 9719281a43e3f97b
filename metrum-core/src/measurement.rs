//! Dimension-erased measurements

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algebra::{self, Operator};
use crate::{Dimension, Unit, UnitError, DEFAULT_EPSILON};

/// A value paired with any unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(value: f64, unit: Unit) -> Self {
        Measurement { value, unit }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Value expressed in the family's base unit
    pub fn base_value(&self) -> f64 {
        self.unit.to_base_value(self.value)
    }

    /// Convert to another unit of the same family
    pub fn converted(&self, to: Unit) -> Result<Measurement, UnitError> {
        let value = self.unit.convert_to(self.value, to)?;
        Ok(Measurement::new(value, to))
    }

    /// Sum of two measurements, expressed in this measurement's unit.
    ///
    /// An absolute temperature only accepts a temperature difference, applied
    /// as celsius degrees to kelvin/celsius and as fahrenheit degrees to
    /// fahrenheit/rankine. Fuel efficiencies cannot be added.
    pub fn adding(&self, other: Measurement) -> Result<Measurement, UnitError> {
        self.combine_same_kind(other, Operator::Add)
    }

    /// Difference of two measurements; same rules as [`Measurement::adding`]
    pub fn subtracting(&self, other: Measurement) -> Result<Measurement, UnitError> {
        self.combine_same_kind(other, Operator::Subtract)
    }

    fn combine_same_kind(&self, other: Measurement, operator: Operator) -> Result<Measurement, UnitError> {
        let rhs_unit = match self.unit {
            Unit::Kelvin | Unit::Celsius => Unit::CelsiusDelta,
            Unit::Fahrenheit | Unit::Rankine => Unit::FahrenheitDelta,
            _ if self.dimension() == Dimension::FuelEfficiency => {
                return Err(self.undefined(operator, other));
            }
            unit => unit,
        };
        let rhs = other.converted(rhs_unit)?;
        Ok(Measurement::new(operator.apply(self.value, rhs.value), self.unit))
    }

    /// Product through the dimension law table
    pub fn multiplying(&self, other: Measurement) -> Result<Measurement, UnitError> {
        algebra::multiply(self.dimension(), other.dimension())?.apply(*self, other)
    }

    /// Quotient through the dimension law table
    pub fn dividing(&self, other: Measurement) -> Result<Measurement, UnitError> {
        algebra::divide(self.dimension(), other.dimension())?.apply(*self, other)
    }

    pub fn scaled(&self, factor: f64) -> Measurement {
        Measurement::new(self.value * factor, self.unit)
    }

    pub fn divided_by_scalar(&self, divisor: f64) -> Measurement {
        Measurement::new(self.value / divisor, self.unit)
    }

    /// Truncating remainder after converting `other` into this unit.
    ///
    /// Absolute temperatures and fuel efficiencies have no remainder.
    pub fn modulo(&self, other: Measurement) -> Result<Measurement, UnitError> {
        if !self.dimension().is_proportional() {
            return Err(self.undefined(Operator::Remainder, other));
        }
        let rhs = other.converted(self.unit)?;
        Ok(Measurement::new(self.value % rhs.value, self.unit))
    }

    /// Equality within an absolute tolerance, after converting `other` into
    /// this unit. Measurements of different families are never equal.
    pub fn is_equal(&self, other: &Measurement, epsilon: f64) -> bool {
        match other.converted(self.unit) {
            Ok(rhs) => (self.value - rhs.value).abs() <= epsilon,
            Err(_) => false,
        }
    }

    /// [`Measurement::is_equal`] with [`DEFAULT_EPSILON`]
    pub fn approx_eq(&self, other: &Measurement) -> bool {
        self.is_equal(other, DEFAULT_EPSILON)
    }

    fn undefined(&self, operator: Operator, other: Measurement) -> UnitError {
        debug!(lhs = %self, %operator, rhs = %other, "operation undefined for dimension");
        UnitError::UndefinedOperation {
            lhs: self.dimension(),
            operator,
            rhs: other.dimension(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
