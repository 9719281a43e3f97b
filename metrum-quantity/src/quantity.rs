//! Quantity type - a value with a unit bound to one family

use std::fmt;

use metrum_core::{Measurement, Unit, UnitError, DEFAULT_EPSILON};
use serde::{Deserialize, Serialize};

use crate::family::{Family, UnitOf};

/// A value in a unit of family `F`
#[derive(Serialize, Deserialize)]
#[serde(bound = "F: Family")]
pub struct Quantity<F: Family> {
    value: f64,
    unit: UnitOf<F>,
}

impl<F: Family> Quantity<F> {
    pub fn new(value: f64, unit: UnitOf<F>) -> Self {
        Quantity { value, unit }
    }

    /// Build from an untyped unit, failing when it is outside `F`
    pub fn try_new(value: f64, unit: Unit) -> Result<Self, UnitError> {
        Ok(Quantity::new(value, UnitOf::new(unit)?))
    }

    /// A quantity expressed in the family's base unit
    pub fn in_base(value: f64) -> Self {
        Quantity::new(value, UnitOf::base())
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> UnitOf<F> {
        self.unit
    }

    /// Value expressed in the family's base unit
    pub fn base_value(&self) -> f64 {
        self.unit.unit().to_base_value(self.value)
    }

    /// Value expressed in `unit`
    pub fn value_in(&self, unit: UnitOf<F>) -> f64 {
        if unit == self.unit {
            return self.value;
        }
        unit.unit().from_base_value(self.base_value())
    }

    pub fn converted(&self, to: UnitOf<F>) -> Self {
        Quantity::new(self.value_in(to), to)
    }

    pub fn convert_in_place(&mut self, to: UnitOf<F>) {
        *self = self.converted(to);
    }

    /// Equality within an absolute tolerance, comparing in this unit
    pub fn is_equal(&self, other: &Self, epsilon: f64) -> bool {
        (self.value - other.value_in(self.unit)).abs() <= epsilon
    }

    /// [`Quantity::is_equal`] with [`DEFAULT_EPSILON`]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.is_equal(other, DEFAULT_EPSILON)
    }

    pub fn to_measurement(&self) -> Measurement {
        Measurement::new(self.value, self.unit.unit())
    }
}

impl<F: Family> Clone for Quantity<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Family> Copy for Quantity<F> {}

/// Exact equality of value and unit; use [`Quantity::is_equal`] across units
impl<F: Family> PartialEq for Quantity<F> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit == other.unit
    }
}

impl<F: Family> fmt::Debug for Quantity<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &self.unit.unit())
            .finish()
    }
}

impl<F: Family> fmt::Display for Quantity<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl<F: Family> From<Quantity<F>> for Measurement {
    fn from(quantity: Quantity<F>) -> Measurement {
        quantity.to_measurement()
    }
}

impl<F: Family> TryFrom<Measurement> for Quantity<F> {
    type Error = UnitError;

    fn try_from(measurement: Measurement) -> Result<Self, Self::Error> {
        Quantity::try_new(measurement.value, measurement.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{FuelEfficiency, Length, Temperature};
    use crate::units::*;
    use metrum_core::Dimension;

    #[test]
    fn test_try_new() {
        let q = Quantity::<Length>::try_new(3.0, Unit::Feet).unwrap();
        assert_eq!(q.value(), 3.0);
        assert_eq!(q.unit(), FEET);
        assert!(Quantity::<Length>::try_new(3.0, Unit::Grams).is_err());
    }

    #[test]
    fn test_converted() {
        let q = Quantity::new(1.0, NAUTICAL_MILES);
        assert_eq!(q.converted(KILOMETERS), Quantity::new(1.852, KILOMETERS));
        assert_eq!(q.base_value(), 1852.0);
        assert_eq!(q.value_in(NAUTICAL_MILES), 1.0);
    }

    #[test]
    fn test_convert_in_place() {
        let mut q = Quantity::new(0.0, CELSIUS);
        q.convert_in_place(FAHRENHEIT);
        assert!((q.value() - 32.0).abs() < 1e-9);
        assert_eq!(q.unit(), FAHRENHEIT);
    }

    #[test]
    fn test_fuel_efficiency_conversion() {
        let q: Quantity<FuelEfficiency> = Quantity::new(100.0, LITERS_PER_100_KILOMETERS);
        let mpg = q.converted(MILES_PER_GALLON);
        assert!((mpg.value() - 2.352145833333333).abs() < 1e-12);
        assert!(mpg.converted(LITERS_PER_100_KILOMETERS).approx_eq(&q));
    }

    #[test]
    fn test_is_equal_across_units() {
        let a = Quantity::new(0.0, CELSIUS);
        let b = Quantity::<Temperature>::in_base(273.15);
        assert!(a.approx_eq(&b));
        assert_ne!(a, b);
        assert!(!Quantity::new(1.0, METERS).is_equal(&Quantity::new(1.1, METERS), 0.01));
    }

    #[test]
    fn test_measurement_interop() {
        let q = Quantity::new(2.5, MILES);
        let m: Measurement = q.into();
        assert_eq!(m, Measurement::new(2.5, Unit::Miles));
        assert_eq!(Quantity::<Length>::try_from(m), Ok(q));
        assert_eq!(
            Quantity::<Length>::try_from(Measurement::new(1.0, Unit::Hours)),
            Err(UnitError::DimensionMismatch {
                from: Dimension::Time,
                to: Dimension::Length,
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::new(3.0, KILOMETERS_PER_HOUR).to_string(), "3 kilometersPerHour");
    }

    #[test]
    fn test_serde() {
        let q = Quantity::new(12.0, CELSIUS);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":12.0,"unit":"celsius"}"#);
        let back: Quantity<Temperature> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
        assert!(serde_json::from_str::<Quantity<Length>>(&json).is_err());
    }
}
