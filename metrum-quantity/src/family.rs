//! Dimension markers and family-bound units
//!
//! Each family is an uninhabited marker type. `UnitOf<F>` is a [`Unit`]
//! proven to belong to family `F`; it can only be built from a matching
//! unit, so a `Quantity<F>` never changes family.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use metrum_core::{Dimension, Unit, UnitError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A dimension family usable as a type parameter
pub trait Family: 'static {
    const DIMENSION: Dimension;
}

/// Families whose units differ only by a coefficient, so raw values of
/// different units can be summed after normalization.
///
/// Temperature (offset) and fuel efficiency (reciprocal) are excluded.
/// Two absolute temperatures do not add:
///
/// ```compile_fail
/// use metrum_quantity::{units::*, Quantity};
///
/// let _ = Quantity::new(1.0, CELSIUS) + Quantity::new(1.0, CELSIUS);
/// ```
///
/// ```compile_fail
/// use metrum_quantity::{units::*, Quantity};
///
/// let _ = Quantity::new(1.0, KELVIN).add(Quantity::new(1.0, KELVIN));
/// ```
///
/// ```compile_fail
/// use metrum_quantity::{units::*, Quantity};
///
/// let _ = Quantity::new(300.0, KELVIN).modulo(&Quantity::new(7.0, KELVIN));
/// ```
///
/// Fuel efficiencies have no sum, difference or remainder:
///
/// ```compile_fail
/// use metrum_quantity::{units::*, Quantity};
///
/// let mpg = Quantity::new(1.0, MILES_PER_GALLON);
/// let _ = mpg.add(Quantity::new(1.0, MILES_PER_GALLON));
/// ```
///
/// ```compile_fail
/// use metrum_quantity::{units::*, Quantity};
///
/// let _ = Quantity::new(30.0, MILES_PER_GALLON) - Quantity::new(5.0, MILES_PER_GALLON);
/// ```
///
/// ```compile_fail
/// use metrum_quantity::{units::*, Quantity};
///
/// let mpg = Quantity::new(30.0, MILES_PER_GALLON);
/// let _ = mpg.modulo(&Quantity::new(7.0, MILES_PER_GALLON));
/// ```
///
/// Temperature differences are proportional and do add:
///
/// ```
/// use metrum_quantity::{units::*, Quantity};
///
/// let sum = Quantity::new(1.0, CELSIUS_DELTA) + Quantity::new(2.0, CELSIUS_DELTA);
/// assert_eq!(sum, Quantity::new(3.0, CELSIUS_DELTA));
/// ```
pub trait Proportional: Family {}

macro_rules! family {
    ($name:ident) => {
        #[derive(Debug)]
        pub enum $name {}

        impl Family for $name {
            const DIMENSION: Dimension = Dimension::$name;
        }
    };
    ($name:ident, proportional) => {
        family!($name);

        impl Proportional for $name {}
    };
}

family!(Length, proportional);
family!(Speed, proportional);
family!(Pressure, proportional);
family!(Temperature);
family!(TemperatureDifference, proportional);
family!(Mass, proportional);
family!(Volume, proportional);
family!(Acceleration, proportional);
family!(Power, proportional);
family!(Angle, proportional);
family!(AngularVelocity, proportional);
family!(Area, proportional);
family!(Concentration, proportional);
family!(Time, proportional);
family!(ElectricChargeCapacity, proportional);
family!(ElectricCurrent, proportional);
family!(ElectricPotential, proportional);
family!(ElectricResistance, proportional);
family!(Energy, proportional);
family!(Frequency, proportional);
family!(FuelEfficiency);
family!(Data, proportional);

/// A unit statically known to belong to family `F`
#[derive(Serialize, Deserialize)]
#[serde(try_from = "Unit", into = "Unit", bound = "F: Family")]
pub struct UnitOf<F: Family> {
    unit: Unit,
    family: PhantomData<fn() -> F>,
}

impl<F: Family> UnitOf<F> {
    /// Bind `unit` to `F`, failing when it belongs to another family
    pub fn new(unit: Unit) -> Result<Self, UnitError> {
        if unit.dimension() != F::DIMENSION {
            debug!(%unit, expected = %F::DIMENSION, "unit outside quantity family");
            return Err(UnitError::DimensionMismatch {
                from: unit.dimension(),
                to: F::DIMENSION,
            });
        }
        Ok(Self::new_unchecked(unit))
    }

    pub(crate) const fn new_unchecked(unit: Unit) -> Self {
        UnitOf {
            unit,
            family: PhantomData,
        }
    }

    /// The family's base unit
    pub fn base() -> Self {
        Self::new_unchecked(F::DIMENSION.base_unit())
    }

    pub fn unit(self) -> Unit {
        self.unit
    }

    /// Every unit of the family, in declaration order
    pub fn all() -> impl Iterator<Item = UnitOf<F>> {
        F::DIMENSION.units().iter().map(|&unit| Self::new_unchecked(unit))
    }
}

impl<F: Family> Clone for UnitOf<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Family> Copy for UnitOf<F> {}

impl<F: Family> PartialEq for UnitOf<F> {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit
    }
}

impl<F: Family> Eq for UnitOf<F> {}

impl<F: Family> Hash for UnitOf<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
    }
}

impl<F: Family> fmt::Debug for UnitOf<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitOf<{}>({:?})", F::DIMENSION, self.unit)
    }
}

impl<F: Family> fmt::Display for UnitOf<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.unit, f)
    }
}

impl<F: Family> TryFrom<Unit> for UnitOf<F> {
    type Error = UnitError;

    fn try_from(unit: Unit) -> Result<Self, Self::Error> {
        UnitOf::new(unit)
    }
}

impl<F: Family> From<UnitOf<F>> for Unit {
    fn from(unit: UnitOf<F>) -> Unit {
        unit.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_family() {
        assert_eq!(UnitOf::<Length>::new(Unit::Miles).unwrap().unit(), Unit::Miles);
        assert_eq!(
            UnitOf::<Length>::new(Unit::Seconds),
            Err(UnitError::DimensionMismatch {
                from: Dimension::Time,
                to: Dimension::Length,
            })
        );
    }

    #[test]
    fn test_base() {
        assert_eq!(UnitOf::<Mass>::base().unit(), Unit::Grams);
        assert_eq!(UnitOf::<Temperature>::base().unit(), Unit::Kelvin);
        assert_eq!(UnitOf::<FuelEfficiency>::base().unit(), Unit::LitersPer100Kilometers);
    }

    #[test]
    fn test_all_lists_family() {
        let units: Vec<Unit> = UnitOf::<Temperature>::all().map(UnitOf::unit).collect();
        assert_eq!(units, vec![Unit::Kelvin, Unit::Celsius, Unit::Fahrenheit, Unit::Rankine]);
    }

    #[test]
    fn test_serde_rejects_other_family() {
        let unit: UnitOf<Speed> = serde_json::from_str("\"knots\"").unwrap();
        assert_eq!(unit.unit(), Unit::Knots);
        assert_eq!(serde_json::to_string(&unit).unwrap(), "\"knots\"");
        assert!(serde_json::from_str::<UnitOf<Speed>>("\"meters\"").is_err());
    }

    #[test]
    fn test_markers_match_proportionality() {
        fn proportional<F: Proportional>() -> Dimension {
            F::DIMENSION
        }
        assert!(proportional::<Length>().is_proportional());
        assert!(proportional::<TemperatureDifference>().is_proportional());
        assert!(!Temperature::DIMENSION.is_proportional());
        assert!(!FuelEfficiency::DIMENSION.is_proportional());
    }
}
