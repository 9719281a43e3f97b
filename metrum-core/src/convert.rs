//! Conversion engine
//!
//! Every value passes through its family's base unit: `to_base_value` then
//! `from_base_value`. Proportional families scale by the coefficient,
//! temperature shifts by the offset first, and fuel efficiency is reciprocal
//! around liters per 100 km.

use tracing::debug;

use crate::{Dimension, Unit, UnitError};

impl Unit {
    /// Convert a value in this unit to the family's base unit
    pub fn to_base_value(self, value: f64) -> f64 {
        match self.dimension() {
            // kelvin = (value + offset) * coefficient
            Dimension::Temperature => (value + self.offset()) * self.coefficient(),
            Dimension::FuelEfficiency if !self.is_base() => self.coefficient() / value,
            _ => value * self.coefficient(),
        }
    }

    /// Convert a base-unit value into this unit
    pub fn from_base_value(self, base: f64) -> f64 {
        match self.dimension() {
            Dimension::Temperature => base / self.coefficient() - self.offset(),
            Dimension::FuelEfficiency if !self.is_base() => self.coefficient() / base,
            _ => base / self.coefficient(),
        }
    }

    /// Convert a value from this unit to another unit of the same family
    pub fn convert_to(self, value: f64, target: Unit) -> Result<f64, UnitError> {
        if !self.is_compatible(target) {
            debug!(from = %self, to = %target, "conversion across dimensions");
            return Err(UnitError::mismatch(self, target));
        }
        if self == target {
            return Ok(value);
        }
        Ok(target.from_base_value(self.to_base_value(value)))
    }
}

/// Convert `value` expressed in `from` into `to`.
///
/// Fails with [`UnitError::DimensionMismatch`] when the units belong to
/// different families. Division by zero in reciprocal conversions yields
/// IEEE infinity or NaN rather than an error.
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, UnitError> {
    from.convert_to(value, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-10 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_linear_conversions() {
        let cases = [
            (Unit::Feet, Unit::Meters, 0.3048),
            (Unit::NauticalMiles, Unit::Kilometers, 1.852),
            (Unit::Miles, Unit::Meters, 1609.344),
            (Unit::Parsecs, Unit::Meters, 3.0856775814913673e16),
            (Unit::Pounds, Unit::Grams, 453.59237),
            (Unit::Liters, Unit::CubicMeters, 0.001),
            (Unit::Gallons, Unit::Liters, 3.785411784),
            (Unit::Horsepower, Unit::Watts, 745.69987158227022),
            (Unit::Revolutions, Unit::Degrees, 360.0),
            (Unit::Gradians, Unit::Degrees, 0.9),
            (Unit::RevolutionsPerMinute, Unit::DegreesPerSecond, 6.0),
            (Unit::Acres, Unit::SquareMeters, 4046.8564224),
            (Unit::GramsPerLiter, Unit::MilligramsPerDeciliter, 100.0),
            (Unit::Years, Unit::Seconds, 3.15576e7),
            (Unit::Coulombs, Unit::AmpereHours, 1.0 / 3600.0),
            (Unit::MetersPerSecondSquared, Unit::Gravity, 0.10197162129779283),
            (Unit::Kibibytes, Unit::Bytes, 1024.0),
            (Unit::Gigabits, Unit::Megabytes, 125.0),
        ];
        for (from, to, expected) in cases {
            assert_close(convert(1.0, from, to).unwrap(), expected);
        }
    }

    #[test]
    fn test_nautical_mile_is_exact() {
        assert_eq!(convert(1.0, Unit::NauticalMiles, Unit::Kilometers), Ok(1.852));
    }

    #[test]
    fn test_temperature_fixed_points() {
        assert_close(convert(0.0, Unit::Celsius, Unit::Kelvin).unwrap(), 273.15);
        assert_close(convert(32.0, Unit::Fahrenheit, Unit::Kelvin).unwrap(), 273.15);
        assert_close(convert(0.0, Unit::Fahrenheit, Unit::Kelvin).unwrap(), 255.37222222222223);
        assert_close(convert(100.0, Unit::Celsius, Unit::Fahrenheit).unwrap(), 212.0);
        assert_close(convert(-40.0, Unit::Fahrenheit, Unit::Celsius).unwrap(), -40.0);
        assert_close(convert(0.0, Unit::Rankine, Unit::Kelvin).unwrap(), 0.0);
        assert_close(convert(491.67, Unit::Rankine, Unit::Kelvin).unwrap(), 273.15);
    }

    #[test]
    fn test_temperature_difference_has_no_offset() {
        assert_close(convert(1.0, Unit::CelsiusDelta, Unit::FahrenheitDelta).unwrap(), 1.8);
        assert_close(convert(9.0, Unit::FahrenheitDelta, Unit::CelsiusDelta).unwrap(), 5.0);
    }

    #[test]
    fn test_fuel_efficiency_is_reciprocal() {
        let mpg = convert(100.0, Unit::LitersPer100Kilometers, Unit::MilesPerGallon).unwrap();
        assert_close(mpg, 2.352145833333333);
        let back = convert(mpg, Unit::MilesPerGallon, Unit::LitersPer100Kilometers).unwrap();
        assert_close(back, 100.0);

        let imperial = convert(10.0, Unit::LitersPer100Kilometers, Unit::MilesPerImperialGallon).unwrap();
        assert_close(imperial, 28.24809362796091);
    }

    #[test]
    fn test_fuel_efficiency_between_distance_per_volume_units() {
        // composed through liters per 100 km
        let via_reference = convert(
            convert(30.0, Unit::MilesPerGallon, Unit::LitersPer100Kilometers).unwrap(),
            Unit::LitersPer100Kilometers,
            Unit::MilesPerImperialGallon,
        )
        .unwrap();
        let direct = convert(30.0, Unit::MilesPerGallon, Unit::MilesPerImperialGallon).unwrap();
        assert_close(direct, via_reference);
        assert_close(direct, 30.0 * 282.4809362796091 / 235.2145833333333);
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(convert(42.5, Unit::MilesPerGallon, Unit::MilesPerGallon), Ok(42.5));
        assert_eq!(convert(-3.0, Unit::Fahrenheit, Unit::Fahrenheit), Ok(-3.0));
    }

    #[test]
    fn test_zero_fuel_efficiency_is_infinite() {
        let mpg = convert(0.0, Unit::LitersPer100Kilometers, Unit::MilesPerGallon).unwrap();
        assert!(mpg.is_infinite());
    }

    #[test]
    fn test_round_trip_through_base() {
        for unit in Unit::ALL.into_iter().filter(|u| u.dimension().is_proportional()) {
            let value = 123.456;
            let back = unit.from_base_value(unit.to_base_value(value));
            assert_close(back, value);
        }
    }

    #[test]
    fn test_dimension_closure() {
        for from in Dimension::ALL {
            for to in Dimension::ALL {
                let result = convert(1.0, from.base_unit(), to.base_unit());
                if from == to {
                    assert_eq!(result, Ok(1.0));
                } else {
                    assert_eq!(result, Err(UnitError::DimensionMismatch { from, to }));
                }
            }
        }
    }

    #[test]
    fn test_temperature_and_difference_do_not_mix() {
        assert!(convert(1.0, Unit::Celsius, Unit::CelsiusDelta).is_err());
    }
}
