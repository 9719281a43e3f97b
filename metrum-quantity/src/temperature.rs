//! Absolute temperature arithmetic
//!
//! Absolute temperatures cannot be summed with each other. They shift by a
//! temperature difference: celsius degrees for kelvin and celsius,
//! fahrenheit degrees for fahrenheit and rankine.

use std::ops::{Add, Sub};

use metrum_core::Unit;

use crate::family::{Temperature, TemperatureDifference, UnitOf};
use crate::units::{CELSIUS_DELTA, FAHRENHEIT_DELTA};
use crate::Quantity;

/// The difference unit whose degree matches `unit`'s degree
fn matching_delta(unit: UnitOf<Temperature>) -> UnitOf<TemperatureDifference> {
    match unit.unit() {
        Unit::Fahrenheit | Unit::Rankine => FAHRENHEIT_DELTA,
        _ => CELSIUS_DELTA,
    }
}

impl Quantity<Temperature> {
    fn shifted(self, delta: Quantity<TemperatureDifference>, sign: f64) -> Self {
        let shift = delta.value_in(matching_delta(self.unit()));
        Quantity::new(self.value() + sign * shift, self.unit())
    }

    pub fn add(self, delta: Quantity<TemperatureDifference>) -> Self {
        self.shifted(delta, 1.0)
    }

    pub fn subtract(self, delta: Quantity<TemperatureDifference>) -> Self {
        self.shifted(delta, -1.0)
    }
}

impl Quantity<TemperatureDifference> {
    /// Apply this difference to an absolute temperature
    pub fn add_to(self, temperature: Quantity<Temperature>) -> Quantity<Temperature> {
        temperature.shifted(self, 1.0)
    }
}

impl Add<Quantity<TemperatureDifference>> for Quantity<Temperature> {
    type Output = Quantity<Temperature>;

    fn add(self, rhs: Quantity<TemperatureDifference>) -> Self::Output {
        self.shifted(rhs, 1.0)
    }
}

impl Sub<Quantity<TemperatureDifference>> for Quantity<Temperature> {
    type Output = Quantity<Temperature>;

    fn sub(self, rhs: Quantity<TemperatureDifference>) -> Self::Output {
        self.shifted(rhs, -1.0)
    }
}
