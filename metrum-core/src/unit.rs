//! Unit identifiers
//!
//! Accessors over the catalog row of a [`Unit`], plus parsing and display.
//! The enumeration itself is generated with the catalog in `units.rs`.

use std::fmt;
use std::str::FromStr;

use crate::units::{UnitDef, CATALOG, UNITS};
use crate::{Dimension, Unit, UnitError};

impl Unit {
    fn definition(self) -> &'static UnitDef {
        &CATALOG[self as usize]
    }

    /// Stable identifier, also used as the display-resource key prefix
    pub fn id(self) -> &'static str {
        self.definition().id
    }

    /// The family this unit belongs to
    pub fn dimension(self) -> Dimension {
        self.definition().dimension
    }

    /// Multiplicative factor to the family's base unit.
    ///
    /// For fuel-efficiency units this is the reciprocal constant `K` in
    /// `liters_per_100_km = K / value`.
    pub fn coefficient(self) -> f64 {
        self.definition().coefficient
    }

    /// Additive term applied before the coefficient; non-zero only for
    /// celsius and fahrenheit
    pub fn offset(self) -> f64 {
        self.definition().offset
    }

    /// Whether this is its family's base unit
    pub fn is_base(self) -> bool {
        self.dimension().base_unit() == self
    }

    /// Whether two units can be converted into each other
    pub fn is_compatible(self, other: Unit) -> bool {
        self.dimension() == other.dimension()
    }

    /// Look up a unit by its stable identifier (e.g. `"nauticalMiles"`)
    pub fn from_id(id: &str) -> Result<Unit, UnitError> {
        UNITS.get(id)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_id(s)
    }
}
