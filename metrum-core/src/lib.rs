//! Metrum Core - Units of measure and conversion
//!
//! A closed catalog of 220 units in 22 dimension families, with:
//! - `convert`: value conversion within a family (linear, temperature
//!   offset, fuel-efficiency reciprocal)
//! - `Measurement`: a dimension-erased `(value, unit)` pair
//! - `algebra`: the cross-dimension multiply/divide law table
//! - `UnitError`: structured failures
//!
//! Families:
//! - Length, Area, Volume
//! - Speed, Acceleration
//! - Mass, Concentration
//! - Time, Frequency
//! - Temperature, Temperature difference
//! - Pressure, Energy, Power
//! - Electric charge, current, potential, resistance
//! - Angle, Angular velocity
//! - Fuel efficiency
//! - Data

pub mod algebra;
mod convert;
mod dimension;
mod error;
mod measurement;
mod resource;
mod unit;
mod units;

pub use algebra::{Law, Operator};
pub use convert::convert;
pub use dimension::Dimension;
pub use error::{codes, UnitError};
pub use measurement::Measurement;
pub use resource::{Described, StringCatalog, TextField};
pub use units::{Unit, UnitDef, UnitRegistry, UNITS};

/// Default absolute tolerance for tolerance equality
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{convert, Described, Dimension, Measurement, TextField, Unit, UnitError};
    pub use crate::DEFAULT_EPSILON;
}
