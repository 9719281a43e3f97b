//! Metrum Quantity - Dimension-typed quantities
//!
//! `Quantity<F>` binds a value to a unit of one family at the type level,
//! so only physically meaningful arithmetic compiles:
//! - proportional families add, subtract and scale
//! - absolute temperatures shift by a temperature difference
//! - cross-family products and quotients follow the core law table
//!
//! ```
//! use metrum_quantity::{units::*, Quantity};
//!
//! let distance = Quantity::new(120.0, KILOMETERS);
//! let speed = distance / Quantity::new(1.5, HOURS);
//! assert!((speed.converted(KILOMETERS_PER_HOUR).value() - 80.0).abs() < 1e-3);
//! ```

mod angle;
mod family;
mod laws;
mod proportional;
mod quantity;
mod temperature;
pub mod units;

pub use family::{
    Acceleration, Angle, AngularVelocity, Area, Concentration, Data, ElectricChargeCapacity,
    ElectricCurrent, ElectricPotential, ElectricResistance, Energy, Family, Frequency,
    FuelEfficiency, Length, Mass, Power, Pressure, Proportional, Speed, Temperature,
    TemperatureDifference, Time, UnitOf, Volume,
};
pub use laws::{Product, Quotient};
pub use quantity::Quantity;

pub use metrum_core::{Measurement, Unit, UnitError, DEFAULT_EPSILON};
