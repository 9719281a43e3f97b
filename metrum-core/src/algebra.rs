//! Dimension algebra
//!
//! The closed table of cross-dimension multiply/divide laws. A law names the
//! unit each operand is normalized into before the raw values are combined,
//! and the unit the result is expressed in.

use std::fmt;

use tracing::debug;

use crate::{Dimension, Measurement, Unit, UnitError};

/// Binary operations on measurements.
///
/// Only `Multiply` and `Divide` appear in the law table; the others name
/// same-family operations in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Remainder => lhs % rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Remainder => "%",
        };
        f.write_str(symbol)
    }
}

/// One entry of the law table: `lhs operator rhs => output`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Law {
    pub lhs: Unit,
    pub operator: Operator,
    pub rhs: Unit,
    pub output: Unit,
}

impl Law {
    const fn new(lhs: Unit, operator: Operator, rhs: Unit, output: Unit) -> Self {
        Law {
            lhs,
            operator,
            rhs,
            output,
        }
    }

    /// The same product with operands swapped
    pub const fn commuted(self) -> Law {
        Law {
            lhs: self.rhs,
            rhs: self.lhs,
            ..self
        }
    }

    pub fn output_dimension(&self) -> Dimension {
        self.output.dimension()
    }

    fn matches(&self, lhs: Dimension, operator: Operator, rhs: Dimension) -> bool {
        self.operator == operator
            && self.lhs.dimension() == lhs
            && self.rhs.dimension() == rhs
    }

    /// Combine two values already expressed in `self.lhs` and `self.rhs`;
    /// the result is in `self.output`
    pub fn combine(&self, lhs: f64, rhs: f64) -> f64 {
        self.operator.apply(lhs, rhs)
    }

    /// Normalize both operands and combine them
    pub fn apply(&self, lhs: Measurement, rhs: Measurement) -> Result<Measurement, UnitError> {
        let lhs = lhs.converted(self.lhs)?;
        let rhs = rhs.converted(self.rhs)?;
        Ok(Measurement::new(self.combine(lhs.value, rhs.value), self.output))
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs.dimension(),
            self.operator,
            self.rhs.dimension(),
            self.output.dimension()
        )
    }
}

macro_rules! laws {
    (@op *) => { Operator::Multiply };
    (@op /) => { Operator::Divide };
    ($($name:ident: $lhs:ident $op:tt $rhs:ident => $output:ident;)*) => {
        $(
            pub const $name: Law =
                Law::new(Unit::$lhs, laws!(@op $op), Unit::$rhs, Unit::$output);
        )*

        /// Every law, canonical operand order only
        pub static LAWS: &[Law] = &[$($name),*];
    };
}

laws! {
    AREA_FROM_LENGTHS: Meters * Meters => SquareMeters;
    VOLUME_FROM_LENGTH_AREA: Meters * SquareMeters => CubicMeters;
    LENGTH_FROM_AREA: SquareMeters / Meters => Meters;
    LENGTH_FROM_VOLUME: CubicMeters / SquareMeters => Meters;
    AREA_FROM_VOLUME: CubicMeters / Meters => SquareMeters;

    SPEED_FROM_LENGTH: Meters / Seconds => MetersPerSecond;
    TIME_FROM_LENGTH: Meters / MetersPerSecond => Seconds;
    LENGTH_FROM_SPEED: MetersPerSecond * Seconds => Meters;
    ACCELERATION_FROM_SPEED: MetersPerSecond / Seconds => MetersPerSecondSquared;
    TIME_FROM_SPEED: MetersPerSecond / MetersPerSecondSquared => Seconds;
    SPEED_FROM_ACCELERATION: MetersPerSecondSquared * Seconds => MetersPerSecond;

    CONCENTRATION_FROM_MASS: Grams / Liters => GramsPerLiter;
    VOLUME_FROM_MASS: Grams / GramsPerLiter => Liters;
    MASS_FROM_CONCENTRATION: GramsPerLiter * Liters => Grams;

    POWER_FROM_ENERGY: Joules / Seconds => Watts;
    TIME_FROM_ENERGY: Joules / Watts => Seconds;
    ENERGY_FROM_POWER: Watts * Seconds => Joules;
    POTENTIAL_FROM_POWER: Watts / Amperes => Volts;
    CURRENT_FROM_POWER: Watts / Volts => Amperes;
    POWER_FROM_CURRENT: Amperes * Volts => Watts;
    RESISTANCE_FROM_POTENTIAL: Volts / Amperes => Ohms;
    CURRENT_FROM_POTENTIAL: Volts / Ohms => Amperes;
    POTENTIAL_FROM_RESISTANCE: Ohms * Amperes => Volts;
    ENERGY_FROM_CHARGE: Coulombs * Volts => Joules;
    CHARGE_FROM_ENERGY: Joules / Volts => Coulombs;
    POTENTIAL_FROM_ENERGY: Joules / Coulombs => Volts;

    ANGULAR_VELOCITY_FROM_ANGLE: Degrees / Seconds => DegreesPerSecond;
    TIME_FROM_ANGLE: Degrees / DegreesPerSecond => Seconds;
    ANGLE_FROM_ANGULAR_VELOCITY: DegreesPerSecond * Seconds => Degrees;
}

/// Find the law for `lhs operator rhs`.
///
/// Products are commutative: when only `rhs × lhs` is tabulated, the
/// canonical law is returned with its operands swapped. Quotients must
/// match exactly.
pub fn resolve(lhs: Dimension, operator: Operator, rhs: Dimension) -> Result<Law, UnitError> {
    let exact = LAWS.iter().find(|law| law.matches(lhs, operator, rhs)).copied();
    let found = match (exact, operator) {
        (Some(law), _) => Some(law),
        (None, Operator::Multiply) => LAWS
            .iter()
            .find(|law| law.matches(rhs, operator, lhs))
            .map(|law| law.commuted()),
        (None, _) => None,
    };
    found.ok_or_else(|| {
        debug!(%lhs, %operator, %rhs, "no dimension law");
        UnitError::UndefinedOperation { lhs, operator, rhs }
    })
}

pub fn multiply(lhs: Dimension, rhs: Dimension) -> Result<Law, UnitError> {
    resolve(lhs, Operator::Multiply, rhs)
}

pub fn divide(lhs: Dimension, rhs: Dimension) -> Result<Law, UnitError> {
    resolve(lhs, Operator::Divide, rhs)
}
