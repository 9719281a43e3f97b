//! Dimension families
//!
//! Every unit belongs to exactly one of 22 closed dimension families.
//! Units of the same family are mutually convertible; units of different
//! families never are.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::units::UNITS;
use crate::{Unit, UnitError};

/// A physical quantity kind whose units are mutually convertible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Length,
    Speed,
    Pressure,
    Temperature,
    TemperatureDifference,
    Mass,
    Volume,
    Acceleration,
    Power,
    Angle,
    AngularVelocity,
    Area,
    Concentration,
    Time,
    ElectricChargeCapacity,
    ElectricCurrent,
    ElectricPotential,
    ElectricResistance,
    Energy,
    Frequency,
    FuelEfficiency,
    Data,
}

impl Dimension {
    /// All families in declaration order
    pub const ALL: [Dimension; 22] = [
        Dimension::Length,
        Dimension::Speed,
        Dimension::Pressure,
        Dimension::Temperature,
        Dimension::TemperatureDifference,
        Dimension::Mass,
        Dimension::Volume,
        Dimension::Acceleration,
        Dimension::Power,
        Dimension::Angle,
        Dimension::AngularVelocity,
        Dimension::Area,
        Dimension::Concentration,
        Dimension::Time,
        Dimension::ElectricChargeCapacity,
        Dimension::ElectricCurrent,
        Dimension::ElectricPotential,
        Dimension::ElectricResistance,
        Dimension::Energy,
        Dimension::Frequency,
        Dimension::FuelEfficiency,
        Dimension::Data,
    ];

    /// Stable identifier, also used as the display-resource key prefix
    pub fn id(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Speed => "speed",
            Dimension::Pressure => "pressure",
            Dimension::Temperature => "temperature",
            Dimension::TemperatureDifference => "temperatureDifference",
            Dimension::Mass => "mass",
            Dimension::Volume => "volume",
            Dimension::Acceleration => "acceleration",
            Dimension::Power => "power",
            Dimension::Angle => "angle",
            Dimension::AngularVelocity => "angularVelocity",
            Dimension::Area => "area",
            Dimension::Concentration => "concentration",
            Dimension::Time => "time",
            Dimension::ElectricChargeCapacity => "electricChargeCapacity",
            Dimension::ElectricCurrent => "electricCurrent",
            Dimension::ElectricPotential => "electricPotential",
            Dimension::ElectricResistance => "electricResistance",
            Dimension::Energy => "energy",
            Dimension::Frequency => "frequency",
            Dimension::FuelEfficiency => "fuelEfficiency",
            Dimension::Data => "data",
        }
    }

    /// Look up a family by its stable identifier
    pub fn from_id(id: &str) -> Result<Dimension, UnitError> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.id() == id)
            .ok_or_else(|| {
                debug!(id, "unknown dimension identifier");
                UnitError::UnknownDimension(id.to_string())
            })
    }

    /// The family's reference unit.
    ///
    /// For proportional families this is the unit with coefficient 1.
    /// Temperature uses kelvin; fuel efficiency uses liters per 100 km,
    /// the pass-through end of its reciprocal conversions.
    pub fn base_unit(self) -> Unit {
        match self {
            Dimension::Length => Unit::Meters,
            Dimension::Speed => Unit::MetersPerSecond,
            Dimension::Pressure => Unit::NewtonsPerMetersSquared,
            Dimension::Temperature => Unit::Kelvin,
            Dimension::TemperatureDifference => Unit::CelsiusDelta,
            Dimension::Mass => Unit::Grams,
            Dimension::Volume => Unit::Liters,
            Dimension::Acceleration => Unit::MetersPerSecondSquared,
            Dimension::Power => Unit::Watts,
            Dimension::Angle => Unit::Degrees,
            Dimension::AngularVelocity => Unit::DegreesPerSecond,
            Dimension::Area => Unit::SquareMeters,
            Dimension::Concentration => Unit::GramsPerLiter,
            Dimension::Time => Unit::Seconds,
            Dimension::ElectricChargeCapacity => Unit::Coulombs,
            Dimension::ElectricCurrent => Unit::Amperes,
            Dimension::ElectricPotential => Unit::Volts,
            Dimension::ElectricResistance => Unit::Ohms,
            Dimension::Energy => Unit::Joules,
            Dimension::Frequency => Unit::Hertz,
            Dimension::FuelEfficiency => Unit::LitersPer100Kilometers,
            Dimension::Data => Unit::Bytes,
        }
    }

    /// Every unit of this family, in declaration order
    pub fn units(self) -> &'static [Unit] {
        UNITS.units_of(self)
    }

    /// Icon token for pickers (an SF Symbol name)
    pub fn icon(self) -> &'static str {
        match self {
            Dimension::Length => "ruler",
            Dimension::Speed => "speedometer",
            Dimension::Pressure => "gauge",
            Dimension::Temperature => "thermometer",
            Dimension::TemperatureDifference => "thermometer.transmission",
            Dimension::Mass => "scalemass",
            Dimension::Volume => "cube.box",
            Dimension::Acceleration => "arrow.up.and.down.circle",
            Dimension::Power => "bolt.circle",
            Dimension::Angle => "angle",
            Dimension::AngularVelocity => "goforward",
            Dimension::Area => "square.on.square",
            Dimension::Concentration => "drop",
            Dimension::Time => "clock",
            Dimension::ElectricChargeCapacity => "bolt.horizontal.circle",
            Dimension::ElectricCurrent => "bolt",
            Dimension::ElectricPotential => "waveform.path.ecg",
            Dimension::ElectricResistance => "wave.3.right",
            Dimension::Energy => "flame",
            Dimension::Frequency => "waveform",
            Dimension::FuelEfficiency => "fuelpump",
            Dimension::Data => "server.rack",
        }
    }

    /// Whether values convert by a plain coefficient ratio.
    ///
    /// Temperature carries offsets and fuel efficiency is reciprocal, so
    /// neither supports addition of raw values across units.
    pub fn is_proportional(self) -> bool {
        !matches!(self, Dimension::Temperature | Dimension::FuelEfficiency)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Dimension {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::from_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_unit_belongs_to_family() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.base_unit().dimension(), dimension);
        }
    }

    #[test]
    fn test_base_units_are_identity() {
        for dimension in Dimension::ALL {
            let base = dimension.base_unit();
            assert_eq!(base.coefficient(), 1.0, "{}", dimension);
            assert_eq!(base.offset(), 0.0, "{}", dimension);
        }
    }

    #[test]
    fn test_exactly_one_identity_unit_per_proportional_family() {
        for dimension in Dimension::ALL.into_iter().filter(|d| d.is_proportional()) {
            let identities: Vec<_> = dimension
                .units()
                .iter()
                .filter(|u| u.coefficient() == 1.0 && u.offset() == 0.0)
                .collect();
            // frames per second shares the hertz coefficient, cubic decimeters the liter one
            match dimension {
                Dimension::Frequency | Dimension::Volume => assert_eq!(identities.len(), 2),
                _ => assert_eq!(identities.len(), 1, "{}", dimension),
            }
            assert!(identities.contains(&&dimension.base_unit()));
        }
    }

    #[test]
    fn test_units_in_declaration_order() {
        assert_eq!(
            Dimension::Temperature.units(),
            &[Unit::Kelvin, Unit::Celsius, Unit::Fahrenheit, Unit::Rankine]
        );
        assert_eq!(
            Dimension::FuelEfficiency.units(),
            &[
                Unit::LitersPer100Kilometers,
                Unit::MilesPerImperialGallon,
                Unit::MilesPerGallon
            ]
        );
        assert_eq!(Dimension::Length.units().len(), 22);
        assert_eq!(Dimension::Data.units().len(), 35);
    }

    #[test]
    fn test_families_partition_the_catalog() {
        let total: usize = Dimension::ALL.iter().map(|d| d.units().len()).sum();
        assert_eq!(total, Unit::ALL.len());
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Dimension::from_id("angularVelocity"), Ok(Dimension::AngularVelocity));
        assert_eq!("fuelEfficiency".parse::<Dimension>(), Ok(Dimension::FuelEfficiency));
        assert!(matches!(
            Dimension::from_id("luminosity"),
            Err(UnitError::UnknownDimension(_))
        ));
    }

    #[test]
    fn test_serde_uses_identifier() {
        for dimension in Dimension::ALL {
            let json = serde_json::to_string(&dimension).unwrap();
            assert_eq!(json, format!("\"{}\"", dimension.id()));
        }
    }
}
